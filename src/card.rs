// Product card and detail view, rendered as plain text.
use crate::history::{PricePoint, PriceTrend};
use crate::model::ProcessedProduct;
use chrono::{DateTime, Utc};

/// `dd/mm/yyyy, HH:MM` in UTC, or `N/A` when the offer has no end time.
pub fn format_end_time(end_time: Option<DateTime<Utc>>) -> String {
    match end_time {
        Some(t) => t.format("%d/%m/%Y, %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

pub struct ProductCard<'a> {
    product: &'a ProcessedProduct,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a ProcessedProduct) -> Self {
        Self { product }
    }

    pub fn price_label(&self) -> String {
        format!("{} kr.", self.product.price)
    }

    pub fn original_price_label(&self) -> String {
        format!("{} kr", self.product.original_price)
    }

    pub fn discount_label(&self) -> String {
        format!("{}%", self.product.discount)
    }

    pub fn expires_label(&self) -> String {
        format_end_time(self.product.end_time)
    }

    /// One grid cell: name, prices, discount, store and expiry.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} (was {}) -{} | {} | Expires: {}",
            self.product.name,
            self.price_label(),
            self.original_price_label(),
            self.discount_label(),
            self.product.store,
            self.expires_label()
        )
    }

    /// Detail dialog content including the price history and its trend.
    pub fn detail(&self, history: &[PricePoint]) -> String {
        let p = self.product;
        let description = if p.description.is_empty() {
            "No description available."
        } else {
            p.description.as_str()
        };

        let mut out = format!(
            "{}\nPrice: {} {}\nDiscount: {}\nStore: {}\nExpire date: {}\nDescription: {}\nImage: {}\nPrice history:\n",
            p.name,
            self.price_label(),
            self.original_price_label(),
            self.discount_label(),
            p.store,
            self.expires_label(),
            description,
            p.image_url
        );
        for point in history {
            out.push_str(&format!("  {}  {}\n", point.date.format("%b"), point.price));
        }
        if let Some(trend) = PriceTrend::from_history(history) {
            out.push_str(&trend.label());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn milk() -> ProcessedProduct {
        ProcessedProduct {
            id: "5701".into(),
            name: "Milk".into(),
            description: String::new(),
            price: 12.5,
            original_price: 25.0,
            discount: 50.0,
            store: "Netto".into(),
            end_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 21, 5, 0).unwrap()),
            image_url: "/placeholder.png".into(),
        }
    }

    #[test]
    fn formats_expiry_like_en_gb() {
        assert_eq!(format_end_time(milk().end_time), "01/05/2024, 21:05");
        assert_eq!(format_end_time(None), "N/A");
    }

    #[test]
    fn summary_lists_card_fields() {
        let product = milk();
        let card = ProductCard::new(&product);
        assert_eq!(card.price_label(), "12.5 kr.");
        assert_eq!(card.original_price_label(), "25 kr");
        assert_eq!(
            card.summary(),
            "Milk | 12.5 kr. (was 25 kr) -50% | Netto | Expires: 01/05/2024, 21:05"
        );
    }

    #[test]
    fn detail_includes_history_and_trend() {
        let product = milk();
        let history = vec![
            PricePoint { date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), price: 40.0 },
            PricePoint { date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(), price: 30.0 },
        ];
        let detail = ProductCard::new(&product).detail(&history);

        assert!(detail.contains("Description: No description available."));
        assert!(detail.contains("  Jan  40"));
        assert!(detail.contains("  Feb  30"));
        assert!(detail.starts_with("Milk\nPrice: 12.5 kr. 25 kr\nDiscount: 50%\nStore: Netto\n"));
        assert!(detail.contains("Expire date: 01/05/2024, 21:05\n"));
        assert!(detail.ends_with("Trending down by 25% this month\n"));
    }
}
