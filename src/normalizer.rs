use crate::model::{Clearance, ProcessedProduct, StoreData};

/// Raw store identifiers and the display names they map to.
const BRAND_TABLE: &[(&str, &str)] = &[
    ("netto", "Netto"),
    ("foetex", "Føtex"),
    ("føtex", "Føtex"),
    ("bilka", "Bilka"),
    ("salling", "Salling"),
];

/// Maps a raw brand to its display name. Unknown brands pass through unchanged.
pub fn normalize_brand(brand: &str) -> String {
    let key = brand.trim().to_lowercase();
    BRAND_TABLE
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| brand.to_string())
}

/// Flattens every store's clearances into product records, in input order.
pub fn normalize_all(data: &[StoreData], placeholder_image: &str) -> Vec<ProcessedProduct> {
    data.iter()
        .flat_map(|entry| {
            let store = normalize_brand(&entry.store.brand);
            entry
                .clearances
                .iter()
                .map(move |clearance| normalize_clearance(clearance, &store, placeholder_image))
        })
        .collect()
}

fn normalize_clearance(clearance: &Clearance, store: &str, placeholder_image: &str) -> ProcessedProduct {
    let offer = &clearance.offer;
    let product = &clearance.product;

    let description = non_empty(&product.categories.en)
        .or_else(|| non_empty(&product.categories.da))
        .unwrap_or_default()
        .to_string();

    ProcessedProduct {
        id: offer.ean.clone(),
        name: product.description.clone(),
        description,
        price: offer.new_price,
        original_price: offer.original_price,
        discount: offer.percent_discount,
        store: store.to_string(),
        end_time: offer.end_time,
        image_url: non_empty(&product.image)
            .unwrap_or(placeholder_image)
            .to_string(),
    }
}

/// Empty strings count as missing, same as `None`.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
