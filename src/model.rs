// Core structs: wire shapes of the store API, the flattened product record, errors
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One store together with its current clearance offers.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub store: Store,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clearances: Vec<Clearance>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Store {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    /// `[longitude, latitude]`
    #[serde(deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub extra: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub open: Option<String>,
    pub close: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub closed: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_flow: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Clearance {
    #[serde(deserialize_with = "null_as_default")]
    pub offer: Offer,
    #[serde(deserialize_with = "null_as_default")]
    pub product: Product,
}

/// A time-boxed price reduction for one product at one store.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    #[serde(deserialize_with = "null_as_default")]
    pub ean: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub original_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub percent_discount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub stock: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub stock_unit: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub ean: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Categories,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Categories {
    pub da: Option<String>,
    pub en: Option<String>,
}

/// Reads an explicit JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flattened view record rendered by the search page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: f64,
    pub discount: f64,
    pub store: String,
    pub end_time: Option<DateTime<Utc>>,
    pub image_url: String,
}

/// Body of `GET /api/python`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_data_decodes_api_shape() {
        let json = r#"[{
            "store": {
                "id": "a1", "name": "Netto Roskilde", "brand": "netto",
                "address": {"street": "Algade 1", "city": "Roskilde", "zip": "4000", "country": "DK", "extra": null},
                "coordinates": [12.08, 55.64],
                "hours": [{"date": "2024-05-01", "open": "2024-05-01T08:00:00", "close": "2024-05-01T22:00:00",
                           "closed": false, "type": "store", "customerFlow": [0.1, 0.3]}]
            },
            "clearances": [{
                "offer": {"ean": "5701", "currency": "DKK", "newPrice": 12.5, "originalPrice": 25.0,
                          "percentDiscount": 50.0, "discount": 12.5, "startTime": "2024-05-01T06:00:00.000Z",
                          "endTime": "2024-05-01T21:00:00.000Z", "lastUpdate": "2024-05-01T06:05:00.000Z",
                          "stock": 3, "stockUnit": "each"},
                "product": {"ean": "5701", "description": "Skyr", "categories": {"da": "Mejeri", "en": "Dairy"}, "image": null}
            }]
        }]"#;

        let data: Vec<StoreData> = serde_json::from_str(json).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].store.brand, "netto");
        assert_eq!(data[0].store.hours[0].kind, "store");
        let clearance = &data[0].clearances[0];
        assert_eq!(clearance.offer.new_price, 12.5);
        assert_eq!(clearance.offer.stock_unit, "each");
        assert!(clearance.offer.end_time.is_some());
        assert_eq!(clearance.product.categories.en.as_deref(), Some("Dairy"));
        assert!(clearance.product.image.is_none());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let json = r#"[{
            "store": {"id": null, "brand": null, "address": null, "coordinates": null, "hours": null},
            "clearances": [{
                "offer": {"ean": "7", "newPrice": 5.0, "stock": null, "stockUnit": null, "endTime": null},
                "product": {"ean": "7", "description": null, "categories": null, "image": null}
            }]
        }]"#;

        let data: Vec<StoreData> = serde_json::from_str(json).unwrap();
        assert_eq!(data[0].store.brand, "");
        assert!(data[0].store.hours.is_empty());
        let clearance = &data[0].clearances[0];
        assert_eq!(clearance.offer.new_price, 5.0);
        assert_eq!(clearance.offer.stock, 0.0);
        assert_eq!(clearance.offer.stock_unit, "");
        assert_eq!(clearance.product.description, "");
        assert!(clearance.product.categories.en.is_none());
    }

    #[test]
    fn null_store_and_clearances_are_empty() {
        let data: Vec<StoreData> =
            serde_json::from_str(r#"[{"store": null, "clearances": null}]"#).unwrap();
        assert_eq!(data[0].store.name, "");
        assert!(data[0].clearances.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let data: Vec<StoreData> =
            serde_json::from_str(r#"[{"clearances": [{"offer": {}, "product": {}}]}]"#).unwrap();
        let clearance = &data[0].clearances[0];
        assert_eq!(clearance.offer.new_price, 0.0);
        assert!(clearance.offer.end_time.is_none());
        assert_eq!(clearance.product.description, "");
        assert_eq!(data[0].store.brand, "");
    }
}
