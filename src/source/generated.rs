// Placeholder data used while no backend is connected.
use crate::model::{Categories, Clearance, Offer, Product, SourceError, Store, StoreData};
use crate::source::traits::ProductSource;
use rand::Rng;

pub const GENERATED_STORES: [&str; 4] = ["Føtex", "Netto", "Bilka", "Salling"];

pub struct GeneratedSource {
    count: usize,
}

impl GeneratedSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

#[async_trait::async_trait]
impl ProductSource for GeneratedSource {
    fn describe(&self) -> String {
        format!("generated ({} products)", self.count)
    }

    async fn fetch(&self) -> Result<Vec<StoreData>, SourceError> {
        Ok(generate_store_data(&mut rand::rng(), self.count))
    }
}

/// One single-clearance store per product, numbered from 1.
pub fn generate_store_data<R: Rng>(rng: &mut R, count: usize) -> Vec<StoreData> {
    (1..=count)
        .map(|i| {
            let price = f64::from(rng.random_range(10..=50_u32));
            let original_price = price + f64::from(rng.random_range(1..=85_u32));
            let discount = f64::from(rng.random_range(5..=99_u32));
            let brand = GENERATED_STORES[rng.random_range(0..GENERATED_STORES.len())];

            StoreData {
                store: Store {
                    brand: brand.to_string(),
                    name: brand.to_string(),
                    ..Default::default()
                },
                clearances: vec![Clearance {
                    offer: Offer {
                        ean: i.to_string(),
                        currency: "DKK".to_string(),
                        new_price: price,
                        original_price,
                        percent_discount: discount,
                        discount: original_price - price,
                        ..Default::default()
                    },
                    product: Product {
                        ean: i.to_string(),
                        description: format!("Product {}", i),
                        categories: Categories {
                            da: None,
                            en: Some(format!("This is a brief description for Product {}", i)),
                        },
                        image: None,
                    },
                }],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate_store_data(&mut rng, 200);
        assert_eq!(data.len(), 200);

        for (i, entry) in data.iter().enumerate() {
            let offer = &entry.clearances[0].offer;
            assert_eq!(offer.ean, (i + 1).to_string());
            assert!((10.0..=50.0).contains(&offer.new_price));
            let markup = offer.original_price - offer.new_price;
            assert!((1.0..=85.0).contains(&markup));
            assert!((5.0..=99.0).contains(&offer.percent_discount));
            assert!(GENERATED_STORES.contains(&entry.store.brand.as_str()));
            assert!(entry.clearances[0].product.image.is_none());
        }
    }

    #[tokio::test]
    async fn source_yields_requested_count() {
        let data = GeneratedSource::new(5).fetch().await.unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[4].clearances[0].product.description, "Product 5");
    }
}
