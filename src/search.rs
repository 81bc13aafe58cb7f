// Search page state: the loaded product list, the filter values and the derived result list.
use crate::filter::{FilterState, SearchQuery, StoreFilter, compute_filtered};
use crate::model::ProcessedProduct;
use crate::normalizer::normalize_all;
use crate::source::ProductSource;
use futures::future::join_all;
use tracing::{info, warn};

pub struct SearchPage {
    products: Vec<ProcessedProduct>,
    filters: FilterState,
    filtered: Vec<ProcessedProduct>,
}

impl SearchPage {
    /// Empty page with filters seeded from the route's query string.
    pub fn new(query: &SearchQuery) -> Self {
        Self {
            products: Vec::new(),
            filters: FilterState::seeded(query),
            filtered: Vec::new(),
        }
    }

    /// Loads every source once and installs the normalized list.
    pub async fn load(&mut self, sources: &[Box<dyn ProductSource>], placeholder_image: &str) {
        let products = load_products(sources, placeholder_image).await;
        self.set_products(products);
    }

    pub fn set_products(&mut self, products: Vec<ProcessedProduct>) {
        self.products = products;
        self.recompute();
    }

    pub fn set_price(&mut self, price: f64) {
        self.filters.price_ceiling = price;
        self.recompute();
    }

    pub fn set_store(&mut self, store: &str) {
        self.filters.store = StoreFilter::parse(store);
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filters.search_term = term.to_string();
        self.recompute();
    }

    pub fn clear_filter(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn products(&self) -> &[ProcessedProduct] {
        &self.products
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filtered(&self) -> &[ProcessedProduct] {
        &self.filtered
    }

    pub fn find(&self, id: &str) -> Option<&ProcessedProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    fn recompute(&mut self) {
        self.filtered = compute_filtered(&self.products, &self.filters);
    }
}

/// Requests all sources concurrently; failed sources are logged and contribute nothing.
pub async fn load_products(sources: &[Box<dyn ProductSource>], placeholder_image: &str) -> Vec<ProcessedProduct> {
    let results = join_all(sources.iter().map(|s| s.fetch())).await;

    let mut products = Vec::new();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(data) => {
                let batch = normalize_all(&data, placeholder_image);
                info!("Loaded {} products from {}", batch.len(), source.describe());
                products.extend(batch);
            }
            Err(e) => {
                warn!("Error fetching data from {}: {}", source.describe(), e);
            }
        }
    }
    products
}
