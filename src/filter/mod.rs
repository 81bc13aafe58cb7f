// Filter state for the search page and the matching rule behind it.

pub mod query;

use crate::model::ProcessedProduct;
use std::fmt;

pub use query::SearchQuery;

pub const ALL_STORES: &str = "All Stores";
pub const MAX_PRICE: f64 = 250.0;

/// Store options offered by the filter panel and the landing search bar.
pub const STORE_OPTIONS: [&str; 5] = [ALL_STORES, "Føtex", "Netto", "Bilka", "Salling"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoreFilter {
    #[default]
    All,
    Brand(String),
}

impl StoreFilter {
    /// Empty input and the "All Stores" sentinel both select every store.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_STORES {
            StoreFilter::All
        } else {
            StoreFilter::Brand(value.to_string())
        }
    }

    pub fn accepts(&self, store: &str) -> bool {
        match self {
            StoreFilter::All => true,
            StoreFilter::Brand(brand) => brand == store,
        }
    }
}

impl fmt::Display for StoreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreFilter::All => write!(f, "{}", ALL_STORES),
            StoreFilter::Brand(brand) => write!(f, "{}", brand),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub price_ceiling: f64,
    pub store: StoreFilter,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_ceiling: MAX_PRICE,
            store: StoreFilter::All,
            search_term: String::new(),
        }
    }
}

impl FilterState {
    /// Defaults overridden by whatever the query string carries.
    pub fn seeded(query: &SearchQuery) -> Self {
        let mut state = Self::default();
        if let Some(term) = &query.search_term {
            state.search_term = term.clone();
        }
        state.store = query.selected_store.clone();
        state
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, product: &ProcessedProduct) -> bool {
        let matches_store = self.store.accepts(&product.store);
        let matches_price = product.price <= self.price_ceiling;
        let matches_term = if self.search_term.is_empty() {
            true
        } else {
            let needle = self.search_term.to_lowercase();
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        };
        matches_store && matches_price && matches_term
    }
}

/// Keeps the products that pass `filters`, preserving source order.
pub fn compute_filtered(products: &[ProcessedProduct], filters: &FilterState) -> Vec<ProcessedProduct> {
    products
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}
