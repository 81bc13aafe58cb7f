// Landing page search bar: collects a term and a store, then redirects to the search route.
use crate::filter::{SearchQuery, StoreFilter};

#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    pub search_term: String,
    pub selected_store: StoreFilter,
}

impl SearchBar {
    pub fn new(search_term: &str, selected_store: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            selected_store: StoreFilter::parse(selected_store),
        }
    }

    pub fn redirect_url(&self) -> String {
        SearchQuery {
            search_term: Some(self.search_term.clone()),
            selected_store: self.selected_store.clone(),
        }
        .to_url()
    }
}
