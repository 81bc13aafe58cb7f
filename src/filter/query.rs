// Query string of the search route: `searchTerm` and `selectedStore`.
use super::StoreFilter;
use url::form_urlencoded;

pub const SEARCH_PATH: &str = "/search";
pub const PARAM_SEARCH_TERM: &str = "searchTerm";
pub const PARAM_SELECTED_STORE: &str = "selectedStore";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search_term: Option<String>,
    pub selected_store: StoreFilter,
}

impl SearchQuery {
    /// Parses a raw query string. A leading `?` and unrelated keys are ignored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start_matches('?');
        let mut query = SearchQuery::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                PARAM_SEARCH_TERM => query.search_term = Some(value.into_owned()),
                PARAM_SELECTED_STORE => query.selected_store = StoreFilter::parse(&value),
                _ => {}
            }
        }
        query
    }

    /// Parses the query part of a full or path-only URL.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((_, query)) => Self::parse(query),
            None => Self::default(),
        }
    }

    /// `/search?searchTerm=..&selectedStore=..`
    pub fn to_url(&self) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair(PARAM_SEARCH_TERM, self.search_term.as_deref().unwrap_or(""))
            .append_pair(PARAM_SELECTED_STORE, &self.selected_store.to_string())
            .finish();
        format!("{}?{}", SEARCH_PATH, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_store_means_all_stores() {
        let query = SearchQuery::parse("searchTerm=milk");
        assert_eq!(query.search_term.as_deref(), Some("milk"));
        assert_eq!(query.selected_store, StoreFilter::All);
    }

    #[test]
    fn decodes_percent_and_plus_encoding() {
        let query = SearchQuery::parse("?searchTerm=dark%20chocolate&selectedStore=F%C3%B8tex");
        assert_eq!(query.search_term.as_deref(), Some("dark chocolate"));
        assert_eq!(query.selected_store, StoreFilter::Brand("Føtex".into()));

        let query = SearchQuery::parse("searchTerm=dark+chocolate&selectedStore=All+Stores");
        assert_eq!(query.search_term.as_deref(), Some("dark chocolate"));
        assert_eq!(query.selected_store, StoreFilter::All);
    }

    #[test]
    fn empty_query_has_no_overrides() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::default());
        assert_eq!(SearchQuery::from_url("/search"), SearchQuery::default());
    }

    #[test]
    fn url_round_trips() {
        let query = SearchQuery {
            search_term: Some("rød pølse & brød".into()),
            selected_store: StoreFilter::Brand("Netto".into()),
        };
        let url = query.to_url();
        assert!(url.starts_with("/search?searchTerm="));
        assert_eq!(SearchQuery::from_url(&url), query);
    }
}
