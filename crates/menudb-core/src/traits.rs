use crate::types::{CategoryFilter, SearchHit};

pub trait CatalogSearch: Send + Sync {
    fn search(&self, query: &str, filter: CategoryFilter) -> Vec<SearchHit>;
}

pub trait WordSuggester: Send + Sync {
    fn suggest(&self, query: &str, top_n: usize) -> Vec<String>;
}
