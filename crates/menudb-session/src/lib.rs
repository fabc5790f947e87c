//! menudb-session
//!
//! One search session over a loaded catalog: owns the catalog, both indices
//! and the query log, and exposes the operations a front-end needs. Build it
//! once at startup and hand out references.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use menudb_core::config::SearchSettings;
use menudb_core::traits::{CatalogSearch, WordSuggester};
use menudb_core::{Catalog, Category, CategoryFilter, Error, MenuItem, QueryLog, Result};
use menudb_text::{LexicalIndex, SuggestionIndex};

/// A catalog item with its similarity to the query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a MenuItem,
    pub score: f32,
}

/// What a submitted query produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
    Matches { results: Vec<ScoredItem<'a>> },
    /// Nothing scored above zero; `suggestions` may be empty as well.
    NoMatches { suggestions: Vec<String> },
}

pub struct MenuSession<L = LexicalIndex, S = SuggestionIndex> where L: CatalogSearch, S: WordSuggester {
    catalog: Catalog,
    lexical: L,
    suggester: S,
    log: QueryLog,
    suggest_top_n: usize,
}

impl MenuSession {
    pub fn build(catalog: Catalog, settings: &SearchSettings) -> Self {
        let lexical = LexicalIndex::build(&catalog, settings);
        let suggester = SuggestionIndex::from_catalog(&catalog, settings);
        Self::new(catalog, lexical, suggester).with_suggest_top_n(settings.suggest_top_n)
    }

    pub fn from_csv_path(path: &Path, settings: &SearchSettings) -> Result<Self> {
        Ok(Self::build(Catalog::from_csv_path(path)?, settings))
    }
}

impl<L, S> MenuSession<L, S> where L: CatalogSearch, S: WordSuggester {
    pub fn new(catalog: Catalog, lexical: L, suggester: S) -> Self {
        let suggest_top_n = SearchSettings::default().suggest_top_n;
        Self { catalog, lexical, suggester, log: QueryLog::new(), suggest_top_n }
    }

    /// Number of suggestions `submit` asks for when nothing matches.
    pub fn with_suggest_top_n(mut self, top_n: usize) -> Self {
        self.suggest_top_n = top_n;
        self
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    pub fn categories(&self) -> Vec<Category> { self.catalog.categories() }

    pub fn query_log(&self) -> &QueryLog { &self.log }

    /// Items with a positive score for `query`, best first.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<ScoredItem<'_>> {
        self.lexical
            .search(query, filter)
            .into_iter()
            .filter_map(|hit| self.catalog.get(hit.id).map(|item| ScoredItem { item, score: hit.score }))
            .collect()
    }

    pub fn suggest(&self, query: &str, top_n: usize) -> Vec<String> {
        self.suggester.suggest(query, top_n)
    }

    pub fn record(&self, query: &str) {
        self.log.record(query);
    }

    pub fn top_queries(&self, top_n: usize) -> Vec<(String, usize)> {
        self.log.top_queries(top_n)
    }

    /// Front-end flow for one query: reject blank input, log the trimmed
    /// query, search, and fall back to suggestions when nothing matches.
    pub fn submit(&self, raw_query: &str, filter: CategoryFilter) -> Result<SearchOutcome<'_>> {
        let query = raw_query.trim();
        if query.is_empty() {
            warn!("rejected empty query");
            return Err(Error::EmptyQuery);
        }
        self.record(query);
        let results = self.search(query, filter);
        if !results.is_empty() {
            return Ok(SearchOutcome::Matches { results });
        }
        let suggestions = self.suggest(query, self.suggest_top_n);
        debug!(query, suggestions = suggestions.len(), "no matches");
        Ok(SearchOutcome::NoMatches { suggestions })
    }
}
