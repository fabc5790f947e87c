use std::cmp::Ordering;
use tracing::{debug, info};

use menudb_core::config::SearchSettings;
use menudb_core::traits::CatalogSearch;
use menudb_core::types::{Category, CategoryFilter, SearchHit};
use menudb_core::Catalog;

use crate::analyzer::Analyzer;
use crate::tfidf::TfidfVectorizer;
use crate::vector::SparseVector;

/// Word-level TF-IDF index over the catalog corpus. Row `i` of the matrix
/// belongs to catalog item `i`.
pub struct LexicalIndex {
    vectorizer: TfidfVectorizer,
    matrix: Vec<SparseVector>,
    categories: Vec<Category>,
}

impl LexicalIndex {
    pub fn build(catalog: &Catalog, settings: &SearchSettings) -> Self {
        let corpus = catalog.document_corpus();
        let analyzer = Analyzer::word((settings.word_ngram_min, settings.word_ngram_max), settings.min_token_len);
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(analyzer, &corpus);
        info!(documents = matrix.len(), terms = vectorizer.vocabulary_len(), "lexical index built");
        let categories = catalog.items().iter().map(|item| item.category).collect();
        Self { vectorizer, matrix, categories }
    }

    pub fn len(&self) -> usize { self.matrix.len() }

    pub fn is_empty(&self) -> bool { self.matrix.is_empty() }

    /// Cosine similarity of `query` with every item, in catalog order.
    pub fn scores(&self, query: &str) -> Vec<f32> {
        let query_vec = self.vectorizer.transform(&query.to_lowercase());
        self.matrix.iter().map(|doc| query_vec.cosine(doc)).collect()
    }
}

impl CatalogSearch for LexicalIndex {
    fn search(&self, query: &str, filter: CategoryFilter) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .scores(query)
            .into_iter()
            .enumerate()
            .filter(|&(id, score)| score > 0.0 && filter.allows(self.categories[id]))
            .map(|(id, score)| SearchHit { id, score })
            .collect();
        // stable sort: equal scores stay in catalog order
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        debug!(query, %filter, hits = hits.len(), "lexical search");
        hits
    }
}
