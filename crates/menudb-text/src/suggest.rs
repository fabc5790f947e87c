use std::cmp::Ordering;
use tracing::{debug, info};

use menudb_core::config::SearchSettings;
use menudb_core::traits::WordSuggester;
use menudb_core::Catalog;

use crate::analyzer::Analyzer;
use crate::tfidf::TfidfVectorizer;
use crate::vector::SparseVector;

/// Character n-gram index over the catalog vocabulary, used to propose
/// spellings for words that matched nothing.
pub struct SuggestionIndex {
    words: Vec<String>,
    vectorizer: TfidfVectorizer,
    vectors: Vec<SparseVector>,
}

impl SuggestionIndex {
    /// Each word is its own document. The iteration order of `vocabulary`
    /// fixes the tie order of suggestions.
    pub fn build<I>(vocabulary: I, settings: &SearchSettings) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let words: Vec<String> = vocabulary.into_iter().collect();
        let analyzer = Analyzer::char_wb((settings.char_ngram_min, settings.char_ngram_max));
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(analyzer, &words);
        info!(words = words.len(), ngrams = vectorizer.vocabulary_len(), "suggestion index built");
        Self { words, vectorizer, vectors }
    }

    pub fn from_catalog(catalog: &Catalog, settings: &SearchSettings) -> Self {
        Self::build(catalog.vocabulary(), settings)
    }

    pub fn words(&self) -> &[String] { &self.words }

    /// Words with a positive similarity to `query`, best first.
    pub fn ranked(&self, query: &str) -> Vec<(&str, f32)> {
        let query_vec = self.vectorizer.transform(&query.to_lowercase());
        let mut ranked: Vec<(&str, f32)> = self
            .words
            .iter()
            .zip(&self.vectors)
            .map(|(word, vec)| (word.as_str(), query_vec.cosine(vec)))
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

impl WordSuggester for SuggestionIndex {
    fn suggest(&self, query: &str, top_n: usize) -> Vec<String> {
        let suggestions: Vec<String> = self
            .ranked(query)
            .into_iter()
            .take(top_n)
            .map(|(word, _)| word.to_string())
            .collect();
        debug!(query, suggestions = suggestions.len(), "suggest");
        suggestions
    }
}
