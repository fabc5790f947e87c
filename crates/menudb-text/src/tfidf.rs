//! Smoothed TF-IDF weighting.
//!
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, term weight = raw count * idf,
//! every vector L2-normalized. Vocabulary ids follow lexicographic term order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::analyzer::Analyzer;
use crate::vector::SparseVector;

pub struct TfidfVectorizer {
    analyzer: Analyzer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learns vocabulary and idf from `docs` and returns the fitted model with
    /// one row per document, in input order.
    pub fn fit_transform<S: AsRef<str>>(analyzer: Analyzer, docs: &[S]) -> (Self, Vec<SparseVector>) {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| analyzer.analyze(d.as_ref())).collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &analyzed {
            let distinct: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
            for term in distinct { *df.entry(term).or_insert(0) += 1; }
        }

        let n = docs.len() as f32;
        let vocabulary = df.keys().enumerate().map(|(id, term)| (term.to_string(), id)).collect();
        let idf = df.values().map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0).collect();

        let vectorizer = Self { analyzer, vocabulary, idf };
        let rows = analyzed.iter().map(|terms| vectorizer.weigh(terms)).collect();
        (vectorizer, rows)
    }

    /// Projects `text` onto the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&self.analyzer.analyze(text))
    }

    pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }

    pub fn term_id(&self, term: &str) -> Option<usize> { self.vocabulary.get(term).copied() }

    pub fn idf(&self, term: &str) -> Option<f32> { self.term_id(term).map(|id| self.idf[id]) }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut weights: BTreeMap<usize, f32> = BTreeMap::new();
        for term in terms {
            if let Some(&id) = self.vocabulary.get(term) {
                *weights.entry(id).or_insert(0.0) += 1.0;
            }
        }
        for (id, w) in weights.iter_mut() { *w *= self.idf[*id]; }
        SparseVector::from_weights(weights).normalized()
    }
}
