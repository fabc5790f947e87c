//! menudb-text
//!
//! In-memory TF-IDF scoring for the menu catalog: a word n-gram index for
//! search and a character n-gram index over the vocabulary for spelling
//! suggestions.

pub mod analyzer;
pub mod lexical;
pub mod suggest;
pub mod tantivy_utils;
pub mod tfidf;
pub mod vector;

pub use analyzer::Analyzer;
pub use lexical::LexicalIndex;
pub use suggest::SuggestionIndex;
pub use tfidf::TfidfVectorizer;
pub use vector::SparseVector;
