//! Term extraction for the TF-IDF models.
//!
//! Two analyzers are supported: word n-grams (tokens joined by a single
//! space) and character n-grams taken inside space-padded words.

use tantivy::tokenizer::TextAnalyzer;

use crate::tantivy_utils::{build_word_analyzer, word_tokens};

/// Inclusive `(min, max)` n-gram lengths.
pub type NgramRange = (usize, usize);

#[derive(Clone)]
pub enum Analyzer {
    Word { tokenizer: TextAnalyzer, ngram_range: NgramRange, min_token_len: usize },
    CharWb { ngram_range: NgramRange },
}

impl Analyzer {
    pub fn word(ngram_range: NgramRange, min_token_len: usize) -> Self {
        Analyzer::Word { tokenizer: build_word_analyzer(), ngram_range, min_token_len }
    }

    pub fn char_wb(ngram_range: NgramRange) -> Self {
        Analyzer::CharWb { ngram_range }
    }

    /// Every term occurrence in `text`, duplicates included.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        match self {
            Analyzer::Word { tokenizer, ngram_range, min_token_len } => {
                word_ngrams(&word_tokens(tokenizer, text, *min_token_len), *ngram_range)
            }
            Analyzer::CharWb { ngram_range } => char_wb_ngrams(text, *ngram_range),
        }
    }
}

/// Unigrams first, then bigrams and so on, each in text order.
pub fn word_ngrams(tokens: &[String], (min_n, max_n): NgramRange) -> Vec<String> {
    let mut grams = Vec::new();
    for n in min_n.max(1)..=max_n.min(tokens.len()) {
        if n == 1 {
            grams.extend(tokens.iter().cloned());
            continue;
        }
        grams.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    grams
}

/// Character n-grams of each whitespace-separated word padded with one space
/// on both sides. A padded word shorter than `n` is emitted once, whole, and
/// no longer n-grams are produced for it.
pub fn char_wb_ngrams(text: &str, (min_n, max_n): NgramRange) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut grams = Vec::new();
    for word in lowered.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ').chain(word.chars()).chain(std::iter::once(' ')).collect();
        let len = padded.len();
        for n in min_n.max(1)..=max_n {
            let mut offset = 0;
            grams.push(padded[..n.min(len)].iter().collect());
            while offset + n < len {
                offset += 1;
                grams.push(padded[offset..offset + n].iter().collect());
            }
            if offset == 0 {
                break;
            }
        }
    }
    grams
}
