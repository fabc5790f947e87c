use tantivy::tokenizer::{LowerCaser, RegexTokenizer, SimpleTokenizer, TextAnalyzer, TokenStream};
use tracing::warn;

/// Word characters in the Unicode sense, so `_` and digits stay inside a token.
pub const WORD_PATTERN: &str = r"\w+";

/// Splits text into lower-cased runs of word characters.
pub fn build_word_analyzer() -> TextAnalyzer {
	match RegexTokenizer::new(WORD_PATTERN) {
		Ok(tokenizer) => TextAnalyzer::builder(tokenizer).filter(LowerCaser).build(),
		Err(e) => {
			warn!(pattern = WORD_PATTERN, error = %e, "word pattern rejected, using simple tokenizer");
			TextAnalyzer::builder(SimpleTokenizer::default()).filter(LowerCaser).build()
		}
	}
}

/// Runs `analyzer` over `text` and keeps tokens of at least `min_len` chars.
pub fn word_tokens(analyzer: &TextAnalyzer, text: &str, min_len: usize) -> Vec<String> {
	let mut analyzer = analyzer.clone();
	let mut stream = analyzer.token_stream(text);
	let mut tokens = Vec::new();
	while let Some(token) = stream.next() {
		if token.text.chars().count() >= min_len { tokens.push(token.text.clone()); }
	}
	tokens
}
