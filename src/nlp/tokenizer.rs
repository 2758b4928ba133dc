//! Whitespace word tokenizer.
//!
//! The normalizer guarantees lowercase, punctuation-free text, so
//! tokenization here is plain whitespace segmentation.

/// Split normalized text into word tokens.
///
/// Empty segments (from runs of whitespace or newlines) are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
