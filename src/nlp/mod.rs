//! Tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::tokenize;
