//! Corpus loading and normalization.

pub mod normalizer;

pub use normalizer::{NormalizedCorpus, TextNormalizer};
