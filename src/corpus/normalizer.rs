//! Text normalization for the Gutenberg Commedia.
//!
//! Splits the raw text at the canticle headings, strips canto headings,
//! punctuation, and digits, lowercases, and exposes a canto splitter.
//! Canto boundaries survive normalization as a canonical blank-line
//! separator, which the entropy analysis relies on.

use regex::Regex;

use crate::error::{AnalysisError, Result};
use crate::types::Canticle;

/// The canonical canto separator left behind by blank-line collapsing.
const CANTO_SEPARATOR: &str = "\n\n\n \n\n\n";

/// The three cleaned sub-corpora plus the combined corpus.
#[derive(Debug, Clone)]
pub struct NormalizedCorpus {
    pub inferno: String,
    pub purgatorio: String,
    pub paradiso: String,
    pub whole: String,
}

impl NormalizedCorpus {
    /// The cleaned text for one canticle.
    pub fn canticle(&self, canticle: Canticle) -> &str {
        match canticle {
            Canticle::Inferno => &self.inferno,
            Canticle::Purgatorio => &self.purgatorio,
            Canticle::Paradiso => &self.paradiso,
        }
    }
}

/// Regex-based cleaner for the raw corpus text.
#[derive(Debug)]
pub struct TextNormalizer {
    canto_heading: Regex,
    blank_runs: Regex,
    canticle_markers: Regex,
    punctuation: Regex,
    digits: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        // The patterns are literals; compilation cannot fail.
        Self {
            canto_heading: Regex::new(r"(?i)\bCanto\s+[IVXLCDM]+\b").unwrap(),
            blank_runs: Regex::new(r"\s*\n\s*\n\s*").unwrap(),
            canticle_markers: Regex::new(r"(?i)INFERNO|PURGATORIO|PARADISO").unwrap(),
            punctuation: Regex::new(r"[^\w\s]").unwrap(),
            digits: Regex::new(r"\d+").unwrap(),
        }
    }

    /// Split the raw text into canticles and clean each one.
    ///
    /// The combined corpus is the three cleaned canticles joined by
    /// single spaces.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedCorpus> {
        let inferno_raw = Self::section(raw, Canticle::Inferno)?;
        let inferno_raw = Self::truncate_at(inferno_raw, Canticle::Purgatorio);
        let purgatorio_raw = Self::section(raw, Canticle::Purgatorio)?;
        let purgatorio_raw = Self::truncate_at(purgatorio_raw, Canticle::Paradiso);
        let paradiso_raw = Self::section(raw, Canticle::Paradiso)?;

        let inferno = self.clean_canticle(inferno_raw);
        let purgatorio = self.clean_canticle(purgatorio_raw);
        let paradiso = self.clean_canticle(paradiso_raw);
        let whole = format!("{inferno} {purgatorio} {paradiso}");

        Ok(NormalizedCorpus {
            inferno,
            purgatorio,
            paradiso,
            whole,
        })
    }

    /// Clean one canticle's raw text.
    ///
    /// Removes canto headings, collapses blank-line runs to the
    /// canonical separator, removes leftover canticle markers, strips
    /// punctuation and digits, and lowercases.
    pub fn clean_canticle(&self, text: &str) -> String {
        let text = self.canto_heading.replace_all(text, "");
        let text = self.blank_runs.replace_all(&text, "\n\n\n");
        let text = self.canticle_markers.replace_all(&text, "");
        let text = self.punctuation.replace_all(&text, "");
        let text = self.digits.replace_all(&text, "");
        text.to_lowercase().trim().to_string()
    }

    /// The text segment between the first and second occurrence of a
    /// canticle marker (table of contents entry vs. body heading).
    fn section(text: &str, canticle: Canticle) -> Result<&str> {
        text.split(canticle.marker())
            .nth(1)
            .ok_or_else(|| AnalysisError::CanticleNotFound(canticle.marker().to_string()))
    }

    /// Cut a segment at the next canticle's marker, if present.
    fn truncate_at(text: &str, next: Canticle) -> &str {
        text.split(next.marker()).next().unwrap_or(text)
    }
}

/// Split a cleaned canticle into its individual canti.
///
/// Empty segments are dropped and each canto is trimmed.
pub fn split_into_canti(canticle_text: &str) -> Vec<&str> {
    canticle_text
        .split(CANTO_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors the Gutenberg layout: canto headings on their own lines,
    // line-number lines between blank runs separating the canti.
    fn sample_corpus() -> String {
        [
            "The Divine Comedy",
            "INFERNO",
            "Canto I",
            "Nel mezzo del cammin di nostra vita 35",
            "",
            "12 34",
            "",
            "Canto II",
            "Lo giorno se n'andava, e l'aere bruno;",
            "PURGATORIO",
            "Canto I",
            "Per correr miglior acque alza le vele",
            "PARADISO",
            "Canto I",
            "La gloria di colui che tutto move",
        ]
        .join("\n")
    }

    #[test]
    fn test_canticle_split() {
        let corpus = sample_corpus();
        let normalized = TextNormalizer::new().normalize(&corpus).unwrap();

        assert!(normalized.inferno.contains("nel mezzo del cammin"));
        assert!(!normalized.inferno.contains("miglior acque"));
        assert!(normalized.purgatorio.contains("miglior acque"));
        assert!(normalized.paradiso.contains("gloria"));
    }

    #[test]
    fn test_cleanup_removes_headings_digits_punctuation() {
        let corpus = sample_corpus();
        let normalized = TextNormalizer::new().normalize(&corpus).unwrap();

        assert!(!normalized.inferno.contains("canto i"));
        assert!(!normalized.inferno.contains("35"));
        assert!(!normalized.inferno.contains('\''));
        assert!(!normalized.inferno.contains(';'));
        assert_eq!(normalized.inferno, normalized.inferno.to_lowercase());
    }

    #[test]
    fn test_whole_is_concatenation() {
        let corpus = sample_corpus();
        let normalized = TextNormalizer::new().normalize(&corpus).unwrap();

        let expected = format!(
            "{} {} {}",
            normalized.inferno, normalized.purgatorio, normalized.paradiso
        );
        assert_eq!(normalized.whole, expected);
    }

    #[test]
    fn test_missing_marker_is_error() {
        let result = TextNormalizer::new().normalize("no markers here");
        assert!(matches!(result, Err(AnalysisError::CanticleNotFound(_))));
    }

    #[test]
    fn test_split_into_canti() {
        let text = format!("primo canto{CANTO_SEPARATOR}secondo canto{CANTO_SEPARATOR}  ");
        let canti = split_into_canti(&text);

        assert_eq!(canti, vec!["primo canto", "secondo canto"]);
    }

    #[test]
    fn test_canto_boundaries_survive_normalization() {
        let corpus = sample_corpus();
        let normalized = TextNormalizer::new().normalize(&corpus).unwrap();

        // The heading-only lines between canti collapse into the
        // canonical separator, leaving two canti in Inferno.
        let canti = split_into_canti(&normalized.inferno);
        assert_eq!(canti.len(), 2);
    }
}
