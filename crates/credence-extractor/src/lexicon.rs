//! Phrase lexicon

use crate::config::{normalize_phrase, LexiconConfig};
use crate::ExtractorError;
use std::collections::{BTreeSet, HashSet};

/// Lexicon category of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseCategory {
    /// Verifiable artifact
    Evidence,
    /// Hedging language
    Opinion,
}

/// Immutable phrase sets used by the matcher and the accusation count
///
/// Phrases are stored as lower-cased word sequences, deduplicated per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseLexicon {
    evidence: Vec<Vec<String>>,
    opinion: Vec<Vec<String>>,
    accusation: HashSet<String>,
}

fn phrase_words(phrases: &[String]) -> Vec<Vec<String>> {
    let unique: BTreeSet<String> = phrases
        .iter()
        .map(|p| normalize_phrase(p))
        .filter(|p| !p.is_empty())
        .collect();

    unique
        .into_iter()
        .map(|p| p.split(' ').map(str::to_string).collect())
        .collect()
}

impl PhraseLexicon {
    /// Build a lexicon from validated configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::InvalidLexicon)?;
        Ok(Self::build(config))
    }

    fn build(config: &LexiconConfig) -> Self {
        Self {
            evidence: phrase_words(&config.evidence_phrases),
            opinion: phrase_words(&config.opinion_phrases),
            accusation: config
                .accusation_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Phrases of one category as word sequences
    pub fn phrases(&self, category: PhraseCategory) -> &[Vec<String>] {
        match category {
            PhraseCategory::Evidence => &self.evidence,
            PhraseCategory::Opinion => &self.opinion,
        }
    }

    /// Whether a lower-cased lemma is an accusation term
    pub fn is_accusation(&self, lemma: &str) -> bool {
        self.accusation.contains(lemma)
    }

    /// Accusation terms, sorted
    pub fn accusation_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.accusation.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}

impl Default for PhraseLexicon {
    fn default() -> Self {
        Self::build(&LexiconConfig::default())
    }
}
