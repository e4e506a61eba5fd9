//! Lexicon configuration

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const EVIDENCE_PHRASES: &[&str] = &[
    "screenshot",
    "screenshots",
    "photo",
    "photos",
    "video",
    "recording",
    "invoice",
    "receipt",
    "contract",
    "agreement",
    "email",
    "text message",
    "bank statement",
    "police report",
    "case number",
    "report number",
    "evidence",
    "proof",
    "documentation",
    "documents",
];

const OPINION_PHRASES: &[&str] = &[
    "i think",
    "i feel",
    "i believe",
    "in my opinion",
    "seems like",
    "probably",
    "maybe",
    "kind of",
    "sort of",
    "i guess",
];

const ACCUSATION_TERMS: &[&str] = &[
    "scam",
    "scammed",
    "steal",
    "stole",
    "stolen",
    "abuse",
    "abused",
    "cheat",
    "cheated",
    "lie",
    "lied",
    "liar",
    "gaslight",
    "gaslit",
    "gaslighted",
    "harass",
    "harassed",
    "manipulated",
    "ghosted",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_evidence_phrases() -> Vec<String> {
    to_strings(EVIDENCE_PHRASES)
}

fn default_opinion_phrases() -> Vec<String> {
    to_strings(OPINION_PHRASES)
}

fn default_accusation_terms() -> Vec<String> {
    to_strings(ACCUSATION_TERMS)
}

/// Normalized form of a phrase: lower-cased words joined by single spaces
pub(crate) fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Phrase lists feeding the lexicon
///
/// Missing lists fall back to the built-in defaults, so a TOML file only needs
/// the lists it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Phrases naming artifacts a reviewer could verify
    #[serde(default = "default_evidence_phrases")]
    pub evidence_phrases: Vec<String>,

    /// Hedging phrases
    #[serde(default = "default_opinion_phrases")]
    pub opinion_phrases: Vec<String>,

    /// Single-word accusation terms, matched against lemmas
    #[serde(default = "default_accusation_terms")]
    pub accusation_terms: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            evidence_phrases: default_evidence_phrases(),
            opinion_phrases: default_opinion_phrases(),
            accusation_terms: default_accusation_terms(),
        }
    }
}

impl LexiconConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.evidence_phrases.is_empty() {
            return Err("evidence_phrases must not be empty".to_string());
        }
        if self.opinion_phrases.is_empty() {
            return Err("opinion_phrases must not be empty".to_string());
        }

        for phrase in self.evidence_phrases.iter().chain(&self.opinion_phrases) {
            if phrase.trim().is_empty() {
                return Err("phrases must not be blank".to_string());
            }
        }

        let evidence: HashSet<String> =
            self.evidence_phrases.iter().map(|p| normalize_phrase(p)).collect();
        if let Some(shared) = self
            .opinion_phrases
            .iter()
            .map(|p| normalize_phrase(p))
            .find(|p| evidence.contains(p))
        {
            return Err(format!(
                "phrase '{}' appears in both evidence_phrases and opinion_phrases",
                shared
            ));
        }

        for term in &self.accusation_terms {
            if term.split_whitespace().count() != 1 {
                return Err(format!("accusation term '{}' must be a single word", term));
            }
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
