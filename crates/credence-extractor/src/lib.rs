//! Credence Extractor
//!
//! Turns a narrative, its attachment metadata and the annotation provider's
//! output into a fixed-shape [`TextFeatures`](credence_domain::TextFeatures)
//! record.
//!
//! # Architecture
//!
//! ```text
//! Annotations ─┐
//! Text ────────┼→ FeatureExtractor ─→ TextFeatures
//! Attachments ─┘      │
//!                     ├─ PhraseMatcher (PhraseLexicon)
//!                     └─ patterns (URL / identifier regexes)
//! ```
//!
//! The lexicon is built once from a [`LexiconConfig`] and never mutated; the
//! regex tables are compiled once per process. Extraction itself cannot fail.
//!
//! # Example Usage
//!
//! ```
//! use credence_domain::Annotations;
//! use credence_extractor::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::default();
//! let text = "I sent a screenshot and the invoice for ref #A1234";
//! let features = extractor.extract(text, &[], &Annotations::from_words(text));
//!
//! assert_eq!(features.evidence_hits, 2);
//! assert_eq!(features.id_hits, 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod lexicon;
mod matcher;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use config::LexiconConfig;
pub use error::ExtractorError;
pub use extractor::FeatureExtractor;
pub use lexicon::{PhraseCategory, PhraseLexicon};
pub use matcher::{MatchCounts, PhraseMatcher};
