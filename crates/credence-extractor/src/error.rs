//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building the extractor
///
/// Extraction itself is total; only configuration can be rejected.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Lexicon failed validation
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}
