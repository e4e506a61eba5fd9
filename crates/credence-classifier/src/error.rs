//! Error types for the Classifier

use credence_extractor::ExtractorError;
use thiserror::Error;

/// Errors that can occur during classification
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Annotation provider error
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lexicon could not be built
    #[error(transparent)]
    Lexicon(#[from] ExtractorError),
}
