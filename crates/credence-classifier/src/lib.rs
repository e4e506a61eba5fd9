//! Credence Classifier
//!
//! Single entry point that labels a narrative as Evidence-Based,
//! Opinion-Based or Unclear and explains why.
//!
//! # Architecture
//!
//! ```text
//! Text ─→ guard ─→ Annotator ─→ FeatureExtractor ─→ ScoringModel ─→ explain ─→ ClassificationResult
//!           │
//!           └─ empty text: Unclear / 0.0, nothing else runs
//! ```
//!
//! The classifier never persists anything; callers store the result.
//!
//! # Example Usage
//!
//! ```
//! use credence_classifier::Classifier;
//! use credence_domain::{Annotations, Label};
//! use credence_domain::traits::Annotator;
//!
//! struct Whitespace;
//!
//! impl Annotator for Whitespace {
//!     type Error = std::convert::Infallible;
//!
//!     fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
//!         Ok(Annotations::from_words(text))
//!     }
//! }
//!
//! let classifier = Classifier::new(Whitespace);
//! let result = classifier.classify("I think he is crazy and a liar", &[]).unwrap();
//!
//! assert_eq!(result.label, Label::OpinionBased);
//! assert_eq!(result.classifier_version, "anchored-v4");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
pub mod explanation;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, ThresholdOverrides};
pub use error::ClassifierError;
pub use explanation::{explain, explain_missing_text, MISSING_TEXT_REASON};
