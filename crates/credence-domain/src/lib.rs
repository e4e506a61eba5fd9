//! Credence Domain Layer
//!
//! This crate contains the value types, collaborator traits and scoring models
//! of the Credence credibility classifier. It performs no I/O and depends only on
//! `serde` for derives; every other layer depends upon it.
//!
//! ## Key Concepts
//!
//! - **TextFeatures**: fixed-shape record of the linguistic and attachment cues
//!   found in a narrative submission
//! - **ScoringModel**: a versioned, pure mapping from features to a
//!   [`ScoreBreakdown`] and a [`Label`]
//! - **Revision**: the registry of scoring-formula revisions, so historical
//!   results stay attributable to the exact formula that produced them
//! - **ClassificationResult**: label, score, explanation and version tag
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Annotation and persistence collaborators are trait definitions here,
//!   implemented in `credence-nlp` and `credence-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod attachment;
pub mod features;
pub mod label;
pub mod result;
pub mod revision;
pub mod scoring;
pub mod traits;

// Re-exports for convenience
pub use annotation::{Annotations, EntityKind, EntitySpan, Token};
pub use attachment::AttachmentMetadata;
pub use features::TextFeatures;
pub use label::Label;
pub use result::{ClassificationResult, Explanation};
pub use revision::{compare_revisions, Revision};
pub use scoring::{
    AdditiveModel, AdditiveThresholds, AnchorWeights, AnchoredModel, DecisionThresholds,
    ScoreBreakdown, ScoringModel, SummaryFormat,
};
pub use traits::Record;
