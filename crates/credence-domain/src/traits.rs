//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the classification core and its
//! collaborators. Implementations live in other crates.

use crate::{Annotations, AttachmentMetadata, ClassificationResult};

/// Trait for natural-language annotation of text
///
/// Implemented by the infrastructure layer (credence-nlp)
pub trait Annotator {
    /// Error type for annotation operations
    type Error;

    /// Tokenize the text and recognize named entities
    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error>;
}

impl<T: Annotator + ?Sized> Annotator for Box<T> {
    type Error = T::Error;

    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
        (**self).annotate(text)
    }
}

impl<T: Annotator + ?Sized> Annotator for std::sync::Arc<T> {
    type Error = T::Error;

    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
        (**self).annotate(text)
    }
}

/// A stored submission awaiting classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record identifier
    pub id: String,

    /// Narrative text, if any
    pub description: Option<String>,

    /// Stored record type (`evidence`, `opinion`, `pending`, ...)
    pub record_type: Option<String>,
}

/// Trait for loading submissions and storing classification results
///
/// Implemented by the infrastructure layer (credence-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Get a record by ID
    fn fetch_record(&self, id: &str) -> Result<Option<Record>, Self::Error>;

    /// Get the attachment metadata of a record
    fn fetch_attachments(&self, record_id: &str) -> Result<Vec<AttachmentMetadata>, Self::Error>;

    /// Store a classification result on a record
    ///
    /// `completed_at` is the completion timestamp (Unix epoch seconds).
    fn save_classification(
        &mut self,
        record_id: &str,
        result: &ClassificationResult,
        completed_at: u64,
    ) -> Result<(), Self::Error>;
}
