//! Feature record extracted from one submission

use serde::{Deserialize, Serialize};

/// Fixed-shape record of the cues found in a narrative and its attachments
///
/// Built once per classification by the feature extractor and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextFeatures {
    /// Number of alphabetic tokens
    pub word_count: usize,

    /// Evidence-phrase occurrences
    pub evidence_hits: usize,

    /// Opinion-phrase occurrences
    pub opinion_hits: usize,

    /// Any DATE or TIME entity
    pub has_dates: bool,

    /// Any MONEY entity
    pub has_money: bool,

    /// URL in the raw text or a URL-like token
    pub has_url: bool,

    /// At least two named entities of any type
    pub has_named_entities: bool,

    /// Number of named entities of any type
    pub entity_count: usize,

    /// Number of identifier-pattern families present (0-2)
    pub id_hits: usize,

    /// Accusation-term occurrences
    pub accusation_count: usize,

    /// Number of attachments
    pub attachment_count: usize,

    /// Any PERSON entity (additive revision only)
    pub has_person: bool,

    /// Any ORG or GPE entity (additive revision only)
    pub has_org_or_gpe: bool,

    /// Any attachment of a document, image or video type (additive revision only)
    pub strong_attachment_types: bool,
}

impl TextFeatures {
    /// At least one attachment
    pub fn has_attachments(&self) -> bool {
        self.attachment_count > 0
    }
}
