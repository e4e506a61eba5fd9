//! Core FeatureExtractor implementation

use crate::config::LexiconConfig;
use crate::error::ExtractorError;
use crate::lexicon::PhraseLexicon;
use crate::matcher::PhraseMatcher;
use crate::patterns;
use credence_domain::{Annotations, AttachmentMetadata, EntityKind, TextFeatures};
use tracing::debug;

/// Minimum number of entities for `has_named_entities`
pub const NAMED_ENTITY_MIN: usize = 2;

/// The FeatureExtractor converts annotated text into a feature record
///
/// Holds the immutable lexicon and its matcher; safe to share across threads.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    lexicon: PhraseLexicon,
    matcher: PhraseMatcher,
}

impl FeatureExtractor {
    /// Create a new FeatureExtractor over a lexicon
    pub fn new(lexicon: PhraseLexicon) -> Self {
        let matcher = PhraseMatcher::new(&lexicon);
        Self { lexicon, matcher }
    }

    /// Create a FeatureExtractor from lexicon configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, ExtractorError> {
        Ok(Self::new(PhraseLexicon::from_config(config)?))
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &PhraseLexicon {
        &self.lexicon
    }

    /// Extract features from text, attachments and the provider's annotations
    ///
    /// Callers short-circuit empty text before getting here.
    pub fn extract(
        &self,
        text: &str,
        attachments: &[AttachmentMetadata],
        annotations: &Annotations,
    ) -> TextFeatures {
        let tokens = &annotations.tokens;
        let entities = &annotations.entities;

        let word_count = tokens.iter().filter(|t| t.is_alpha).count();

        let counts = self.matcher.count(tokens);

        let entity_count = entities.len();
        let has_dates = entities.iter().any(|e| e.kind.is_temporal());
        let has_money = entities.iter().any(|e| e.kind == EntityKind::Money);
        let has_person = entities.iter().any(|e| e.kind == EntityKind::Person);
        let has_org_or_gpe = entities
            .iter()
            .any(|e| matches!(e.kind, EntityKind::Org | EntityKind::Gpe));

        let has_url = patterns::contains_url(text) || tokens.iter().any(|t| t.like_url);

        let id_hits = patterns::count_id_families(text);

        let accusation_count = tokens
            .iter()
            .filter(|t| self.lexicon.is_accusation(&t.lemma_or_text()))
            .count();

        let features = TextFeatures {
            word_count,
            evidence_hits: counts.evidence,
            opinion_hits: counts.opinion,
            has_dates,
            has_money,
            has_url,
            has_named_entities: entity_count >= NAMED_ENTITY_MIN,
            entity_count,
            id_hits,
            accusation_count,
            attachment_count: attachments.len(),
            has_person,
            has_org_or_gpe,
            strong_attachment_types: attachments.iter().any(|a| a.is_strong_evidence()),
        };

        debug!(
            "Extracted features: words={} evidence_hits={} opinion_hits={} entities={} ids={} accusations={} attachments={}",
            features.word_count,
            features.evidence_hits,
            features.opinion_hits,
            features.entity_count,
            features.id_hits,
            features.accusation_count,
            features.attachment_count
        );

        features
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(PhraseLexicon::default())
    }
}
