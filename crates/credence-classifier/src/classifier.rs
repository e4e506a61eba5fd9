//! Core Classifier implementation

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::explanation::{explain, explain_missing_text};
use credence_domain::traits::Annotator;
use credence_domain::{
    Annotations, AttachmentMetadata, ClassificationResult, Label, Revision, ScoringModel,
};
use credence_extractor::FeatureExtractor;
use tracing::{debug, info};

/// The Classifier assigns a credibility label to a narrative
///
/// Guard, annotate, extract, score, explain. Holds only immutable state, so
/// one instance can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct Classifier<A>
where
    A: Annotator,
{
    annotator: A,
    extractor: FeatureExtractor,
    model: Box<dyn ScoringModel>,
}

impl<A> Classifier<A>
where
    A: Annotator,
    A::Error: std::fmt::Display,
{
    /// Create a Classifier with the default lexicon and the current revision
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            extractor: FeatureExtractor::default(),
            model: Revision::default().model(),
        }
    }

    /// Create a Classifier from configuration
    pub fn from_config(annotator: A, config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;

        Ok(Self {
            annotator,
            extractor: FeatureExtractor::from_config(&config.lexicon)?,
            model: config.model(),
        })
    }

    /// Replace the scoring model
    pub fn with_model(mut self, model: Box<dyn ScoringModel>) -> Self {
        self.model = model;
        self
    }

    /// Version tag stamped onto results
    pub fn version(&self) -> &str {
        self.model.version()
    }

    /// The feature extractor in use
    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Classify a narrative and its attachments
    ///
    /// Empty or whitespace-only text yields Unclear with score 0.0 without
    /// calling the annotator.
    pub fn classify(
        &self,
        text: &str,
        attachments: &[AttachmentMetadata],
    ) -> Result<ClassificationResult, ClassifierError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("No text to classify, returning {}", Label::Unclear);
            return Ok(missing_text_result(self.model.version()));
        }

        let annotations = self.annotate(text)?;
        Ok(self.classify_annotated(text, attachments, &annotations))
    }

    /// Classify text that has already been annotated
    pub fn classify_annotated(
        &self,
        text: &str,
        attachments: &[AttachmentMetadata],
        annotations: &Annotations,
    ) -> ClassificationResult {
        if text.trim().is_empty() {
            return missing_text_result(self.model.version());
        }

        let result = score_with(self.model.as_ref(), &self.extractor, text, attachments, annotations);

        info!(
            "Classified as {} (score {:.2}, version {})",
            result.label, result.score, result.classifier_version
        );

        result
    }

    /// Classify with every revision side by side, oldest first
    ///
    /// The text is annotated once; every revision uses its default thresholds.
    pub fn compare(
        &self,
        text: &str,
        attachments: &[AttachmentMetadata],
    ) -> Result<Vec<(Revision, ClassificationResult)>, ClassifierError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Revision::ALL
                .iter()
                .map(|revision| (*revision, missing_text_result(revision.as_str())))
                .collect());
        }

        let annotations = self.annotate(text)?;

        Ok(Revision::ALL
            .iter()
            .map(|revision| {
                let model = revision.model();
                let result =
                    score_with(model.as_ref(), &self.extractor, text, attachments, &annotations);
                (*revision, result)
            })
            .collect())
    }

    fn annotate(&self, text: &str) -> Result<Annotations, ClassifierError> {
        self.annotator
            .annotate(text)
            .map_err(|e| ClassifierError::Annotation(e.to_string()))
    }
}

fn score_with(
    model: &dyn ScoringModel,
    extractor: &FeatureExtractor,
    text: &str,
    attachments: &[AttachmentMetadata],
    annotations: &Annotations,
) -> ClassificationResult {
    let features = extractor.extract(text, attachments, annotations);
    let breakdown = model.score(&features);

    ClassificationResult {
        label: breakdown.label,
        score: breakdown.final_score,
        explanation: explain(&features, &breakdown, model),
        classifier_version: model.version().to_string(),
    }
}

fn missing_text_result(version: &str) -> ClassificationResult {
    ClassificationResult {
        label: Label::Unclear,
        score: 0.0,
        explanation: explain_missing_text(version),
        classifier_version: version.to_string(),
    }
}
