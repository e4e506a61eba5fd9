//! Classification results and their explanations

use crate::{Label, ScoreBreakdown, TextFeatures};
use serde::{Deserialize, Serialize};

/// Structured audit record of one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Version tag of the scoring revision
    pub version: String,

    /// Extracted features (absent when no text was classified)
    pub features: Option<TextFeatures>,

    /// Sub-scores and decision (absent when no text was classified)
    pub breakdown: Option<ScoreBreakdown>,

    /// Why scoring was skipped, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Fixed-format one-line summary, stable per version tag
    pub summary: String,
}

/// Outcome of classifying one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Credibility label
    pub label: Label,

    /// Confidence score [0.0, 1.0]
    pub score: f64,

    /// Audit record
    pub explanation: Explanation,

    /// Version tag of the scoring revision that produced this result
    pub classifier_version: String,
}

impl ClassificationResult {
    /// Whether the classifier actually scored text
    pub fn was_scored(&self) -> bool {
        self.explanation.breakdown.is_some()
    }
}
