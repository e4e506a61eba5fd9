//! Configuration for the Classifier

use credence_domain::{DecisionThresholds, Revision, ScoringModel};
use credence_extractor::LexiconConfig;
use serde::{Deserialize, Serialize};

/// Per-threshold overrides for the anchored revision
///
/// Unset fields keep the default threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    /// Minimum evidence score for Evidence-Based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_min: Option<f64>,

    /// Minimum opinion score for Opinion-Based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opinion_min: Option<f64>,

    /// Maximum anchors for Opinion-Based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opinion_max_anchors: Option<f64>,
}

impl ThresholdOverrides {
    /// Whether any threshold is overridden
    pub fn is_empty(&self) -> bool {
        self.evidence_min.is_none()
            && self.opinion_min.is_none()
            && self.opinion_max_anchors.is_none()
    }

    /// Apply the overrides on top of the default thresholds
    pub fn resolve(&self) -> DecisionThresholds {
        let defaults = DecisionThresholds::default();
        DecisionThresholds {
            evidence_min: self.evidence_min.unwrap_or(defaults.evidence_min),
            opinion_min: self.opinion_min.unwrap_or(defaults.opinion_min),
            opinion_max_anchors: self
                .opinion_max_anchors
                .unwrap_or(defaults.opinion_max_anchors),
        }
    }
}

/// Configuration for the Classifier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Scoring revision
    #[serde(default)]
    pub revision: Revision,

    /// Threshold overrides (anchored revision only)
    #[serde(default)]
    pub thresholds: ThresholdOverrides,

    /// Phrase lists
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl ClassifierConfig {
    /// Strict preset: a higher bar for Evidence-Based
    pub fn strict() -> Self {
        Self {
            thresholds: ThresholdOverrides {
                evidence_min: Some(0.55),
                ..ThresholdOverrides::default()
            },
            ..Self::default()
        }
    }

    /// Historical preset: the additive revision
    pub fn historical() -> Self {
        Self {
            revision: Revision::AdditiveV1,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let overrides = [
            ("evidence_min", self.thresholds.evidence_min),
            ("opinion_min", self.thresholds.opinion_min),
            ("opinion_max_anchors", self.thresholds.opinion_max_anchors),
        ];

        for (name, value) in overrides {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    return Err(format!("{} must be between 0.0 and 1.0", name));
                }
            }
        }

        if self.revision != Revision::AnchoredV4 && !self.thresholds.is_empty() {
            return Err(format!(
                "threshold overrides are not supported by revision {}",
                self.revision
            ));
        }

        self.lexicon.validate()
    }

    /// Build the configured scoring model
    pub fn model(&self) -> Box<dyn ScoringModel> {
        self.revision.model_with_thresholds(self.thresholds.resolve())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
