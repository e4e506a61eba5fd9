//! Registry of scoring-formula revisions

use crate::scoring::{AdditiveModel, AnchoredModel, DecisionThresholds, ScoringModel};
use crate::{ScoreBreakdown, TextFeatures};
use serde::{Deserialize, Serialize};

/// A named scoring-formula revision
///
/// Revisions are never edited in place: a formula change is a new variant with
/// a new version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Revision {
    /// Single score adjusted from a neutral baseline
    AdditiveV1,

    /// Anchor-weighted evidence with suppressed hedging (current)
    #[default]
    AnchoredV4,
}

impl Revision {
    /// Every revision, oldest first
    pub const ALL: [Revision; 2] = [Revision::AdditiveV1, Revision::AnchoredV4];

    /// Revision name (equal to the default version tag)
    pub fn as_str(&self) -> &'static str {
        match self {
            Revision::AdditiveV1 => AdditiveModel::VERSION,
            Revision::AnchoredV4 => AnchoredModel::VERSION,
        }
    }

    /// Parse a revision name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "additive-v1" => Some(Revision::AdditiveV1),
            "anchored-v4" => Some(Revision::AnchoredV4),
            _ => None,
        }
    }

    /// Build the model for this revision with its default thresholds
    pub fn model(&self) -> Box<dyn ScoringModel> {
        match self {
            Revision::AdditiveV1 => Box::new(AdditiveModel::new()),
            Revision::AnchoredV4 => Box::new(AnchoredModel::new()),
        }
    }

    /// Build the model for this revision with anchored-threshold overrides
    ///
    /// The additive revision has fixed thresholds and ignores the overrides.
    pub fn model_with_thresholds(&self, thresholds: DecisionThresholds) -> Box<dyn ScoringModel> {
        match self {
            Revision::AdditiveV1 => Box::new(AdditiveModel::new()),
            Revision::AnchoredV4 => Box::new(AnchoredModel::with_thresholds(thresholds)),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Revision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid revision: {}", s))
    }
}

/// Score one feature record with every revision, oldest first
pub fn compare_revisions(features: &TextFeatures) -> Vec<(Revision, ScoreBreakdown)> {
    Revision::ALL
        .iter()
        .map(|revision| (*revision, revision.model().score(features)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;

    #[test]
    fn test_default_is_current() {
        assert_eq!(Revision::default(), Revision::AnchoredV4);
        assert_eq!(Revision::default().model().version(), "anchored-v4");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Revision::parse("ADDITIVE-V1"), Some(Revision::AdditiveV1));
        assert_eq!("anchored-v4".parse::<Revision>(), Ok(Revision::AnchoredV4));
        assert!(Revision::parse("v3").is_none());
    }

    #[test]
    fn test_model_versions_match_names() {
        for revision in Revision::ALL {
            assert_eq!(revision.model().version(), revision.as_str());
        }
    }

    #[test]
    fn test_compare_revisions_side_by_side() {
        let features = TextFeatures {
            word_count: 40,
            attachment_count: 1,
            ..TextFeatures::default()
        };

        let results = compare_revisions(&features);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, Revision::AdditiveV1);
        assert_eq!(results[0].1.label, Label::EvidenceBased);
        assert_eq!(results[1].0, Revision::AnchoredV4);
        assert_eq!(results[1].1.label, Label::Unclear);
    }

    #[test]
    fn test_serde_kebab_case() {
        let toml_like = serde_json::to_string(&Revision::AdditiveV1).unwrap();
        assert_eq!(toml_like, "\"additive-v1\"");
    }
}
