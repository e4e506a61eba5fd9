//! Scoring models
//!
//! A scoring model is a pure function from [`TextFeatures`] to a
//! [`ScoreBreakdown`]. Each formula revision is its own [`ScoringModel`]
//! implementation carrying its own version tag, so stored results remain
//! attributable to the revision that produced them.
//!
//! The current revision, [`AnchoredModel`], works in three steps:
//! 1. Anchors: weighted sum of verifiable content (saturating counts)
//! 2. Pressure: hedging and accusation, each suppressed by strong anchors
//! 3. Decision: ordered, asymmetric thresholds

use crate::{Label, TextFeatures};
use serde::{Deserialize, Serialize};

/// Evidence-phrase hits at which the evidence signal saturates
pub const EVIDENCE_HITS_SATURATION: f64 = 4.0;

/// Opinion-phrase hits at which hedging saturates
pub const OPINION_HITS_SATURATION: f64 = 3.0;

/// Identifier families at which the id signal saturates
pub const ID_HITS_SATURATION: f64 = 2.0;

/// Accusation terms at which accusation pressure saturates
pub const ACCUSATION_SATURATION: f64 = 3.0;

/// Attachments at which the attachment signal saturates
pub const ATTACHMENT_SATURATION: f64 = 2.0;

/// Share of hedging removed by fully anchored text
pub const HEDGING_SUPPRESSION: f64 = 0.75;

/// Share of accusation pressure removed by fully anchored text
pub const ACCUSATION_SUPPRESSION: f64 = 0.60;

/// Unclear results report this score
pub const UNCLEAR_SCORE: f64 = 0.5;

/// Clamp a quantity into [0, 1]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Normalize a count against its saturation point
pub fn saturate(count: usize, saturation: f64) -> f64 {
    (count as f64 / saturation).min(1.0)
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Sub-scores and decision produced by a scoring model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted evidence of verifiable content [0.0, 1.0]
    pub anchors: f64,
    /// Hedging after anchor suppression [0.0, 1.0]
    pub effective_hedging: f64,
    /// Accusation pressure after anchor suppression [0.0, 1.0]
    pub effective_accusation: f64,
    /// Bonus for longer narratives
    pub length_bonus: f64,
    /// Evidence score [0.0, 1.0]
    pub evidence_score: f64,
    /// Opinion score [0.0, 1.0]
    pub opinion_score: f64,
    /// Score reported with the label [0.0, 1.0]
    pub final_score: f64,
    /// Decision
    pub label: Label,
}

/// Layout of the one-line summary a revision writes into explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Anchors / evidence / opinion summary of the anchored revision
    Anchored,
    /// Single-score summary of the additive revision
    Additive,
}

/// A versioned scoring formula
pub trait ScoringModel: std::fmt::Debug + Send + Sync {
    /// Version tag stamped onto every result this model produces
    fn version(&self) -> &str;

    /// Score a feature record
    fn score(&self, features: &TextFeatures) -> ScoreBreakdown;

    /// Summary layout for explanations
    fn summary_format(&self) -> SummaryFormat;
}

/// Anchor weights of the anchored revision
///
/// The weights sum to 1.0, so anchors never need clamping in practice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorWeights {
    /// Evidence-phrase hits
    pub evidence_phrases: f64,
    /// DATE/TIME entities
    pub dates: f64,
    /// MONEY entities
    pub money: f64,
    /// Two or more named entities
    pub entities: f64,
    /// Identifier families
    pub ids: f64,
    /// URLs
    pub url: f64,
    /// Attachments
    pub attachments: f64,
}

impl Default for AnchorWeights {
    fn default() -> Self {
        Self {
            evidence_phrases: 0.24,
            dates: 0.18,
            money: 0.18,
            entities: 0.12,
            ids: 0.10,
            url: 0.06,
            attachments: 0.12,
        }
    }
}

/// Decision thresholds of the anchored revision
///
/// The evidence threshold is deliberately laxer than the opinion threshold
/// plus its anchors gate; both stay overridable for calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Minimum evidence score for Evidence-Based
    pub evidence_min: f64,
    /// Minimum opinion score for Opinion-Based
    pub opinion_min: f64,
    /// Maximum anchors for Opinion-Based
    pub opinion_max_anchors: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            evidence_min: 0.42,
            opinion_min: 0.52,
            opinion_max_anchors: 0.25,
        }
    }
}

/// Current revision: anchor-weighted evidence with suppressed hedging
#[derive(Debug, Clone)]
pub struct AnchoredModel {
    version: String,
    weights: AnchorWeights,
    thresholds: DecisionThresholds,
}

impl AnchoredModel {
    /// Version tag of the anchored revision with default thresholds
    pub const VERSION: &'static str = "anchored-v4";

    /// Create the model with the default weights and thresholds
    pub fn new() -> Self {
        Self {
            version: Self::VERSION.to_string(),
            weights: AnchorWeights::default(),
            thresholds: DecisionThresholds::default(),
        }
    }

    /// Create the model with overridden thresholds
    ///
    /// Non-default thresholds change the version tag to `anchored-v4+custom`.
    pub fn with_thresholds(thresholds: DecisionThresholds) -> Self {
        let version = if thresholds == DecisionThresholds::default() {
            Self::VERSION.to_string()
        } else {
            format!("{}+custom", Self::VERSION)
        };

        Self {
            version,
            weights: AnchorWeights::default(),
            thresholds,
        }
    }

    /// Active decision thresholds
    pub fn thresholds(&self) -> &DecisionThresholds {
        &self.thresholds
    }

    /// Step 1: weighted evidence of verifiable content
    pub fn anchors(&self, features: &TextFeatures) -> f64 {
        let w = &self.weights;
        clamp_unit(
            w.evidence_phrases * saturate(features.evidence_hits, EVIDENCE_HITS_SATURATION)
                + w.dates * flag(features.has_dates)
                + w.money * flag(features.has_money)
                + w.entities * flag(features.has_named_entities)
                + w.ids * saturate(features.id_hits, ID_HITS_SATURATION)
                + w.url * flag(features.has_url)
                + w.attachments * saturate(features.attachment_count, ATTACHMENT_SATURATION),
        )
    }
}

impl Default for AnchoredModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Bonus for longer narratives
pub fn length_bonus(word_count: usize) -> f64 {
    if word_count >= 60 {
        0.08
    } else if word_count >= 30 {
        0.04
    } else {
        0.0
    }
}

/// Step 3: ordered decision policy, first match wins
pub fn decide(
    evidence_score: f64,
    opinion_score: f64,
    anchors: f64,
    thresholds: &DecisionThresholds,
) -> (Label, f64) {
    if evidence_score >= thresholds.evidence_min {
        (Label::EvidenceBased, evidence_score)
    } else if opinion_score >= thresholds.opinion_min && anchors <= thresholds.opinion_max_anchors {
        (Label::OpinionBased, opinion_score)
    } else {
        (Label::Unclear, UNCLEAR_SCORE)
    }
}

impl ScoringModel for AnchoredModel {
    fn version(&self) -> &str {
        &self.version
    }

    fn score(&self, features: &TextFeatures) -> ScoreBreakdown {
        // Step 1: anchors
        let anchors = self.anchors(features);

        // Step 2: pressure, suppressed by anchors
        let hedging = saturate(features.opinion_hits, OPINION_HITS_SATURATION);
        let effective_hedging = clamp_unit(hedging * (1.0 - HEDGING_SUPPRESSION * anchors));

        let accusation = saturate(features.accusation_count, ACCUSATION_SATURATION);
        let effective_accusation =
            clamp_unit(accusation * (1.0 - ACCUSATION_SUPPRESSION * anchors));

        let length_bonus = length_bonus(features.word_count);

        let evidence_score = clamp_unit(0.78 * anchors + length_bonus);
        let opinion_score = clamp_unit(
            0.65 * effective_hedging + 0.35 * effective_accusation + 0.20 * (1.0 - anchors),
        );

        // Step 3: decision
        let (label, final_score) =
            decide(evidence_score, opinion_score, anchors, &self.thresholds);

        ScoreBreakdown {
            anchors,
            effective_hedging,
            effective_accusation,
            length_bonus,
            evidence_score,
            opinion_score,
            final_score: clamp_unit(final_score),
            label,
        }
    }

    fn summary_format(&self) -> SummaryFormat {
        SummaryFormat::Anchored
    }
}

/// Decision thresholds of the additive revision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdditiveThresholds {
    /// Minimum score for Evidence-Based
    pub evidence_min: f64,
    /// Maximum score for Opinion-Based
    pub opinion_max: f64,
}

impl Default for AdditiveThresholds {
    fn default() -> Self {
        Self {
            evidence_min: 0.67,
            opinion_max: 0.33,
        }
    }
}

/// Historical revision: one score adjusted up and down from a neutral 0.5
///
/// Attachments count as evidence outright and accusation is only penalised
/// without them.
#[derive(Debug, Clone, Default)]
pub struct AdditiveModel {
    thresholds: AdditiveThresholds,
}

impl AdditiveModel {
    /// Version tag of the additive revision
    pub const VERSION: &'static str = "additive-v1";

    /// Create the model with its original thresholds
    pub fn new() -> Self {
        Self::default()
    }

    fn boosts(features: &TextFeatures) -> f64 {
        let mut boost = (0.05 * features.evidence_hits as f64).min(0.25);

        if features.has_attachments() {
            boost += 0.25;
        }
        if features.strong_attachment_types {
            boost += 0.10;
        }
        if features.has_dates {
            boost += 0.08;
        }
        if features.has_money {
            boost += 0.06;
        }
        if features.has_url {
            boost += 0.08;
        }
        if features.entity_count >= 2 {
            boost += 0.05;
        }
        if features.has_org_or_gpe {
            boost += 0.04;
        }
        if features.has_person {
            boost += 0.03;
        }

        boost
    }
}

impl ScoringModel for AdditiveModel {
    fn version(&self) -> &str {
        Self::VERSION
    }

    fn score(&self, features: &TextFeatures) -> ScoreBreakdown {
        let boost = Self::boosts(features);

        let hedging = (0.06 * features.opinion_hits as f64).min(0.25);
        let accusation = if features.accusation_count >= 2 && !features.has_attachments() {
            0.18
        } else {
            0.0
        };
        let short_penalty = if features.word_count < 25 { 0.10 } else { 0.0 };

        let score = clamp_unit(0.5 + boost - hedging - accusation - short_penalty);

        let label = if score >= self.thresholds.evidence_min {
            Label::EvidenceBased
        } else if score <= self.thresholds.opinion_max {
            Label::OpinionBased
        } else {
            Label::Unclear
        };

        ScoreBreakdown {
            anchors: clamp_unit(boost),
            effective_hedging: clamp_unit(hedging),
            effective_accusation: clamp_unit(accusation),
            length_bonus: 0.0,
            evidence_score: clamp_unit(boost),
            opinion_score: clamp_unit(hedging + accusation + short_penalty),
            final_score: score,
            label,
        }
    }

    fn summary_format(&self) -> SummaryFormat {
        SummaryFormat::Additive
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn features_strategy() -> impl Strategy<Value = TextFeatures> {
        (
            (0usize..400, 0usize..20, 0usize..20, 0usize..30, 0usize..=2, 0usize..20, 0usize..10),
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        )
            .prop_map(
                |(
                    (word_count, evidence_hits, opinion_hits, entity_count, id_hits, accusation_count, attachment_count),
                    (has_dates, has_money, has_url, has_person, has_org_or_gpe, strong_attachment_types),
                )| TextFeatures {
                    word_count,
                    evidence_hits,
                    opinion_hits,
                    has_dates,
                    has_money,
                    has_url,
                    has_named_entities: entity_count >= 2,
                    entity_count,
                    id_hits,
                    accusation_count,
                    attachment_count,
                    has_person,
                    has_org_or_gpe,
                    strong_attachment_types: strong_attachment_types && attachment_count > 0,
                },
            )
    }

    fn in_unit(value: f64) -> bool {
        (0.0..=1.0).contains(&value)
    }

    proptest! {
        /// Property: every score field of the anchored revision is in [0, 1]
        #[test]
        fn test_anchored_scores_in_range(features in features_strategy()) {
            let b = AnchoredModel::new().score(&features);
            prop_assert!(in_unit(b.anchors));
            prop_assert!(in_unit(b.effective_hedging));
            prop_assert!(in_unit(b.effective_accusation));
            prop_assert!(in_unit(b.evidence_score));
            prop_assert!(in_unit(b.opinion_score));
            prop_assert!(in_unit(b.final_score));
        }

        /// Property: every score field of the additive revision is in [0, 1]
        #[test]
        fn test_additive_scores_in_range(features in features_strategy()) {
            let b = AdditiveModel::new().score(&features);
            prop_assert!(in_unit(b.anchors));
            prop_assert!(in_unit(b.evidence_score));
            prop_assert!(in_unit(b.opinion_score));
            prop_assert!(in_unit(b.final_score));
        }

        /// Property: scoring the same features twice is bit-identical
        #[test]
        fn test_scoring_is_deterministic(features in features_strategy()) {
            let model = AnchoredModel::new();
            prop_assert_eq!(model.score(&features), model.score(&features));
        }

        /// Property: more evidence hits never lower anchors or evidence score
        #[test]
        fn test_evidence_hits_monotone(
            features in features_strategy(),
            extra in 1usize..10,
        ) {
            let model = AnchoredModel::new();
            let base = model.score(&features);

            let mut more = features;
            more.evidence_hits += extra;
            let boosted = model.score(&more);

            prop_assert!(boosted.anchors >= base.anchors);
            prop_assert!(boosted.evidence_score >= base.evidence_score);
        }

        /// Property: Opinion-Based is never assigned above the anchors gate
        #[test]
        fn test_opinion_requires_low_anchors(features in features_strategy()) {
            let b = AnchoredModel::new().score(&features);
            if b.label == Label::OpinionBased {
                prop_assert!(b.anchors <= DecisionThresholds::default().opinion_max_anchors);
                prop_assert!(b.opinion_score >= DecisionThresholds::default().opinion_min);
            }
        }
    }
}
