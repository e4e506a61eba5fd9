//! Explanation builder
//!
//! Every result carries a structured record of the features and sub-scores
//! plus a one-line summary. The summary layout is fixed per version tag so
//! stored summaries stay parseable.

use credence_domain::{
    Explanation, Label, ScoreBreakdown, ScoringModel, SummaryFormat, TextFeatures,
};

/// Reason recorded when there was no text to classify
pub const MISSING_TEXT_REASON: &str = "missing description";

fn bit(value: bool) -> u8 {
    u8::from(value)
}

/// One-line summary in the layout of the given format
pub fn summary(
    version: &str,
    format: SummaryFormat,
    features: &TextFeatures,
    breakdown: &ScoreBreakdown,
) -> String {
    match format {
        SummaryFormat::Anchored => format!(
            "{}: label={} score={:.2} (anchors={:.2} evidence={:.2} opinion={:.2}) | ev_hits={} op_hits={} dates={} money={} ents={} ids={} attach={}",
            version,
            breakdown.label,
            breakdown.final_score,
            breakdown.anchors,
            breakdown.evidence_score,
            breakdown.opinion_score,
            features.evidence_hits,
            features.opinion_hits,
            bit(features.has_dates),
            bit(features.has_money),
            bit(features.has_named_entities),
            features.id_hits,
            features.attachment_count,
        ),
        SummaryFormat::Additive => format!(
            "{}: label={} score={:.2} | evidence_hits={} opinion_hits={} evidence_files={} strong_types={} dates={} money={} url={} accusations={} words={}",
            version,
            breakdown.label,
            breakdown.final_score,
            features.evidence_hits,
            features.opinion_hits,
            features.attachment_count,
            features.strong_attachment_types,
            features.has_dates,
            features.has_money,
            features.has_url,
            features.accusation_count,
            features.word_count,
        ),
    }
}

/// Build the explanation of a scored classification
pub fn explain(
    features: &TextFeatures,
    breakdown: &ScoreBreakdown,
    model: &dyn ScoringModel,
) -> Explanation {
    Explanation {
        version: model.version().to_string(),
        features: Some(*features),
        breakdown: Some(*breakdown),
        reason: None,
        summary: summary(model.version(), model.summary_format(), features, breakdown),
    }
}

/// Build the explanation for input with no text
pub fn explain_missing_text(version: &str) -> Explanation {
    Explanation {
        version: version.to_string(),
        features: None,
        breakdown: None,
        reason: Some(MISSING_TEXT_REASON.to_string()),
        summary: format!(
            "{}: label={} score={:.2} | {}",
            version,
            Label::Unclear,
            0.0,
            MISSING_TEXT_REASON
        ),
    }
}
