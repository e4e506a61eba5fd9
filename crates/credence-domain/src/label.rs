//! Label module - the three credibility outcomes

use serde::{Deserialize, Serialize};

/// Credibility label assigned to a narrative submission
///
/// - EvidenceBased: the account carries verifiable, checkable content
/// - OpinionBased: the account is dominated by hedging or unsupported accusation
/// - Unclear: neither signal is strong enough to decide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Verifiable content dominates
    #[serde(rename = "Evidence-Based")]
    EvidenceBased,

    /// Hedged or accusatory language dominates
    #[serde(rename = "Opinion-Based")]
    OpinionBased,

    /// No decision
    #[serde(rename = "Unclear")]
    Unclear,
}

impl Label {
    /// Get the label name as displayed and stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::EvidenceBased => "Evidence-Based",
            Label::OpinionBased => "Opinion-Based",
            Label::Unclear => "Unclear",
        }
    }

    /// Parse a label from its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "evidence-based" => Some(Label::EvidenceBased),
            "opinion-based" => Some(Label::OpinionBased),
            "unclear" => Some(Label::Unclear),
            _ => None,
        }
    }

    /// The `record_type` value the persistence layer stores for this label
    pub fn record_type(&self) -> &'static str {
        match self {
            Label::EvidenceBased => "evidence",
            Label::OpinionBased => "opinion",
            Label::Unclear => "pending",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid label: {}", s))
    }
}
