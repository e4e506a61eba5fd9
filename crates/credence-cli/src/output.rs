//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use credence_domain::{ClassificationResult, Label, Revision, TextFeatures};
use credence_extractor::{PhraseCategory, PhraseLexicon};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single classification.
    pub fn format_result(&self, result: &ClassificationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(result.label.to_string()),
        }
    }

    /// Format a side-by-side comparison of revisions.
    pub fn format_comparison(&self, results: &[(Revision, ClassificationResult)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(revision, result)| {
                        serde_json::json!({
                            "revision": revision,
                            "result": result,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.format_comparison_table(results)),
            OutputFormat::Quiet => Ok(results
                .iter()
                .map(|(revision, result)| format!("{} {}", revision, result.label))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the phrase lexicon.
    pub fn format_lexicon(&self, lexicon: &PhraseLexicon) -> Result<String> {
        let evidence = joined_phrases(lexicon, PhraseCategory::Evidence);
        let opinion = joined_phrases(lexicon, PhraseCategory::Opinion);
        let accusation = lexicon.accusation_terms();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "evidence_phrases": evidence,
                "opinion_phrases": opinion,
                "accusation_terms": accusation,
            }))?),
            OutputFormat::Quiet => {
                let mut lines = evidence;
                lines.extend(opinion);
                lines.extend(accusation.iter().map(|t| t.to_string()));
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Phrase"]);
                for phrase in &evidence {
                    builder.push_record(["evidence", phrase.as_str()]);
                }
                for phrase in &opinion {
                    builder.push_record(["opinion", phrase.as_str()]);
                }
                for term in &accusation {
                    builder.push_record(["accusation", *term]);
                }
                Ok(styled(builder.build()))
            }
        }
    }

    fn format_result_table(&self, result: &ClassificationResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Label".to_string(), self.label(result.label)]);
        builder.push_record(["Score".to_string(), format!("{:.2}", result.score)]);
        builder.push_record(["Version", result.classifier_version.as_str()]);

        if let Some(reason) = &result.explanation.reason {
            builder.push_record(["Reason", reason.as_str()]);
        }
        if let Some(breakdown) = &result.explanation.breakdown {
            builder.push_record(["Anchors".to_string(), format!("{:.2}", breakdown.anchors)]);
            builder.push_record(["Evidence score".to_string(), format!("{:.2}", breakdown.evidence_score)]);
            builder.push_record(["Opinion score".to_string(), format!("{:.2}", breakdown.opinion_score)]);
        }
        if let Some(features) = &result.explanation.features {
            for (name, value) in feature_rows(features) {
                builder.push_record([name.to_string(), value]);
            }
        }

        let table = styled(builder.build());
        format!("{}\n{}", table, result.explanation.summary)
    }

    fn format_comparison_table(&self, results: &[(Revision, ClassificationResult)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Revision", "Label", "Score", "Version"]);

        for (revision, result) in results {
            builder.push_record([
                revision.to_string(),
                self.label(result.label),
                format!("{:.2}", result.score),
                result.classifier_version.clone(),
            ]);
        }

        styled(builder.build())
    }

    /// Label text, colored by credibility.
    fn label(&self, label: Label) -> String {
        let color = match label {
            Label::EvidenceBased => "green",
            Label::OpinionBased => "red",
            Label::Unclear => "yellow",
        };
        self.colorize(label.as_str(), color)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn joined_phrases(lexicon: &PhraseLexicon, category: PhraseCategory) -> Vec<String> {
    lexicon
        .phrases(category)
        .iter()
        .map(|words| words.join(" "))
        .collect()
}

fn feature_rows(features: &TextFeatures) -> Vec<(&'static str, String)> {
    vec![
        ("Words", features.word_count.to_string()),
        ("Evidence phrases", features.evidence_hits.to_string()),
        ("Opinion phrases", features.opinion_hits.to_string()),
        ("Accusations", features.accusation_count.to_string()),
        ("Dates", features.has_dates.to_string()),
        ("Money", features.has_money.to_string()),
        ("URL", features.has_url.to_string()),
        ("Entities", features.entity_count.to_string()),
        ("Identifiers", features.id_hits.to_string()),
        ("Attachments", features.attachment_count.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use credence_classifier::explain_missing_text;
    use credence_domain::{AnchoredModel, ScoringModel};

    fn scored_result() -> ClassificationResult {
        let features = TextFeatures {
            word_count: 12,
            evidence_hits: 3,
            has_dates: true,
            has_money: true,
            entity_count: 2,
            has_named_entities: true,
            ..TextFeatures::default()
        };
        let model = AnchoredModel::new();
        let breakdown = model.score(&features);
        ClassificationResult {
            label: breakdown.label,
            score: breakdown.final_score,
            explanation: credence_classifier::explain(&features, &breakdown, &model),
            classifier_version: model.version().to_string(),
        }
    }

    fn missing_result() -> ClassificationResult {
        ClassificationResult {
            label: Label::Unclear,
            score: 0.0,
            explanation: explain_missing_text(AnchoredModel::VERSION),
            classifier_version: AnchoredModel::VERSION.to_string(),
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&scored_result()).unwrap();
        let parsed: ClassificationResult = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.label, Label::EvidenceBased);
        assert_eq!(parsed.classifier_version, "anchored-v4");
        assert_eq!(parsed.explanation.summary, scored_result().explanation.summary);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_result(&scored_result()).unwrap();
        assert_eq!(output, "Evidence-Based");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&scored_result()).unwrap();
        assert!(output.contains("Evidence-Based"));
        assert!(output.contains("Anchors"));
        assert!(output.contains("Evidence phrases"));
        assert!(output.ends_with(&scored_result().explanation.summary));
    }

    #[test]
    fn test_table_format_missing_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&missing_result()).unwrap();
        assert!(output.contains("missing description"));
        assert!(!output.contains("Anchors"));
    }

    #[test]
    fn test_comparison_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let results = vec![
            (Revision::AdditiveV1, missing_result()),
            (Revision::AnchoredV4, scored_result()),
        ];
        let output = formatter.format_comparison(&results).unwrap();
        assert_eq!(output, "additive-v1 Unclear\nanchored-v4 Evidence-Based");
    }

    #[test]
    fn test_comparison_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let results = vec![(Revision::AnchoredV4, scored_result())];
        let output = formatter.format_comparison(&results).unwrap();
        assert!(output.contains("Revision"));
        assert!(output.contains("anchored-v4"));
    }

    #[test]
    fn test_lexicon_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_lexicon(&PhraseLexicon::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let evidence = parsed["evidence_phrases"].as_array().unwrap();
        assert!(evidence.iter().any(|p| p == "receipt"));
        let accusation = parsed["accusation_terms"].as_array().unwrap();
        assert!(accusation.iter().any(|p| p == "liar"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("test"), "✗ test");
        assert_eq!(formatter.label(Label::Unclear), "Unclear");
    }
}
