//! Command implementations.

pub mod classify;
pub mod compare;
pub mod lexicon;

pub use self::classify::execute_classify;
pub use self::compare::execute_compare;
pub use self::lexicon::execute_lexicon;

use crate::config::Config;
use crate::error::{CliError, Result};
use credence_classifier::Classifier;
use credence_domain::AttachmentMetadata;
use credence_nlp::{AnnotatorBackend, DynAnnotator};
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Build the classifier described by the configuration.
///
/// `annotator_url` replaces the configured annotation provider.
pub fn build_classifier(
    config: &Config,
    annotator_url: Option<&str>,
) -> Result<Classifier<DynAnnotator>> {
    let backend = match annotator_url {
        Some(url) => AnnotatorBackend::http(url),
        None => config.annotator.clone(),
    };
    backend.validate().map_err(CliError::Config)?;
    debug!("Annotator: {:?}", backend);

    let annotator = backend.build()?;
    Ok(Classifier::from_config(annotator, &config.classifier)?)
}

/// Resolve narrative text from the positional argument, a file or stdin.
pub fn read_narrative(text: Option<String>, file: Option<&str>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => Err(CliError::InvalidInput(
            "Give the narrative as TEXT or --file, not both".to_string(),
        )),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parse attachment metadata given as a JSON array.
pub fn parse_attachments(json: Option<&str>) -> Result<Vec<AttachmentMetadata>> {
    let Some(json) = json else {
        return Ok(Vec::new());
    };

    serde_json::from_str(json).map_err(|e| {
        CliError::InvalidInput(format!("Attachments must be a JSON array of objects: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_narrative_from_argument() {
        let text = read_narrative(Some("hello".to_string()), None).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_read_narrative_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "I have the receipt").unwrap();

        let text = read_narrative(None, file.path().to_str()).unwrap();
        assert_eq!(text, "I have the receipt");
    }

    #[test]
    fn test_read_narrative_rejects_both_sources() {
        let result = read_narrative(Some("hello".to_string()), Some("story.txt"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_attachments() {
        assert!(parse_attachments(None).unwrap().is_empty());

        let attachments = parse_attachments(Some(
            r#"[{"id": "a1", "path": "receipt.pdf"}, {"id": "a2", "mime_type": "image/png"}]"#,
        ))
        .unwrap();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].path, "receipt.pdf");
        assert_eq!(attachments[1].mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_parse_attachments_invalid() {
        let result = parse_attachments(Some(r#"{"id": "a1"}"#));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_build_classifier_rejects_bad_url() {
        let result = build_classifier(&Config::default(), Some("not-a-url"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_build_classifier_uses_configured_revision() {
        let mut config = Config::default();
        config.classifier = credence_classifier::ClassifierConfig::historical();

        let classifier = build_classifier(&config, None).unwrap();
        assert_eq!(classifier.version(), "additive-v1");
    }
}
