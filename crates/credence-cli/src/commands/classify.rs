//! Classify command implementation.

use super::{build_classifier, parse_attachments, read_narrative};
use crate::cli::{ClassifyArgs, RevisionArg};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use credence_classifier::ThresholdOverrides;
use credence_domain::Revision;
use tracing::warn;

/// Execute the classify command.
pub fn execute_classify(
    args: ClassifyArgs,
    config: &Config,
    annotator_url: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    let config = with_revision(config, args.revision);

    let text = read_narrative(args.text, args.file.as_deref())?;
    let attachments = parse_attachments(args.attachments.as_deref())?;

    let classifier = build_classifier(&config, annotator_url)?;
    let result = classifier.classify(&text, &attachments)?;

    println!("{}", formatter.format_result(&result)?);

    Ok(())
}

/// Apply a `--revision` flag to the loaded configuration.
///
/// Threshold overrides only apply to the anchored revision and are dropped
/// when the flag selects another one.
fn with_revision(config: &Config, revision: Option<RevisionArg>) -> Config {
    let mut config = config.clone();
    let Some(revision) = revision else {
        return config;
    };

    config.classifier.revision = revision.into();
    if config.classifier.revision != Revision::AnchoredV4 && !config.classifier.thresholds.is_empty()
    {
        warn!(
            "Ignoring threshold overrides, {} has no configurable thresholds",
            config.classifier.revision
        );
        config.classifier.thresholds = ThresholdOverrides::default();
    }
    config
}
