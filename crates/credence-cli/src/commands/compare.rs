//! Compare command implementation.

use super::{build_classifier, parse_attachments, read_narrative};
use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the compare command.
pub fn execute_compare(
    args: CompareArgs,
    config: &Config,
    annotator_url: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_narrative(args.text, args.file.as_deref())?;
    let attachments = parse_attachments(args.attachments.as_deref())?;

    let classifier = build_classifier(config, annotator_url)?;
    let results = classifier.compare(&text, &attachments)?;

    println!("{}", formatter.format_comparison(&results)?);

    Ok(())
}
