//! Lexicon command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use credence_extractor::PhraseLexicon;

/// Execute the lexicon command.
pub fn execute_lexicon(config: &Config, formatter: &Formatter) -> Result<()> {
    let lexicon = PhraseLexicon::from_config(&config.classifier.lexicon)
        .map_err(|e| CliError::Config(e.to_string()))?;

    println!("{}", formatter.format_lexicon(&lexicon)?);

    Ok(())
}
