//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use credence_domain::Revision;

/// Credence CLI - Classify dispute narratives by credibility.
#[derive(Debug, Parser)]
#[command(name = "credence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Annotate through an external NLP service instead of the built-in rules
    #[arg(long, global = true, env = "CREDENCE_ANNOTATOR_URL")]
    pub annotator_url: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a narrative
    Classify(ClassifyArgs),

    /// Classify a narrative with every scoring revision side by side
    Compare(CompareArgs),

    /// Print the active phrase lexicon
    Lexicon,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Narrative text (read from stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the narrative from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Attachment metadata as a JSON array
    #[arg(long)]
    pub attachments: Option<String>,

    /// Scoring revision to use
    #[arg(short, long, value_enum)]
    pub revision: Option<RevisionArg>,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Narrative text (read from stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the narrative from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Attachment metadata as a JSON array
    #[arg(long)]
    pub attachments: Option<String>,
}

/// Revision argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RevisionArg {
    /// Historical single-score revision
    #[value(name = "additive-v1")]
    AdditiveV1,
    /// Current anchored revision
    #[value(name = "anchored-v4")]
    AnchoredV4,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RevisionArg> for Revision {
    fn from(revision: RevisionArg) -> Self {
        match revision {
            RevisionArg::AdditiveV1 => Revision::AdditiveV1,
            RevisionArg::AnchoredV4 => Revision::AnchoredV4,
        }
    }
}
