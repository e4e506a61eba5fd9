//! Credence CLI - Command-line interface for the credibility classifier.

use clap::Parser;
use credence_cli::commands;
use credence_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(
        cli.format.map(Into::into).unwrap_or_default(),
        !cli.no_color,
    );

    if let Err(e) = run(cli) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> credence_cli::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    // Command-line flags win over the config file
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let annotator_url = cli.annotator_url.as_deref();

    match cli.command {
        Command::Classify(args) => {
            commands::execute_classify(args, &config, annotator_url, &formatter)?;
        }
        Command::Compare(args) => {
            commands::execute_compare(args, &config, annotator_url, &formatter)?;
        }
        Command::Lexicon => {
            commands::execute_lexicon(&config, &formatter)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
