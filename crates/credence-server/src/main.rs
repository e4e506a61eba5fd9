//! Credence Server CLI
//!
//! Starts the HTTP server for record classification.

use anyhow::Context;
use credence_server::{config::ServerConfig, start_server};
use std::env;
use std::process;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ServerConfig::from_file(config_path)
            .with_context(|| format!("loading {}", config_path))?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: credence-server --config <path-to-config.toml>");
        eprintln!();
        let mut config = ServerConfig::default_test_config();
        config.apply_secret_override(env::var(credence_server::config::WEBHOOK_SECRET_ENV).ok());
        config
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Credence Server - Credibility classification webhook");
    println!();
    println!("USAGE:");
    println!("    credence-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8000)");
    println!("    - webhook_secret: Bearer secret (optional; WEBHOOK_SECRET overrides)");
    println!("    - database_path: SQLite database file (default: credence.db)");
    println!("    - [annotator]: type = \"rules\" or type = \"http\" with endpoint");
    println!("    - [classifier]: revision, thresholds and lexicon overrides");
    println!();
}
