//! Credence Server
//!
//! Webhook and API transport for the credibility classifier.
//!
//! # Endpoints
//!
//! - `POST /webhook/classify-record`: classify a stored record, store the result
//! - `POST /classify`: classify submitted text without storing it
//! - `GET /health`: liveness and active classifier version
//!
//! Both POST endpoints require `Authorization: Bearer <secret>` when a webhook
//! secret is configured.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use credence_classifier::{Classifier, ClassifierError};
use credence_nlp::NlpError;
use credence_store::{SqliteStore, StoreError};
use handlers::{create_router, AppState};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Annotation provider could not be built
    #[error("Annotator error: {0}")]
    Annotator(#[from] NlpError),

    /// Classifier could not be built
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Database could not be opened
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state from configuration
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let annotator = config.annotator.build()?;
    let classifier = Classifier::from_config(annotator, &config.classifier)?;
    let store = SqliteStore::new(&config.database_path)?;

    Ok(AppState {
        classifier: Arc::new(classifier),
        store: Arc::new(Mutex::new(store)),
        webhook_secret: config.webhook_secret.clone(),
    })
}

/// Start the HTTP server
///
/// Initializes tracing (honouring `RUST_LOG`), builds the classifier and
/// store, and serves until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Credence server");
    info!("Bind address: {}", config.bind_addr());
    info!("Database: {}", config.database_path);
    info!("Annotator: {:?}", config.annotator);
    info!(
        "Webhook auth: {}",
        if config.webhook_secret.is_some() { "enabled" } else { "disabled" }
    );

    let state = build_state(&config)?;
    info!("Classifier version: {}", state.classifier.version());

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
