//! HTTP annotation provider
//!
//! Delegates tokenization, lemmatization and entity recognition to an external
//! NLP service over JSON.
//!
//! # Protocol
//!
//! `POST <endpoint>/annotate` with `{"text": "..."}`; the service replies with
//! `{"tokens": [{"text", "lemma", "is_alpha", "like_url"}], "entities": [{"text",
//! "label", "start", "end"}]}`.
//!
//! # Examples
//!
//! ```no_run
//! use credence_nlp::HttpAnnotator;
//!
//! let annotator = HttpAnnotator::new("http://localhost:8090").unwrap();
//! ```

use crate::NlpError;
use credence_domain::traits::Annotator;
use credence_domain::Annotations;
use serde::Serialize;
use std::time::Duration;
use tokio::runtime::RuntimeFlavor;
use tracing::debug;

/// Default annotation service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8090";

/// Default timeout for annotation requests (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Annotation provider backed by an external NLP service
///
/// Makes a single attempt per call; failures surface as [`NlpError`].
#[derive(Debug, Clone)]
pub struct HttpAnnotator {
    endpoint: String,
    client: reqwest::Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

impl HttpAnnotator {
    /// Create a new HTTP annotator
    ///
    /// # Parameters
    ///
    /// - `endpoint`: service base URL (e.g., "http://localhost:8090")
    pub fn new(endpoint: impl Into<String>) -> Result<Self, NlpError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| NlpError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Service base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Annotate text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is unreachable or times out
    /// - The service answers with a non-success status
    /// - The response body is not valid annotations
    pub async fn annotate_async(&self, text: &str) -> Result<Annotations, NlpError> {
        let url = format!("{}/annotate", self.endpoint);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&AnnotateRequest { text })
            .send()
            .await
            .map_err(|e| NlpError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NlpError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let annotations = response
            .json::<Annotations>()
            .await
            .map_err(|e| NlpError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            "Annotation service returned {} tokens, {} entities",
            annotations.tokens.len(),
            annotations.entities.len()
        );

        Ok(annotations)
    }
}

/// Blocking wrapper around [`HttpAnnotator::annotate_async`]
///
/// Outside a runtime a current-thread runtime is built for the call. On a
/// multi-thread runtime the worker is handed off with `block_in_place`, and
/// blocking-pool threads reuse the runtime handle directly.
///
/// # Panics
///
/// Panics when called from async code driven by a current-thread runtime,
/// which cannot block. Run the call through `spawn_blocking` there.
impl Annotator for HttpAnnotator {
    type Error = NlpError;

    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::CurrentThread => handle.block_on(self.annotate_async(text)),
                _ => tokio::task::block_in_place(|| handle.block_on(self.annotate_async(text))),
            },
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| NlpError::Config(format!("Failed to start runtime: {}", e)))?
                .block_on(self.annotate_async(text)),
        }
    }
}
