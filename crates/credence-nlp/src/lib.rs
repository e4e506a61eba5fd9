//! Credence NLP Provider Layer
//!
//! Pluggable implementations of the `Annotator` trait from `credence-domain`.
//!
//! # Providers
//!
//! - `RuleAnnotator`: offline regex tokenizer and entity tagger
//! - `HttpAnnotator`: external NLP service over HTTP
//! - `MockAnnotator`: deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use credence_nlp::RuleAnnotator;
//! use credence_domain::traits::Annotator;
//!
//! let annotations = RuleAnnotator::new().annotate("I paid $40 on Friday").unwrap();
//! assert_eq!(annotations.entities.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod http;
pub mod rules;

use credence_domain::traits::Annotator;
use credence_domain::{Annotations, EntityKind, EntitySpan};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use http::HttpAnnotator;
pub use rules::RuleAnnotator;

/// Errors that can occur during annotation
#[derive(Error, Debug)]
pub enum NlpError {
    /// Network or service communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the annotation service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider could not be set up
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configured mock failure
    #[error("Mock error: {0}")]
    Mock(String),
}

/// A boxed provider, as built from configuration
pub type DynAnnotator = Box<dyn Annotator<Error = NlpError> + Send + Sync>;

fn default_timeout_secs() -> u64 {
    http::DEFAULT_TIMEOUT_SECS
}

/// Which annotation provider to use
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnnotatorBackend {
    /// Offline rule-based provider
    #[default]
    Rules,

    /// External NLP service
    Http {
        /// Service base URL
        endpoint: String,

        /// Request timeout (seconds)
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl AnnotatorBackend {
    /// HTTP backend with the default timeout
    pub fn http(endpoint: impl Into<String>) -> Self {
        AnnotatorBackend::Http {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self {
            AnnotatorBackend::Rules => Ok(()),
            AnnotatorBackend::Http {
                endpoint,
                timeout_secs,
            } => {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    return Err(format!("annotator endpoint '{}' must be an http(s) URL", endpoint));
                }
                if *timeout_secs == 0 {
                    return Err("annotator timeout_secs must be greater than 0".to_string());
                }
                Ok(())
            }
        }
    }

    /// Build the provider
    pub fn build(&self) -> Result<DynAnnotator, NlpError> {
        self.validate().map_err(NlpError::Config)?;

        match self {
            AnnotatorBackend::Rules => Ok(Box::new(RuleAnnotator::new())),
            AnnotatorBackend::Http {
                endpoint,
                timeout_secs,
            } => Ok(Box::new(
                HttpAnnotator::new(endpoint.clone())?
                    .with_timeout(Duration::from_secs(*timeout_secs)),
            )),
        }
    }
}

/// Mock annotation provider for deterministic testing
///
/// Splits text on whitespace and attaches the configured entities, or returns
/// fixed annotations. Clones share one call counter.
///
/// # Examples
///
/// ```
/// use credence_nlp::MockAnnotator;
/// use credence_domain::EntityKind;
/// use credence_domain::traits::Annotator;
///
/// let annotator = MockAnnotator::new().with_entity("$40", EntityKind::Money);
/// let annotations = annotator.annotate("refund of $40").unwrap();
///
/// assert_eq!(annotations.tokens.len(), 3);
/// assert_eq!(annotations.entities.len(), 1);
/// assert_eq!(annotator.call_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnnotator {
    fixed: Option<Annotations>,
    entities: Vec<EntitySpan>,
    failure: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnnotator {
    /// Create a new MockAnnotator that tokenizes on whitespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockAnnotator that returns fixed annotations for all text
    pub fn with_annotations(annotations: Annotations) -> Self {
        Self {
            fixed: Some(annotations),
            ..Self::default()
        }
    }

    /// Create a MockAnnotator that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Add an entity to every annotation
    pub fn with_entity(mut self, text: impl Into<String>, kind: EntityKind) -> Self {
        self.entities.push(EntitySpan::new(text, kind));
        self
    }

    /// Get the number of times annotate was called
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|count| *count).unwrap_or_default()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        if let Ok(mut count) = self.call_count.lock() {
            *count = 0;
        }
    }
}

impl Annotator for MockAnnotator {
    type Error = NlpError;

    fn annotate(&self, text: &str) -> Result<Annotations, Self::Error> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }

        if let Some(message) = &self.failure {
            return Err(NlpError::Mock(message.clone()));
        }

        let mut annotations = match &self.fixed {
            Some(fixed) => fixed.clone(),
            None => Annotations::from_words(text),
        };
        annotations.entities.extend(self.entities.iter().cloned());

        Ok(annotations)
    }
}
