//! HTTP request handlers for the classification service.
//!
//! Implements the record webhook, direct classification and health check
//! endpoints using axum. Classification and SQLite access run on the blocking
//! pool.

use credence_classifier::{Classifier, ClassifierError};
use credence_domain::traits::RecordStore;
use credence_domain::{AttachmentMetadata, ClassificationResult, Label, TextFeatures};
use credence_nlp::DynAnnotator;
use credence_store::{SqliteStore, StoreError};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Classification engine
    pub classifier: Arc<Classifier<DynAnnotator>>,
    /// Record storage
    pub store: Arc<Mutex<SqliteStore>>,
    /// Bearer secret; `None` disables auth
    pub webhook_secret: Option<String>,
}

/// Reference to a stored record inside a webhook payload
#[derive(Debug, Default, Deserialize)]
pub struct RecordRef {
    /// Record identifier
    #[serde(default)]
    pub id: Option<String>,
}

/// Webhook payload: `{"record": {"id": ...}}` or `{"record_id": ...}`
#[derive(Debug, Default, Deserialize)]
pub struct WebhookRequest {
    /// Database-trigger style record
    #[serde(default)]
    pub record: Option<RecordRef>,
    /// Bare record identifier
    #[serde(default)]
    pub record_id: Option<String>,
}

impl WebhookRequest {
    /// Record identifier, preferring `record.id`; blank values count as missing
    pub fn target_id(&self) -> Option<String> {
        self.record
            .as_ref()
            .and_then(|r| r.id.clone())
            .filter(|id| !id.trim().is_empty())
            .or_else(|| self.record_id.clone().filter(|id| !id.trim().is_empty()))
    }
}

/// Webhook response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Whether the result was stored
    pub ok: bool,
    /// Record identifier
    pub record_id: String,
    /// Assigned label
    pub classification: Label,
    /// Confidence score
    pub score: f64,
    /// One-line explanation summary
    pub summary: String,
    /// Version tag of the scoring revision
    pub classifier_version: String,
    /// Extracted features (absent when there was no text)
    pub features: Option<TextFeatures>,
    /// Number of attachments on the record
    pub evidence_count: usize,
    /// Why scoring was skipped, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Storage failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookResponse {
    fn from_result(record_id: &str, result: &ClassificationResult, evidence_count: usize) -> Self {
        Self {
            ok: true,
            record_id: record_id.to_string(),
            classification: result.label,
            score: result.score,
            summary: result.explanation.summary.clone(),
            classifier_version: result.classifier_version.clone(),
            features: result.explanation.features,
            evidence_count,
            reason: result.explanation.reason.clone(),
            error: None,
        }
    }
}

/// Direct classification request
#[derive(Debug, Default, Deserialize)]
pub struct ClassifyRequest {
    /// Narrative text
    #[serde(default)]
    pub text: Option<String>,
    /// Attachment metadata; missing or null means none
    #[serde(default)]
    pub attachments: Option<Vec<AttachmentMetadata>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true while the process serves requests
    pub ok: bool,
    /// Version tag of the active scoring revision
    pub classifier_version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Missing or wrong bearer token
    Unauthorized,
    /// Malformed request
    BadRequest(String),
    /// Unknown record
    NotFound(String),
    /// Classification failed
    Classification(ClassifierError),
    /// Record could not be read
    Store(StoreError),
    /// Result computed but not stored
    Persist(Box<WebhookResponse>),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Record not found: {}", id)),
            AppError::Classification(e @ ClassifierError::Annotation(_)) => {
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::Classification(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Persist(response) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(*response)).into_response();
            }
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ClassifierError> for AppError {
    fn from(e: ClassifierError) -> Self {
        AppError::Classification(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

/// Check the bearer token when a secret is configured
fn authorize(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let Some(secret) = secret else {
        return Ok(());
    };

    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    if presented == Some(format!("Bearer {}", secret).as_str()) {
        Ok(())
    } else {
        warn!("Rejected request with missing or invalid bearer token");
        Err(AppError::Unauthorized)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn lock_store(state: &AppState) -> Result<std::sync::MutexGuard<'_, SqliteStore>, AppError> {
    state
        .store
        .lock()
        .map_err(|_| AppError::InternalError("Store lock poisoned".to_string()))
}

/// Load, classify and store one record
fn process_record(state: &AppState, record_id: &str) -> Result<WebhookResponse, AppError> {
    let (record, attachments) = {
        let store = lock_store(state)?;
        let record = store
            .fetch_record(record_id)?
            .ok_or_else(|| AppError::NotFound(record_id.to_string()))?;
        let attachments = store.fetch_attachments(record_id)?;
        (record, attachments)
    };

    let text = record.description.unwrap_or_default();
    let result = state.classifier.classify(&text, &attachments)?;
    let mut response = WebhookResponse::from_result(record_id, &result, attachments.len());

    let saved = lock_store(state)?.save_classification(record_id, &result, now_secs());
    if let Err(e) = saved {
        warn!("Failed to store classification for record {}: {}", record_id, e);
        response.ok = false;
        response.error = Some(e.to_string());
        return Err(AppError::Persist(Box::new(response)));
    }

    info!(
        "Record {} classified as {} ({:.2})",
        record_id, response.classification, response.score
    );
    Ok(response)
}

async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::InternalError(format!("Worker failed: {}", e)))?
}

/// POST /webhook/classify-record - Classify a stored record and store the result
async fn classify_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, AppError> {
    authorize(&headers, state.webhook_secret.as_deref())?;

    let record_id = request
        .target_id()
        .ok_or_else(|| AppError::BadRequest("Missing record.id".to_string()))?;

    info!("Webhook received for record {}", record_id);

    let response = run_blocking(move || process_record(&state, &record_id)).await?;
    Ok(Json(response))
}

/// POST /classify - Classify text without storing anything
async fn classify_text(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    authorize(&headers, state.webhook_secret.as_deref())?;

    let text = request.text.unwrap_or_default();
    let attachments = request.attachments.unwrap_or_default();

    let result = run_blocking(move || {
        state
            .classifier
            .classify(&text, &attachments)
            .map_err(AppError::from)
    })
    .await?;

    Ok(Json(result))
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        classifier_version: state.classifier.version().to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/webhook/classify-record", post(classify_record))
        .route("/classify", post(classify_text))
        .route("/health", get(health_check))
        .with_state(state)
}
