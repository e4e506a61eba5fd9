//! Credence Storage Layer
//!
//! Implements the RecordStore trait using SQLite.
//!
//! # Architecture
//!
//! - `records`: narrative text plus the latest classification
//! - `record_attachments`: metadata of uploaded files, keyed by record
//!
//! # Examples
//!
//! ```no_run
//! use credence_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use credence_domain::traits::{Record, RecordStore};
use credence_domain::{AttachmentMetadata, ClassificationResult, Label};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Classification columns of a stored record
#[derive(Debug, Clone, PartialEq)]
pub struct StoredClassification {
    /// Record identifier
    pub record_id: String,
    /// `evidence`, `opinion` or `pending`
    pub record_type: String,
    /// Stored label, if the record was classified
    pub label: Option<Label>,
    /// Stored score
    pub score: Option<f64>,
    /// Stored one-line summary
    pub credibility: Option<String>,
    /// Version tag of the classifier that produced the result
    pub classifier_version: Option<String>,
    /// Completion timestamp (Unix epoch seconds)
    pub completed_at: Option<u64>,
}

/// SQLite-based implementation of RecordStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store behind a `Mutex` or
/// give each thread its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use credence_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("credence.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    fn record_exists(&self, id: &str) -> Result<bool, StoreError> {
        let exists = self
            .conn
            .query_row("SELECT 1 FROM records WHERE id = ?1", params![id], |_| Ok(true))
            .optional()?
            .unwrap_or(false);
        Ok(exists)
    }

    /// Insert a new pending record and return its generated ID
    pub fn insert_record(&mut self, description: Option<&str>) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();

        self.conn.execute(
            "INSERT INTO records (id, description, record_type, created_at)
             VALUES (?1, ?2, 'pending', ?3)",
            params![&id, description, now_secs() as i64],
        )?;

        debug!("Inserted record {}", id);
        Ok(id)
    }

    /// Attach file metadata to a record and return the attachment ID
    ///
    /// An empty `id` is replaced by a generated one.
    pub fn add_attachment(
        &mut self,
        record_id: &str,
        attachment: &AttachmentMetadata,
    ) -> Result<String, StoreError> {
        if !self.record_exists(record_id)? {
            return Err(StoreError::NotFound(record_id.to_string()));
        }

        let id = if attachment.id.trim().is_empty() {
            Uuid::now_v7().to_string()
        } else {
            attachment.id.clone()
        };

        let size_bytes = attachment
            .size_bytes
            .map(i64::try_from)
            .transpose()
            .map_err(|_| StoreError::InvalidData("attachment size out of range".to_string()))?;

        self.conn.execute(
            "INSERT INTO record_attachments (id, record_id, path, mime_type, label, size_bytes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &id,
                record_id,
                &attachment.path,
                &attachment.mime_type,
                &attachment.label,
                size_bytes,
                attachment.created_at.unwrap_or_else(now_secs) as i64,
            ],
        )?;

        Ok(id)
    }

    /// Get the classification columns of a record
    pub fn get_classification(
        &self,
        record_id: &str,
    ) -> Result<Option<StoredClassification>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, record_type, ai_vendor_1_result, ai_vendor_1_score, credibility,
                        classifier_version, ai_completed_at
                 FROM records WHERE id = ?1",
                params![record_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<f64>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, Option<String>>(5)?,
                        row.get::<_, Option<i64>>(6)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, record_type, result, score, credibility, version, completed_at)) = row
        else {
            return Ok(None);
        };

        let label = match result {
            Some(name) => Some(Label::parse(&name).ok_or_else(|| {
                StoreError::InvalidData(format!("Unknown label: {}", name))
            })?),
            None => None,
        };

        Ok(Some(StoredClassification {
            record_id: id,
            record_type,
            label,
            score,
            credibility,
            classifier_version: version,
            completed_at: completed_at.map(|t| t as u64),
        }))
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn fetch_record(&self, id: &str) -> Result<Option<Record>, Self::Error> {
        let record = self
            .conn
            .query_row(
                "SELECT id, description, record_type FROM records WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Record {
                        id: row.get(0)?,
                        description: row.get(1)?,
                        record_type: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    fn fetch_attachments(&self, record_id: &str) -> Result<Vec<AttachmentMetadata>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, path, mime_type, label, size_bytes, created_at
             FROM record_attachments
             WHERE record_id = ?1
             ORDER BY created_at, id",
        )?;

        let attachments = stmt
            .query_map(params![record_id], |row| {
                Ok(AttachmentMetadata {
                    id: row.get(0)?,
                    path: row.get(1)?,
                    mime_type: row.get(2)?,
                    label: row.get(3)?,
                    size_bytes: row.get::<_, Option<i64>>(4)?.map(|s| s as u64),
                    created_at: row.get::<_, Option<i64>>(5)?.map(|t| t as u64),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(attachments)
    }

    fn save_classification(
        &mut self,
        record_id: &str,
        result: &ClassificationResult,
        completed_at: u64,
    ) -> Result<(), Self::Error> {
        let updated = self.conn.execute(
            "UPDATE records
             SET record_type = ?2,
                 ai_vendor_1_result = ?3,
                 ai_vendor_1_score = ?4,
                 credibility = ?5,
                 classifier_version = ?6,
                 ai_completed_at = ?7
             WHERE id = ?1",
            params![
                record_id,
                result.label.record_type(),
                result.label.as_str(),
                result.score,
                &result.explanation.summary,
                &result.classifier_version,
                completed_at as i64,
            ],
        )?;

        if updated == 0 {
            return Err(StoreError::NotFound(record_id.to_string()));
        }

        debug!(
            "Saved classification {} for record {}",
            result.label, record_id
        );
        Ok(())
    }
}
