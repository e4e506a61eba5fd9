//! Attachment metadata supplied alongside a submission

use serde::{Deserialize, Serialize};

/// Evidence types treated as strong by the additive revision
const STRONG_EVIDENCE_TYPES: &[&str] = &[
    "application/pdf",
    "pdf",
    "image/jpeg",
    "image/png",
    "jpg",
    "jpeg",
    "png",
    "video/mp4",
    "mp4",
];

/// Metadata for one file attached to a submission
///
/// Only the number of attachments feeds the current scoring revision; the
/// remaining fields are carried for persistence and older revisions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttachmentMetadata {
    /// Attachment identifier
    pub id: String,

    /// Storage path (may carry a file extension)
    #[serde(default)]
    pub path: String,

    /// MIME type, if known
    #[serde(default)]
    pub mime_type: Option<String>,

    /// Human label
    #[serde(default)]
    pub label: Option<String>,

    /// Size in bytes
    #[serde(default)]
    pub size_bytes: Option<u64>,

    /// Creation timestamp (Unix epoch seconds)
    #[serde(default)]
    pub created_at: Option<u64>,
}

impl AttachmentMetadata {
    /// Create attachment metadata with an id and storage path
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Evidence type: the lower-cased MIME type when present, otherwise the
    /// file extension of the storage path
    pub fn evidence_type(&self) -> Option<String> {
        if let Some(mime) = self.mime_type.as_deref().map(str::trim) {
            if !mime.is_empty() {
                return Some(mime.to_lowercase());
            }
        }

        let path = self.path.to_lowercase();
        path.rsplit_once('.').map(|(_, ext)| ext.to_string())
    }

    /// Whether this attachment is a document, image or video type
    pub fn is_strong_evidence(&self) -> bool {
        self.evidence_type()
            .is_some_and(|t| STRONG_EVIDENCE_TYPES.contains(&t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_takes_precedence() {
        let att = AttachmentMetadata::new("a1", "uploads/scan.txt").with_mime_type("Image/PNG");
        assert_eq!(att.evidence_type().as_deref(), Some("image/png"));
        assert!(att.is_strong_evidence());
    }

    #[test]
    fn test_extension_fallback() {
        let att = AttachmentMetadata::new("a1", "uploads/receipt.PDF");
        assert_eq!(att.evidence_type().as_deref(), Some("pdf"));
        assert!(att.is_strong_evidence());

        let att = AttachmentMetadata::new("a2", "uploads/notes.docx");
        assert!(!att.is_strong_evidence());

        let att = AttachmentMetadata::new("a3", "uploads/noext");
        assert_eq!(att.evidence_type(), None);
    }

    #[test]
    fn test_deserialize_sparse_json() {
        let att: AttachmentMetadata = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(att.id, "x");
        assert!(att.path.is_empty());
        assert!(att.mime_type.is_none());
    }
}
