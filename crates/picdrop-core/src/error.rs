//! Error types module
//!
//! Every failure of an upload attempt is represented by [`UploadError`]. Each variant
//! belongs to exactly one pipeline stage, and the `Display` text is what ends up in the
//! terminal status line, so raw collaborator bodies and status codes are kept verbatim.

use crate::models::UploadStage;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for caller-correctable errors like validation failures
    Debug,
    /// Warning level - for collaborator rejections
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be reported.
pub trait ErrorMetadata {
    /// Pipeline stage the error terminated.
    fn stage(&self) -> UploadStage;

    /// Machine-readable error code (e.g., "ISSUANCE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;

    /// Whether the object may already be in storage without a metadata record.
    fn leaves_orphaned_object(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{0}")]
    Validation(String),

    #[error("URL issuance error: {0}")]
    Issuance(String),

    #[error("Invalid upload target response: {0}")]
    InvalidIssuerResponse(String),

    #[error("Invalid signed header {name}: {reason}")]
    InvalidSignedHeader { name: String, reason: String },

    #[error("Upload failed: HTTP {status}")]
    StorageUpload { status: u16 },

    #[error("Metadata save error: {0}")]
    MetadataPersist(String),

    #[error("Request failed while {stage}: {message}")]
    Transport { stage: UploadStage, message: String },
}

impl UploadError {
    pub fn no_file_selected() -> Self {
        UploadError::Validation("no file selected".to_string())
    }

    pub fn not_an_image() -> Self {
        UploadError::Validation("not an image".to_string())
    }

    pub fn transport(stage: UploadStage, message: impl Into<String>) -> Self {
        UploadError::Transport {
            stage,
            message: message.into(),
        }
    }
}

impl ErrorMetadata for UploadError {
    fn stage(&self) -> UploadStage {
        match self {
            UploadError::Validation(_) => UploadStage::ValidatingFile,
            UploadError::Issuance(_) | UploadError::InvalidIssuerResponse(_) => {
                UploadStage::IssuingUrl
            }
            UploadError::InvalidSignedHeader { .. } | UploadError::StorageUpload { .. } => {
                UploadStage::UploadingToStorage
            }
            UploadError::MetadataPersist(_) => UploadStage::PersistingMetadata,
            UploadError::Transport { stage, .. } => *stage,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            UploadError::Validation(_) => "VALIDATION_ERROR",
            UploadError::Issuance(_) => "ISSUANCE_ERROR",
            UploadError::InvalidIssuerResponse(_) => "INVALID_ISSUER_RESPONSE",
            UploadError::InvalidSignedHeader { .. } => "INVALID_SIGNED_HEADER",
            UploadError::StorageUpload { .. } => "STORAGE_UPLOAD_ERROR",
            UploadError::MetadataPersist(_) => "METADATA_PERSIST_ERROR",
            UploadError::Transport { .. } => "TRANSPORT_ERROR",
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            UploadError::Validation(_) => LogLevel::Debug,
            UploadError::Issuance(_) | UploadError::StorageUpload { .. } => LogLevel::Warn,
            UploadError::InvalidIssuerResponse(_)
            | UploadError::InvalidSignedHeader { .. }
            | UploadError::MetadataPersist(_)
            | UploadError::Transport { .. } => LogLevel::Error,
        }
    }

    fn leaves_orphaned_object(&self) -> bool {
        self.stage() == UploadStage::PersistingMetadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(UploadError::no_file_selected().to_string(), "no file selected");
        assert_eq!(UploadError::not_an_image().to_string(), "not an image");
        assert_eq!(
            UploadError::not_an_image().stage(),
            UploadStage::ValidatingFile
        );
        assert_eq!(UploadError::not_an_image().log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_raw_bodies_survive_display() {
        let err = UploadError::Issuance("bucket policy denied".to_string());
        assert!(err.to_string().contains("bucket policy denied"));
        assert_eq!(err.error_code(), "ISSUANCE_ERROR");

        let err = UploadError::MetadataPersist("db down".to_string());
        assert!(err.to_string().contains("db down"));
        assert!(err.leaves_orphaned_object());
    }

    #[test]
    fn test_storage_status_code_in_message() {
        let err = UploadError::StorageUpload { status: 403 };
        assert_eq!(err.to_string(), "Upload failed: HTTP 403");
        assert_eq!(err.stage(), UploadStage::UploadingToStorage);
        assert!(!err.leaves_orphaned_object());
    }

    #[test]
    fn test_transport_keeps_its_stage() {
        let err = UploadError::transport(UploadStage::PersistingMetadata, "connection reset");
        assert_eq!(err.stage(), UploadStage::PersistingMetadata);
        assert!(err.leaves_orphaned_object());
        assert_eq!(
            err.to_string(),
            "Request failed while persisting metadata: connection reset"
        );
    }
}
