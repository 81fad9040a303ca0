//! Picdrop Core Library
//!
//! This crate provides the domain models, error types, configuration and validation
//! shared by the picdrop client and CLI. It performs no network I/O.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod object_url;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ErrorMetadata, LogLevel, UploadError};
pub use models::{
    ImageMetadata, SavedImage, SelectedFile, UploadResult, UploadStage, UploadStatus,
    UploadTarget, UploadTargetRequest,
};
pub use object_url::{canonical_object_url, normalize_etag};
pub use validation::validate_selected_file;
