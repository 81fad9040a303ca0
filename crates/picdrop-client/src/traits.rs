//! Collaborator traits for the upload pipeline.
//!
//! The orchestrator never talks HTTP itself; it composes these three calls. Each
//! implementation maps its own failures onto the matching [`UploadError`] variant.

use async_trait::async_trait;
use bytes::Bytes;
use picdrop_core::{ImageMetadata, SavedImage, UploadError, UploadTarget, UploadTargetRequest};

/// Issues presigned upload targets.
#[async_trait]
pub trait UrlIssuer: Send + Sync {
    async fn issue_upload_target(
        &self,
        request: &UploadTargetRequest,
    ) -> Result<UploadTarget, UploadError>;
}

/// What the storage service reported after a successful PUT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutObjectOutput {
    /// Raw `ETag` header value, quotes included
    pub e_tag: Option<String>,
}

/// Performs the direct PUT to a presigned target.
///
/// Implementations must send exactly `target.signed_headers()` and nothing the
/// signature did not cover.
#[async_trait]
pub trait ObjectUploader: Send + Sync {
    async fn put_object(
        &self,
        target: &UploadTarget,
        body: Bytes,
    ) -> Result<PutObjectOutput, UploadError>;
}

/// Records image metadata once the object is in storage.
#[async_trait]
pub trait MetadataWriter: Send + Sync {
    async fn save_image(&self, metadata: &ImageMetadata) -> Result<SavedImage, UploadError>;
}
