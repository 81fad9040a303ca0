//! Upload orchestration: validate → issue URL → PUT to storage → persist metadata.
//!
//! Steps run strictly in sequence and the first failure ends the attempt. Nothing is
//! retried, and a metadata failure after a successful PUT is reported, not rolled back.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use picdrop_core::{
    canonical_object_url, normalize_etag, validate_selected_file, ClientConfig, ErrorMetadata,
    ImageMetadata, LogLevel, SelectedFile, UploadError, UploadResult, UploadStatus,
    UploadTargetRequest,
};
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::api::StorageClient;
use crate::reporter::StatusReporter;
use crate::traits::{MetadataWriter, ObjectUploader, UrlIssuer};
use crate::ApiClient;

/// Drives one upload through the three collaborators.
///
/// Only one upload should be in flight per orchestrator at a time; callers are expected
/// to keep the trigger disabled until a terminal status arrives (see [`crate::UploadSession`]).
#[derive(Clone)]
pub struct UploadOrchestrator {
    issuer: Arc<dyn UrlIssuer>,
    uploader: Arc<dyn ObjectUploader>,
    metadata: Arc<dyn MetadataWriter>,
}

impl std::fmt::Debug for UploadOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadOrchestrator").finish_non_exhaustive()
    }
}

impl UploadOrchestrator {
    pub fn new(
        issuer: Arc<dyn UrlIssuer>,
        uploader: Arc<dyn ObjectUploader>,
        metadata: Arc<dyn MetadataWriter>,
    ) -> Self {
        Self {
            issuer,
            uploader,
            metadata,
        }
    }

    /// Wire the HTTP collaborators from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = Arc::new(ApiClient::new(config.clone())?);
        let storage = Arc::new(StorageClient::new(config.request_timeout)?);
        Ok(Self::new(api.clone(), storage, api))
    }

    /// Run one upload attempt.
    ///
    /// Every transition is pushed to `reporter`; on failure the last status reported is
    /// `Failed` carrying the error text (raw collaborator body or HTTP status).
    pub async fn upload(
        &self,
        file: Option<&SelectedFile>,
        reporter: &dyn StatusReporter,
    ) -> Result<UploadResult, UploadError> {
        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "upload",
            %attempt_id,
            file = file.map(|f| f.name.as_str()).unwrap_or_default()
        );

        async move {
            let outcome = self.run(file, reporter).await;
            match &outcome {
                Ok(result) => info!(url = %result.url, key = %result.key, "Upload complete"),
                Err(err) => {
                    log_failure(err);
                    reporter.report(&UploadStatus::failed(err));
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        file: Option<&SelectedFile>,
        reporter: &dyn StatusReporter,
    ) -> Result<UploadResult, UploadError> {
        reporter.report(&UploadStatus::validating());
        let file = validate_selected_file(file)?;
        debug!(media_type = %file.media_type, size = file.size, "File accepted");

        reporter.report(&UploadStatus::issuing_url());
        let request = UploadTargetRequest {
            filename: file.name.clone(),
            content_type: file.media_type.clone(),
        };
        let target = self.issuer.issue_upload_target(&request).await?;
        info!(
            key = %target.key,
            signed_headers = ?target.signed_headers().keys().collect::<Vec<_>>(),
            "Upload target issued"
        );

        reporter.report(&UploadStatus::uploading());
        let output = self.uploader.put_object(&target, file.data.clone()).await?;
        let e_tag = output.e_tag.as_deref().and_then(normalize_etag);
        let url = canonical_object_url(&target.url).to_string();
        info!(url = %url, e_tag = ?e_tag, "Object stored");

        reporter.report(&UploadStatus::persisting());
        let metadata = ImageMetadata {
            key: target.key.clone(),
            url: url.clone(),
            content_type: file.media_type.clone(),
            size: file.size,
            e_tag: e_tag.clone(),
        };
        let saved = self.metadata.save_image(&metadata).await.map_err(|err| {
            warn!(
                key = %target.key,
                url = %url,
                "Object is in storage without a metadata record"
            );
            err
        })?;

        reporter.report(&UploadStatus::done());
        Ok(UploadResult {
            key: target.key,
            url,
            content_type: file.media_type.clone(),
            size: file.size,
            e_tag,
            record_id: saved.id,
            uploaded_at: Utc::now(),
        })
    }
}

fn log_failure(err: &UploadError) {
    let stage = err.stage();
    let code = err.error_code();
    match err.log_level() {
        LogLevel::Debug => debug!(%stage, code, error = %err, "Upload rejected"),
        LogLevel::Warn => warn!(%stage, code, error = %err, "Upload failed"),
        LogLevel::Error => error!(%stage, code, error = %err, "Upload failed"),
    }
}
