//! HTTP implementations of the upload collaborators.
//!
//! [`ApiClient`] talks to the backend (URL issuer and metadata writer) and may carry an
//! API key. [`StorageClient`] talks to object storage and sends nothing but the signed
//! headers and the payload.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use picdrop_core::{
    ImageMetadata, SavedImage, UploadError, UploadStage, UploadTarget, UploadTargetRequest,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ETAG};
use reqwest::Client;

use crate::traits::{MetadataWriter, ObjectUploader, PutObjectOutput, UrlIssuer};
use crate::{build_http_client, error_body, ApiClient};

#[async_trait]
impl UrlIssuer for ApiClient {
    async fn issue_upload_target(
        &self,
        request: &UploadTargetRequest,
    ) -> Result<UploadTarget, UploadError> {
        let url = self.config().upload_url_endpoint();
        let response = self.post_json(&url, request, UploadStage::IssuingUrl).await?;

        if !response.status().is_success() {
            return Err(UploadError::Issuance(error_body(response).await));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::transport(UploadStage::IssuingUrl, e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| UploadError::InvalidIssuerResponse(e.to_string()))
    }
}

#[async_trait]
impl MetadataWriter for ApiClient {
    async fn save_image(&self, metadata: &ImageMetadata) -> Result<SavedImage, UploadError> {
        let url = self.config().images_endpoint();
        let response = self
            .post_json(&url, metadata, UploadStage::PersistingMetadata)
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::MetadataPersist(error_body(response).await));
        }

        // Any 2xx counts; the body is informational.
        let body = response.bytes().await.unwrap_or_default();
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }
}

/// Direct-to-storage uploader for presigned targets.
#[derive(Clone, Debug)]
pub struct StorageClient {
    client: Client,
}

impl StorageClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectUploader for StorageClient {
    async fn put_object(
        &self,
        target: &UploadTarget,
        body: Bytes,
    ) -> Result<PutObjectOutput, UploadError> {
        let headers = signed_header_map(&target.signed_headers())?;

        let response = self
            .client
            .put(&target.url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                UploadError::transport(UploadStage::UploadingToStorage, e.without_url().to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::StorageUpload {
                status: status.as_u16(),
            });
        }

        Ok(PutObjectOutput {
            e_tag: etag_header(response.headers()),
        })
    }
}

/// Convert the issued header mapping into a `HeaderMap`, one value per name.
pub fn signed_header_map(signed: &BTreeMap<String, String>) -> Result<HeaderMap, UploadError> {
    let mut headers = HeaderMap::with_capacity(signed.len());
    for (name, value) in signed {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| UploadError::InvalidSignedHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_bytes(value.as_bytes()).map_err(|e| UploadError::InvalidSignedHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        if headers.insert(header_name, header_value).is_some() {
            return Err(UploadError::InvalidSignedHeader {
                name: name.clone(),
                reason: "duplicate header name (names are case-insensitive)".to_string(),
            });
        }
    }
    Ok(headers)
}

/// `HeaderMap` names are case-insensitive, so `ETag`, `Etag` and `etag` all match.
///
/// Non-ASCII bytes are decoded lossily rather than dropping the tag.
pub fn etag_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ETAG)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
