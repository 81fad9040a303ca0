use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to the issuer for a presigned upload target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTargetRequest {
    /// Original filename
    pub filename: String,
    /// Content type (MIME type), may be part of the signature
    pub content_type: String,
}

/// Presigned upload target returned by the issuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTarget {
    /// Presigned URL for the direct PUT
    pub url: String,
    /// Storage key chosen by the issuer
    pub key: String,
    /// Headers the signature was computed over; must be replayed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl UploadTarget {
    /// Headers to send on the PUT. An absent mapping replays as an empty one.
    pub fn signed_headers(&self) -> BTreeMap<String, String> {
        self.headers.clone().unwrap_or_default()
    }
}

/// Request to the metadata writer after a successful PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub key: String,
    /// Canonical object URL (no query component)
    pub url: String,
    pub content_type: String,
    pub size: u64,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

/// Success body of the metadata writer. Backends may return nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    #[serde(default)]
    pub id: Option<u64>,
}

/// Final artifact of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Storage key
    pub key: String,
    /// Canonical object URL
    pub url: String,
    pub content_type: String,
    pub size: u64,
    /// Normalized content-identity tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    /// Record id assigned by the metadata writer, when it reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
    pub uploaded_at: DateTime<Utc>,
}
