use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// Upload state machine stages
///
/// `Idle → ValidatingFile → IssuingUrl → UploadingToStorage → PersistingMetadata → Done`,
/// with any stage able to move to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStage {
    Idle,
    ValidatingFile,
    IssuingUrl,
    UploadingToStorage,
    PersistingMetadata,
    Done,
    Failed,
}

impl UploadStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStage::Done | UploadStage::Failed)
    }
}

impl Display for UploadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStage::Idle => write!(f, "idle"),
            UploadStage::ValidatingFile => write!(f, "validating file"),
            UploadStage::IssuingUrl => write!(f, "issuing upload URL"),
            UploadStage::UploadingToStorage => write!(f, "uploading to storage"),
            UploadStage::PersistingMetadata => write!(f, "persisting metadata"),
            UploadStage::Done => write!(f, "done"),
            UploadStage::Failed => write!(f, "failed"),
        }
    }
}

/// Human-readable status line surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus {
    pub stage: UploadStage,
    pub message: String,
}

impl UploadStatus {
    fn new(stage: UploadStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    pub fn idle() -> Self {
        Self::new(UploadStage::Idle, "")
    }

    pub fn validating() -> Self {
        Self::new(UploadStage::ValidatingFile, "Checking selected file…")
    }

    pub fn issuing_url() -> Self {
        Self::new(UploadStage::IssuingUrl, "Requesting signed upload URL…")
    }

    pub fn uploading() -> Self {
        Self::new(UploadStage::UploadingToStorage, "Uploading directly to storage…")
    }

    pub fn persisting() -> Self {
        Self::new(UploadStage::PersistingMetadata, "Saving metadata…")
    }

    pub fn done() -> Self {
        Self::new(UploadStage::Done, "Upload complete!")
    }

    pub fn failed(err: &UploadError) -> Self {
        Self::new(UploadStage::Failed, err.to_string())
    }

    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}
