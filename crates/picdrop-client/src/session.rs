//! Presentation-side state for a single-file picker.
//!
//! Holds the current selection, the latest status line and the final URL. `upload`
//! takes `&mut self`, so one session can never run two uploads at once.

use picdrop_core::{SelectedFile, UploadResult, UploadStatus};

use crate::orchestrator::UploadOrchestrator;
use crate::reporter::RecordingStatusReporter;

#[derive(Debug)]
pub struct UploadSession {
    orchestrator: UploadOrchestrator,
    file: Option<SelectedFile>,
    status: UploadStatus,
    history: Vec<UploadStatus>,
    result: Option<UploadResult>,
}

impl UploadSession {
    pub fn new(orchestrator: UploadOrchestrator) -> Self {
        Self {
            orchestrator,
            file: None,
            status: UploadStatus::idle(),
            history: Vec::new(),
            result: None,
        }
    }

    /// Replace the selection. Clears the status line and any previous result.
    pub fn select(&mut self, file: Option<SelectedFile>) {
        self.file = file;
        self.status = UploadStatus::idle();
        self.history.clear();
        self.result = None;
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Whether the upload trigger should be enabled.
    pub fn can_upload(&self) -> bool {
        self.file.is_some()
    }

    /// Run one upload for the current selection and return the terminal status.
    pub async fn upload(&mut self) -> &UploadStatus {
        let reporter = RecordingStatusReporter::new();
        let outcome = self
            .orchestrator
            .upload(self.file.as_ref(), &reporter)
            .await;

        self.history = reporter.take();
        self.status = self
            .history
            .last()
            .cloned()
            .unwrap_or_else(UploadStatus::idle);
        self.result = outcome.ok();
        &self.status
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// Every status of the last attempt, in order
    pub fn history(&self) -> &[UploadStatus] {
        &self.history
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// Canonical URL of the uploaded image, once the upload completed
    pub fn image_url(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.url.as_str())
    }
}
