//! Status reporting hooks
//!
//! Status transitions are the only progress signal an upload exposes. The orchestrator
//! pushes every transition into a [`StatusReporter`]; callers decide what to do with it.

use std::sync::Mutex;

use picdrop_core::UploadStatus;

/// Receives every status transition of an upload attempt, in order.
pub trait StatusReporter: Send + Sync {
    fn report(&self, status: &UploadStatus);
}

/// No-op implementation for callers that only want the final result
pub struct NoOpStatusReporter;

impl StatusReporter for NoOpStatusReporter {
    fn report(&self, _status: &UploadStatus) {}
}

/// Keeps every reported status in memory.
#[derive(Debug, Default)]
pub struct RecordingStatusReporter {
    statuses: Mutex<Vec<UploadStatus>>,
}

impl RecordingStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the statuses reported so far
    pub fn statuses(&self) -> Vec<UploadStatus> {
        self.lock().clone()
    }

    /// Drain the recorded statuses
    pub fn take(&self) -> Vec<UploadStatus> {
        std::mem::take(&mut *self.lock())
    }

    pub fn last(&self) -> Option<UploadStatus> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UploadStatus>> {
        self.statuses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StatusReporter for RecordingStatusReporter {
    fn report(&self, status: &UploadStatus) {
        self.lock().push(status.clone());
    }
}

impl<F> StatusReporter for F
where
    F: Fn(&UploadStatus) + Send + Sync,
{
    fn report(&self, status: &UploadStatus) {
        self(status)
    }
}
