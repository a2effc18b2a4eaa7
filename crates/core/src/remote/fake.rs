//! Fake client with scripted responses for testing

use super::traits::*;
use crate::job::{ArtifactRef, EnhanceTicket, JobIdentity, UploadTicket};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded call to a client method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    SubmitUpload {
        app_id: String,
        file_url: String,
    },
    UploadProgress {
        upload_task_id: i64,
    },
    StartEnhance {
        enhance_task_id: i64,
        task_type: String,
    },
    EnhanceProgress {
        enhance_task_id: i64,
    },
    DownloadUrl {
        enhance_task_id: i64,
    },
}

/// Shared state for the fake client
#[derive(Default)]
struct FakeState {
    calls: Vec<ClientCall>,
    submit: VecDeque<Result<UploadReceipt, ClientError>>,
    upload_reports: VecDeque<Result<UploadProgress, ClientError>>,
    start: VecDeque<Result<EnhanceStart, ClientError>>,
    enhance_reports: VecDeque<Result<EnhanceProgress, ClientError>>,
    download: VecDeque<Result<DownloadInfo, ClientError>>,
}

/// Fake hardening client with call recording and scripted response queues.
///
/// Each method pops the next scripted response for its operation; an empty
/// queue answers with a transport error, so a loop that over-polls fails the
/// test instead of hanging.
#[derive(Clone, Default)]
pub struct FakeClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ClientCall> {
        self.lock().calls.clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Script the response to the next upload submission
    pub fn script_submit(&self, upload_task_id: i64) {
        self.lock().submit.push_back(Ok(UploadReceipt {
            upload_task_id: crate::job::UploadTaskId(upload_task_id),
        }));
    }

    pub fn script_submit_err(&self, err: ClientError) {
        self.lock().submit.push_back(Err(err));
    }

    /// Script the upload-status reports, observed in order
    pub fn script_upload_reports(&self, reports: impl IntoIterator<Item = UploadProgress>) {
        let mut state = self.lock();
        for report in reports {
            state.upload_reports.push_back(Ok(report));
        }
    }

    /// Queue a transport-level failure for one upload-status poll
    pub fn script_upload_err(&self, err: ClientError) {
        self.lock().upload_reports.push_back(Err(err));
    }

    /// Script the response to the next enhancement start
    pub fn script_start(&self, response: EnhanceStart) {
        self.lock().start.push_back(Ok(response));
    }

    pub fn script_start_err(&self, err: ClientError) {
        self.lock().start.push_back(Err(err));
    }

    /// Script the enhancement-status codes, observed in order
    pub fn script_enhance_statuses(&self, statuses: impl IntoIterator<Item = i64>) {
        let mut state = self.lock();
        for status in statuses {
            state.enhance_reports.push_back(Ok(EnhanceProgress { status }));
        }
    }

    pub fn script_enhance_err(&self, err: ClientError) {
        self.lock().enhance_reports.push_back(Err(err));
    }

    /// Script the download-url lookup result
    pub fn script_download(&self, url: impl Into<String>) {
        self.lock().download.push_back(Ok(DownloadInfo { url: url.into() }));
    }

    pub fn script_download_err(&self, err: ClientError) {
        self.lock().download.push_back(Err(err));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn take<T>(
    queue: &mut VecDeque<Result<T, ClientError>>,
    operation: &str,
) -> Result<T, ClientError> {
    queue.pop_front().unwrap_or_else(|| {
        Err(ClientError::Transport(format!(
            "no scripted response for {operation}"
        )))
    })
}

#[async_trait]
impl HardeningClient for FakeClient {
    async fn submit_upload(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<UploadReceipt, ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::SubmitUpload {
            app_id: identity.app_id.clone(),
            file_url: artifact.0.clone(),
        });
        take(&mut state.submit, "submit_upload")
    }

    async fn upload_progress(
        &self,
        _identity: &JobIdentity,
        ticket: &UploadTicket,
    ) -> Result<UploadProgress, ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::UploadProgress {
            upload_task_id: ticket.upload_task_id.0,
        });
        take(&mut state.upload_reports, "upload_progress")
    }

    async fn start_enhance(
        &self,
        _identity: &JobIdentity,
        ticket: &EnhanceTicket,
        task_type: &str,
    ) -> Result<EnhanceStart, ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::StartEnhance {
            enhance_task_id: ticket.enhance_task_id.0,
            task_type: task_type.to_string(),
        });
        take(&mut state.start, "start_enhance")
    }

    async fn enhance_progress(
        &self,
        _identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<EnhanceProgress, ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::EnhanceProgress {
            enhance_task_id: ticket.enhance_task_id.0,
        });
        take(&mut state.enhance_reports, "enhance_progress")
    }

    async fn download_url(
        &self,
        _identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<DownloadInfo, ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::DownloadUrl {
            enhance_task_id: ticket.enhance_task_id.0,
        });
        take(&mut state.download, "download_url")
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
