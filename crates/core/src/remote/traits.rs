// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client trait and wire report types for the hardening service

use crate::job::{ArtifactRef, EnhanceTicket, JobIdentity, UploadTaskId, UploadTicket};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors from remote-call plumbing, distinct from business outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("authentication failed: {0}")]
    Unauthorized(String),
}

impl ClientError {
    /// Whether a bounded local retry is worth attempting.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

/// Response to an upload submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub upload_task_id: UploadTaskId,
}

/// One upload-status report.
///
/// `success`, `code` and `message` form the service's logical-failure
/// channel, independent of the numeric `status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    pub success: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    pub status: i64,
    #[serde(default)]
    pub enhance_task_id: Option<i64>,
}

impl UploadProgress {
    /// Intake still running.
    ///
    /// `code`/`message` stay empty, matching what a response without those
    /// fields decodes to.
    pub fn pending() -> Self {
        Self {
            success: true,
            code: String::new(),
            message: String::new(),
            status: 0,
            enhance_task_id: None,
        }
    }

    /// Intake finished; the enhancement task id is available.
    pub fn succeeded(enhance_task_id: i64) -> Self {
        Self {
            status: 1,
            enhance_task_id: Some(enhance_task_id),
            ..Self::pending()
        }
    }

    /// Intake reached the terminal failure status.
    pub fn failed() -> Self {
        Self {
            status: -1,
            ..Self::pending()
        }
    }

    /// The service reported logical failure via the explicit flag.
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
            ..Self::pending()
        }
    }
}

/// Response to starting the enhancement job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceStart {
    pub success: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl EnhanceStart {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: String::new(),
            message: String::new(),
        }
    }

    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One enhancement-status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceProgress {
    pub status: i64,
}

/// Response to the download-url lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadInfo {
    pub url: String,
}

/// The five remote operations the orchestration consumes.
///
/// Implementations own transport, endpoints and credentials; the core only
/// sees reports and [`ClientError`]s.
#[async_trait]
pub trait HardeningClient: Clone + Send + Sync + 'static {
    /// Submit the artifact for upload intake.
    async fn submit_upload(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<UploadReceipt, ClientError>;

    /// Query upload intake status.
    async fn upload_progress(
        &self,
        identity: &JobIdentity,
        ticket: &UploadTicket,
    ) -> Result<UploadProgress, ClientError>;

    /// Start the enhancement job for an ingested artifact.
    async fn start_enhance(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
        task_type: &str,
    ) -> Result<EnhanceStart, ClientError>;

    /// Query enhancement status.
    async fn enhance_progress(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<EnhanceProgress, ClientError>;

    /// Resolve the hardened artifact's download location.
    async fn download_url(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<DownloadInfo, ClientError>;
}
