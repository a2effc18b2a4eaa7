// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity and task ticket types
//!
//! A run is addressed by an immutable [`JobIdentity`] triple plus an
//! [`ArtifactRef`] pointing at the input artifact. The two remote jobs hand
//! back numeric task ids which are carried in tickets: the upload ticket is
//! consumed by upload polling, the enhance ticket threads the upload phase
//! into the enhancement phase.

use serde::{Deserialize, Serialize};

/// The application context every remote call is scoped to.
///
/// Supplied once at orchestration start and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobIdentity {
    pub app_id: String,
    pub tenant_id: String,
    pub workspace_id: String,
}

impl JobIdentity {
    pub fn new(
        app_id: impl Into<String>,
        tenant_id: impl Into<String>,
        workspace_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            tenant_id: tenant_id.into(),
            workspace_id: workspace_id.into(),
        }
    }
}

/// Opaque source location of the artifact to harden (a fetchable URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef(pub String);

impl std::fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArtifactRef {
    fn from(s: String) -> Self {
        ArtifactRef(s)
    }
}

impl From<&str> for ArtifactRef {
    fn from(s: &str) -> Self {
        ArtifactRef(s.to_string())
    }
}

/// Identifier of the upload intake task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadTaskId(pub i64);

impl std::fmt::Display for UploadTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the enhancement task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnhanceTaskId(pub i64);

impl std::fmt::Display for EnhanceTaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle on the upload intake job, consumed by upload-status polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub upload_task_id: UploadTaskId,
}

/// Handle on the enhancement job; produced by a successful upload phase,
/// owned by the orchestrator for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhanceTicket {
    pub enhance_task_id: EnhanceTaskId,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
