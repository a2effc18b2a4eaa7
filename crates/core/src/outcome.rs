// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary classification of remote status codes
//!
//! The remote contract speaks in magic numbers: upload status is one of
//! {-1, 0, 1}, enhancement status one of {0, 1, 2, 3, 4}, and either query
//! can carry an explicit not-successful flag that overrides the number. Each
//! raw report is classified exactly once, here, into a closed enum; all
//! downstream logic matches on variants. A code outside the contract set is
//! an infrastructure fault, never a silent re-poll.

use crate::error::OrchestrationError;
use crate::job::{EnhanceTaskId, EnhanceTicket};
use crate::remote::UploadProgress;

/// Upload status codes fixed by the remote contract.
const UPLOAD_FAILED: i64 = -1;
const UPLOAD_PENDING: i64 = 0;
const UPLOAD_DONE: i64 = 1;

/// The phase a run is currently in; used in narration, tracing, and
/// timeout reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Upload,
    Enhance,
    Resolve,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Upload => "upload",
            Phase::Enhance => "enhancement",
            Phase::Resolve => "download",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a run ended without a hardened artifact.
///
/// `Rejected` carries the service's code and message verbatim; the fixed
/// messages for `UploadFailed` and `EnhancementFailed` stand in where the
/// service provides none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The service reported logical failure (explicit success flag false).
    Rejected { code: String, message: String },
    /// Upload status reached the terminal failure code.
    UploadFailed,
    /// Enhancement status reached the terminal failure code.
    EnhancementFailed,
    /// The run deadline elapsed while the given phase was still pending.
    TimedOut { phase: Phase },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Rejected { code, message } => {
                write!(f, "code:{} message:{}", code, message)
            }
            FailureReason::UploadFailed => f.write_str("upload could not be completed"),
            FailureReason::EnhancementFailed => f.write_str("enhancement failed"),
            FailureReason::TimedOut { phase } => write!(f, "timed out waiting for {}", phase),
        }
    }
}

/// The hardened artifact produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalArtifact {
    pub download_url: String,
}

/// The single value an orchestration run resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationResult {
    Success(FinalArtifact),
    Failure(FailureReason),
}

/// Classification of one upload-progress report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Intake still running; keep polling.
    Pending,
    /// Intake finished and handed over the enhancement task id.
    Succeeded(EnhanceTicket),
    /// Intake terminally failed.
    Failed(FailureReason),
}

impl UploadOutcome {
    /// Classify a raw upload-progress report.
    ///
    /// The explicit not-successful flag takes precedence over the numeric
    /// status for that report. On terminal success the enhance task id must
    /// be present; its absence is a malformed response.
    pub fn classify(report: &UploadProgress) -> Result<Self, OrchestrationError> {
        if !report.success {
            return Ok(UploadOutcome::Failed(FailureReason::Rejected {
                code: report.code.clone(),
                message: report.message.clone(),
            }));
        }
        match report.status {
            UPLOAD_PENDING => Ok(UploadOutcome::Pending),
            UPLOAD_DONE => match report.enhance_task_id {
                Some(id) => Ok(UploadOutcome::Succeeded(EnhanceTicket {
                    enhance_task_id: EnhanceTaskId(id),
                })),
                None => Err(crate::remote::ClientError::MalformedResponse(
                    "upload reported done without an enhance task id".to_string(),
                )
                .into()),
            },
            UPLOAD_FAILED => Ok(UploadOutcome::Failed(FailureReason::UploadFailed)),
            code => Err(OrchestrationError::UnknownStatus {
                phase: Phase::Upload,
                code,
            }),
        }
    }
}

/// Classification of one enhancement-progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceOutcome {
    NotStarted,
    Submitted,
    InProgress,
    Succeeded,
    Failed,
}

impl EnhanceOutcome {
    /// Map a raw enhancement status code onto the closed variant set.
    pub fn from_status(code: i64) -> Result<Self, OrchestrationError> {
        match code {
            0 => Ok(EnhanceOutcome::NotStarted),
            1 => Ok(EnhanceOutcome::Submitted),
            2 => Ok(EnhanceOutcome::InProgress),
            3 => Ok(EnhanceOutcome::Succeeded),
            4 => Ok(EnhanceOutcome::Failed),
            code => Err(OrchestrationError::UnknownStatus {
                phase: Phase::Enhance,
                code,
            }),
        }
    }

    /// Whether this status means the job is still running.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            EnhanceOutcome::NotStarted | EnhanceOutcome::Submitted | EnhanceOutcome::InProgress
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnhanceOutcome::NotStarted => "not started",
            EnhanceOutcome::Submitted => "submitted",
            EnhanceOutcome::InProgress => "in progress",
            EnhanceOutcome::Succeeded => "succeeded",
            EnhanceOutcome::Failed => "failed",
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
