// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure error types for the orchestration core
//!
//! Business outcomes (service rejections, terminal failure statuses,
//! timeouts) are not errors; they travel as
//! [`FailureReason`](crate::outcome::FailureReason) inside a normal
//! [`OrchestrationResult`](crate::outcome::OrchestrationResult). This module
//! covers the faults that abort a run instead: transport problems and
//! responses outside the remote contract.

use crate::outcome::Phase;
use crate::remote::ClientError;
use thiserror::Error;

/// Faults that abort an orchestration run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),
    #[error("unknown {phase} status code: {code}")]
    UnknownStatus { phase: Phase, code: i64 },
}
