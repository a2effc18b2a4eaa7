// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! solid-core: orchestration core for the mPaaS app-hardening pipeline
//!
//! This crate provides:
//! - The two-phase upload-then-enhance orchestration state machine
//! - Boundary classification of remote status codes into closed enums
//! - A deadline-aware polling primitive and bounded transport retry
//! - The `HardeningClient` adapter trait plus a scripted fake for tests
//!
//! The host supplies credentials, a progress sink, and a `HardeningClient`
//! implementation (see `solid-adapters` for the real one); everything else is
//! owned here. One call to [`Orchestrator::run`] drives a full run to a
//! single [`OrchestrationResult`].

pub mod config;
pub mod error;
pub mod job;
pub mod orchestrator;
pub mod outcome;
pub mod phases;
pub mod poller;
pub mod progress;
pub mod remote;
pub mod retry;

// Re-exports
pub use config::RunConfig;
pub use error::OrchestrationError;
pub use job::{ArtifactRef, EnhanceTaskId, EnhanceTicket, JobIdentity, UploadTaskId, UploadTicket};
pub use orchestrator::Orchestrator;
pub use outcome::{
    EnhanceOutcome, FailureReason, FinalArtifact, OrchestrationResult, Phase, UploadOutcome,
};
pub use poller::{poll_until, PollResult, PollStep};
pub use progress::{MemorySink, NullSink, ProgressSink, TracingSink};
pub use remote::{
    ClientCall, ClientError, DownloadInfo, EnhanceProgress, EnhanceStart, FakeClient,
    HardeningClient, UploadProgress, UploadReceipt,
};
pub use retry::RetryPolicy;
