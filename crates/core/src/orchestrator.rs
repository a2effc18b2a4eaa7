// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestration entry point
//!
//! Runs the fixed upload → enhance → resolve sequence. Transitions are
//! strictly forward: the first phase failure becomes the run's
//! [`OrchestrationResult::Failure`] and every later phase is skipped; a
//! hardened artifact is reachable only through all three phases. Each run
//! derives its own deadline and holds no state afterwards, so identical
//! client behavior yields identical results.

use crate::config::RunConfig;
use crate::error::OrchestrationError;
use crate::job::{ArtifactRef, JobIdentity};
use crate::outcome::OrchestrationResult;
use crate::phases::{enhance, resolve, upload, PhaseOutcome};
use crate::progress::ProgressSink;
use crate::remote::HardeningClient;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::Instrument;

/// Drives one two-phase hardening run to a single outcome.
pub struct Orchestrator<C: HardeningClient> {
    client: C,
    sink: Arc<dyn ProgressSink>,
    config: RunConfig,
}

impl<C: HardeningClient> Orchestrator<C> {
    pub fn new(client: C, sink: Arc<dyn ProgressSink>, config: RunConfig) -> Self {
        Self {
            client,
            sink,
            config,
        }
    }

    /// Run the full orchestration for one artifact.
    ///
    /// Business failures (rejections, terminal statuses, timeout) come back
    /// as `Ok(Failure(_))`; infrastructure faults abort with `Err`.
    pub async fn run(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        let span = tracing::info_span!("hardening_run", app_id = %identity.app_id);
        self.run_inner(identity, artifact).instrument(span).await
    }

    async fn run_inner(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        let deadline = self.config.timeout.map(|t| Instant::now() + t);
        let start = Instant::now();

        let ticket = match upload::submit_and_await(
            &self.client,
            identity,
            artifact,
            self.sink.as_ref(),
            &self.config,
            deadline,
        )
        .await?
        {
            PhaseOutcome::Completed(ticket) => ticket,
            PhaseOutcome::Failed(reason) => {
                tracing::warn!(reason = %reason, "upload phase failed");
                return Ok(OrchestrationResult::Failure(reason));
            }
        };

        match enhance::start_and_await(
            &self.client,
            identity,
            &ticket,
            self.sink.as_ref(),
            &self.config,
            deadline,
        )
        .await?
        {
            PhaseOutcome::Completed(()) => {}
            PhaseOutcome::Failed(reason) => {
                tracing::warn!(reason = %reason, "enhancement phase failed");
                return Ok(OrchestrationResult::Failure(reason));
            }
        }

        let artifact = resolve::download(
            &self.client,
            identity,
            &ticket,
            self.sink.as_ref(),
            &self.config,
        )
        .await?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "hardening run complete"
        );
        Ok(OrchestrationResult::Success(artifact))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
