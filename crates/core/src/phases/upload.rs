// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upload intake phase
//!
//! Submits the artifact, then polls intake status every
//! `upload_poll_interval` until the service settles it. The explicit
//! not-successful flag on a report short-circuits immediately, ahead of the
//! numeric status; terminal success must carry the enhancement task id.

use super::{narrate, PhaseOutcome};
use crate::config::RunConfig;
use crate::error::OrchestrationError;
use crate::job::{ArtifactRef, EnhanceTicket, JobIdentity, UploadTicket};
use crate::outcome::{FailureReason, Phase, UploadOutcome};
use crate::poller::{poll_until, PollResult, PollStep};
use crate::progress::ProgressSink;
use crate::remote::HardeningClient;
use crate::retry::with_retry;
use tokio::time::Instant;

/// Submit the artifact and await a terminal upload status.
pub async fn submit_and_await<C: HardeningClient>(
    client: &C,
    identity: &JobIdentity,
    artifact: &ArtifactRef,
    sink: &dyn ProgressSink,
    cfg: &RunConfig,
    deadline: Option<Instant>,
) -> Result<PhaseOutcome<EnhanceTicket>, OrchestrationError> {
    narrate(
        sink,
        cfg,
        format!("submitting artifact [{artifact}] for hardening"),
    );

    let receipt = with_retry(&cfg.retry, || client.submit_upload(identity, artifact)).await?;
    let ticket = UploadTicket {
        upload_task_id: receipt.upload_task_id,
    };
    tracing::info!(upload_task_id = %ticket.upload_task_id, "upload submitted");

    let result = poll_until(cfg.upload_poll_interval, deadline, || async {
        let report =
            with_retry(&cfg.retry, || client.upload_progress(identity, &ticket)).await?;
        tracing::debug!(status = report.status, "upload progress");
        match UploadOutcome::classify(&report)? {
            UploadOutcome::Pending => Ok::<_, OrchestrationError>(PollStep::Pending),
            UploadOutcome::Succeeded(enhance) => Ok(PollStep::Settled(Ok(enhance))),
            UploadOutcome::Failed(reason) => Ok(PollStep::Settled(Err(reason))),
        }
    })
    .await?;

    match result {
        PollResult::Settled(Ok(enhance)) => {
            narrate(
                sink,
                cfg,
                format!("upload complete, enhancement task {}", enhance.enhance_task_id),
            );
            Ok(PhaseOutcome::Completed(enhance))
        }
        PollResult::Settled(Err(reason)) => {
            narrate(sink, cfg, reason.to_string());
            Ok(PhaseOutcome::Failed(reason))
        }
        PollResult::TimedOut => {
            let reason = FailureReason::TimedOut {
                phase: Phase::Upload,
            };
            narrate(sink, cfg, reason.to_string());
            Ok(PhaseOutcome::Failed(reason))
        }
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
