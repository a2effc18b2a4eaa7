// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enhancement phase
//!
//! Starts the hardening job for the ingested artifact, then polls its status
//! every `enhance_poll_interval`. A rejected start never begins polling.
//! Every in-flight report narrates exactly one progress line.

use super::{narrate, PhaseOutcome};
use crate::config::RunConfig;
use crate::error::OrchestrationError;
use crate::job::{EnhanceTicket, JobIdentity};
use crate::outcome::{EnhanceOutcome, FailureReason, Phase};
use crate::poller::{poll_until, PollResult, PollStep};
use crate::progress::ProgressSink;
use crate::remote::HardeningClient;
use crate::retry::with_retry;
use tokio::time::Instant;

/// Task-type discriminator fixed by the remote contract.
pub const SHELL_TASK_TYPE: &str = "shell";

/// Start the enhancement job and await a terminal status.
pub async fn start_and_await<C: HardeningClient>(
    client: &C,
    identity: &JobIdentity,
    ticket: &EnhanceTicket,
    sink: &dyn ProgressSink,
    cfg: &RunConfig,
    deadline: Option<Instant>,
) -> Result<PhaseOutcome<()>, OrchestrationError> {
    let start = with_retry(&cfg.retry, || {
        client.start_enhance(identity, ticket, SHELL_TASK_TYPE)
    })
    .await?;

    if !start.success {
        let reason = FailureReason::Rejected {
            code: start.code,
            message: start.message,
        };
        narrate(
            sink,
            cfg,
            format!("enhancement could not be started, {reason}"),
        );
        return Ok(PhaseOutcome::Failed(reason));
    }

    narrate(
        sink,
        cfg,
        format!("enhancement task {} started", ticket.enhance_task_id),
    );

    let result = poll_until(cfg.enhance_poll_interval, deadline, || async {
        let report =
            with_retry(&cfg.retry, || client.enhance_progress(identity, ticket)).await?;
        let outcome = EnhanceOutcome::from_status(report.status)?;
        if outcome.is_in_flight() {
            narrate(sink, cfg, "enhancement in progress");
            tracing::debug!(status = outcome.name(), "enhancement pending");
            return Ok::<_, OrchestrationError>(PollStep::Pending);
        }
        match outcome {
            EnhanceOutcome::Succeeded => Ok(PollStep::Settled(Ok(()))),
            _ => Ok(PollStep::Settled(Err(FailureReason::EnhancementFailed))),
        }
    })
    .await?;

    match result {
        PollResult::Settled(Ok(())) => Ok(PhaseOutcome::Completed(())),
        PollResult::Settled(Err(reason)) => {
            narrate(sink, cfg, reason.to_string());
            Ok(PhaseOutcome::Failed(reason))
        }
        PollResult::TimedOut => {
            let reason = FailureReason::TimedOut {
                phase: Phase::Enhance,
            };
            narrate(sink, cfg, reason.to_string());
            Ok(PhaseOutcome::Failed(reason))
        }
    }
}

#[cfg(test)]
#[path = "enhance_tests.rs"]
mod tests;
