// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Download resolution phase
//!
//! One lookup, no polling: the service guarantees the URL exists once
//! enhancement reports terminal success.

use super::narrate;
use crate::config::RunConfig;
use crate::error::OrchestrationError;
use crate::job::{EnhanceTicket, JobIdentity};
use crate::outcome::FinalArtifact;
use crate::progress::ProgressSink;
use crate::remote::HardeningClient;
use crate::retry::with_retry;

/// Resolve the hardened artifact's download location.
pub async fn download<C: HardeningClient>(
    client: &C,
    identity: &JobIdentity,
    ticket: &EnhanceTicket,
    sink: &dyn ProgressSink,
    cfg: &RunConfig,
) -> Result<FinalArtifact, OrchestrationError> {
    let info = with_retry(&cfg.retry, || client.download_url(identity, ticket)).await?;
    narrate(
        sink,
        cfg,
        format!("hardened artifact available at {}", info.url),
    );
    tracing::info!(enhance_task_id = %ticket.enhance_task_id, url = %info.url, "download resolved");
    Ok(FinalArtifact {
        download_url: info.url,
    })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
