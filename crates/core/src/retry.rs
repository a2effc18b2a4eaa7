// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded retry for transport faults
//!
//! Remote calls can fail for reasons that have nothing to do with the job
//! (connection resets, gateway hiccups). Those are retried a bounded number
//! of times with exponential backoff before the fault aborts the run.
//! Logical rejections and malformed responses are never retried.

use crate::remote::ClientError;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Retry budget for a single remote call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryPolicy {
    /// Total attempts, the first call included.
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles per retry after that.
    #[serde(with = "humantime_serde")]
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Backoff to wait after the given zero-based failed attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Run `op`, retrying retryable client errors within the policy's budget.
///
/// Returns the first success, the first non-retryable error, or the last
/// error once attempts are exhausted.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, op: F) -> Result<T, ClientError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt + 1 < policy.max_attempts => {
                tracing::warn!(attempt, error = %err, "remote call failed, retrying");
                sleep(policy.backoff(attempt)).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
