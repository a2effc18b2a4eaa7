// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline-aware repeated-query primitive
//!
//! Both remote jobs expose the same shape: query a status, keep going while
//! it is non-terminal, stop on the first terminal observation. [`poll_until`]
//! is that loop, parameterized over the query; what counts as terminal is the
//! caller's classification. The deadline is checked before every query and
//! again before every sleep, so a `Some` deadline turns indefinite pending
//! into [`PollResult::TimedOut`] without querying past it, and `None` keeps
//! the loop bounded only by the service reaching a terminal status.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// What one query iteration observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep<T> {
    /// Non-terminal; sleep and query again.
    Pending,
    /// Terminal; stop with this value.
    Settled(T),
}

/// How the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult<T> {
    /// A query observed a terminal status.
    Settled(T),
    /// The deadline elapsed while still pending.
    TimedOut,
}

/// Repeatedly run `query` every `interval` until it settles, errors, or the
/// deadline passes.
///
/// The first terminal observation wins; the query is never invoked again
/// after it settles or errors.
pub async fn poll_until<T, E, F, Fut>(
    interval: Duration,
    deadline: Option<Instant>,
    mut query: F,
) -> Result<PollResult<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollStep<T>, E>>,
{
    loop {
        if past(deadline) {
            return Ok(PollResult::TimedOut);
        }
        match query().await? {
            PollStep::Settled(value) => return Ok(PollResult::Settled(value)),
            PollStep::Pending => {}
        }
        if past(deadline) {
            return Ok(PollResult::TimedOut);
        }
        sleep(interval).await;
    }
}

fn past(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
