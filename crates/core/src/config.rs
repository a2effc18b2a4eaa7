// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration
//!
//! All run-scoped knobs live here instead of process-wide constants: the
//! narration prefix, the per-phase poll cadences (fixed by the remote
//! contract at 1s/2s), the optional run deadline, and the transport retry
//! policy.

use crate::retry::RetryPolicy;
use serde::Deserialize;
use std::time::Duration;

/// Default narration prefix identifying the source system in host logs.
pub const DEFAULT_PREFIX: &str = "mpaas hardening: ";

/// Configuration for one orchestrator instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Prefix prepended to every progress-sink line.
    pub prefix: String,
    /// Delay between upload-status polls.
    #[serde(with = "humantime_serde")]
    pub upload_poll_interval: Duration,
    /// Delay between enhancement-status polls.
    #[serde(with = "humantime_serde")]
    pub enhance_poll_interval: Duration,
    /// Overall run deadline. `None` leaves polling unbounded.
    #[serde(with = "humantime_serde::option")]
    pub timeout: Option<Duration>,
    /// Bounded retry for transport faults on remote calls.
    pub retry: RetryPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            upload_poll_interval: Duration::from_secs(1),
            enhance_poll_interval: Duration::from_secs(2),
            timeout: None,
            retry: RetryPolicy::default(),
        }
    }
}
