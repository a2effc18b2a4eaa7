// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three orchestration phases
//!
//! Upload intake, enhancement, and download resolution, each a free function
//! over the injected client, sink and config. Phases never talk to each
//! other; the orchestrator threads the enhance ticket from upload into
//! enhancement and short-circuits on the first failure.

pub mod enhance;
pub mod resolve;
pub mod upload;

use crate::config::RunConfig;
use crate::outcome::FailureReason;
use crate::progress::ProgressSink;

/// How a polling phase ended: completed with a value, or failed with a
/// reason the run reports as its business outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome<T> {
    Completed(T),
    Failed(FailureReason),
}

/// Emit one prefixed narration line.
pub(crate) fn narrate(sink: &dyn ProgressSink, cfg: &RunConfig, message: impl AsRef<str>) {
    sink.emit(&format!("{}{}", cfg.prefix, message.as_ref()));
}
