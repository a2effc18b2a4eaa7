// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress narration sinks
//!
//! The host injects a sink for user-facing progress lines (typically its
//! build or job log). The sink is separate from diagnostic `tracing`: it
//! carries the fixed-prefix narration the run contract promises, nothing
//! else.

use std::sync::{Arc, Mutex};

/// Receives one line of user-facing progress narration.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _line: &str) {}
}

/// Sink that records lines in memory, for tests.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Count of lines containing the given fragment.
    pub fn count_containing(&self, fragment: &str) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|line| line.contains(fragment))
            .count()
    }
}

impl ProgressSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}

/// Sink that routes narration into the `tracing` stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "progress", "{line}");
    }
}
