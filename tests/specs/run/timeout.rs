//! Deadline behavior across the run.

use crate::prelude::*;
use solid_core::{OrchestrationResult, RunConfig};
use std::time::Duration;

fn config_with_timeout(timeout: Duration) -> RunConfig {
    RunConfig {
        timeout: Some(timeout),
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn stalled_intake_times_out_with_the_upload_phase_named() {
    let harness = Harness::with_config(config_with_timeout(Duration::from_secs(5)));
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_reports(vec![UploadProgress::pending(); 5]);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::TimedOut {
            phase: Phase::Upload,
        })
    );
    // polls at t=0..4; the t=5 deadline check fires before a sixth
    let upload_polls = harness
        .client
        .calls()
        .iter()
        .filter(|c| matches!(c, ClientCall::UploadProgress { .. }))
        .count();
    assert_eq!(upload_polls, 5);
    assert_eq!(
        harness.sink.lines().last().map(String::as_str),
        Some("mpaas hardening: timed out waiting for upload")
    );
}

#[tokio::test(start_paused = true)]
async fn deadline_spans_both_phases() {
    // intake consumes 2s of the 5s budget; enhancement gets the rest
    let harness = Harness::with_config(config_with_timeout(Duration::from_secs(5)));
    harness.client.script_submit(11);
    harness.client.script_upload_reports([
        UploadProgress::pending(),
        UploadProgress::pending(),
        UploadProgress::succeeded(77),
    ]);
    harness.client.script_start(EnhanceStart::ok());
    harness.client.script_enhance_statuses([2, 2]);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::TimedOut {
            phase: Phase::Enhance,
        })
    );
    assert!(!harness
        .client
        .calls()
        .iter()
        .any(|c| matches!(c, ClientCall::DownloadUrl { .. })));
}

#[tokio::test(start_paused = true)]
async fn no_timeout_means_polling_runs_to_the_terminal_status() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    let mut reports = vec![UploadProgress::pending(); 30];
    reports.push(UploadProgress::succeeded(77));
    harness.client.script_upload_reports(reports);
    harness.client.script_start(EnhanceStart::ok());
    harness.client.script_enhance_statuses([3]);
    harness.client.script_download(HARDENED_URL);

    let result = harness.run().await.unwrap();

    assert!(matches!(result, OrchestrationResult::Success(_)));
}

#[tokio::test(start_paused = true)]
async fn timeout_before_the_first_poll_still_submits() {
    let harness = Harness::with_config(config_with_timeout(Duration::ZERO));
    harness.client.script_submit(11);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::TimedOut {
            phase: Phase::Upload,
        })
    );
    assert_eq!(
        harness.client.calls(),
        vec![ClientCall::SubmitUpload {
            app_id: "app-1".to_string(),
            file_url: ARTIFACT_URL.to_string(),
        }]
    );
}
