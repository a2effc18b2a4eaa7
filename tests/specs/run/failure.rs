//! Failure paths: terminal statuses, rejection flags, infrastructure faults.

use crate::prelude::*;
use solid_core::{OrchestrationError, OrchestrationResult};

#[tokio::test(start_paused = true)]
async fn terminal_upload_status_fails_the_run() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_reports([UploadProgress::pending(), UploadProgress::failed()]);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::UploadFailed)
    );
    assert_eq!(
        harness.sink.lines().last().map(String::as_str),
        Some("mpaas hardening: upload could not be completed")
    );
    // enhancement is never started
    assert!(!harness
        .client
        .calls()
        .iter()
        .any(|c| matches!(c, ClientCall::StartEnhance { .. })));
}

#[tokio::test(start_paused = true)]
async fn rejection_flag_wins_over_a_done_status() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness.client.script_upload_reports([UploadProgress {
        status: 1,
        enhance_task_id: Some(77),
        ..UploadProgress::rejected("INVALID_PACKAGE", "not an apk")
    }]);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::Rejected {
            code: "INVALID_PACKAGE".to_string(),
            message: "not an apk".to_string(),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn rejected_enhancement_start_never_polls() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_reports([UploadProgress::succeeded(77)]);
    harness
        .client
        .script_start(EnhanceStart::rejected("QUOTA", "limit exceeded"));

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::Rejected {
            code: "QUOTA".to_string(),
            message: "limit exceeded".to_string(),
        })
    );
    assert!(!harness
        .client
        .calls()
        .iter()
        .any(|c| matches!(c, ClientCall::EnhanceProgress { .. })));
}

#[tokio::test(start_paused = true)]
async fn terminal_enhancement_status_fails_after_the_scripted_polls() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_reports([UploadProgress::succeeded(77)]);
    harness.client.script_start(EnhanceStart::ok());
    harness.client.script_enhance_statuses([0, 1, 2, 4]);

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        OrchestrationResult::Failure(FailureReason::EnhancementFailed)
    );
    let enhance_polls = harness
        .client
        .calls()
        .iter()
        .filter(|c| matches!(c, ClientCall::EnhanceProgress { .. }))
        .count();
    assert_eq!(enhance_polls, 4);
    assert_eq!(harness.sink.count_containing("enhancement in progress"), 3);
    assert!(!harness
        .client
        .calls()
        .iter()
        .any(|c| matches!(c, ClientCall::DownloadUrl { .. })));
}

#[tokio::test(start_paused = true)]
async fn out_of_contract_status_is_an_infrastructure_fault() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_reports([UploadProgress::succeeded(77)]);
    harness.client.script_start(EnhanceStart::ok());
    harness.client.script_enhance_statuses([7]);

    let err = harness.run().await.unwrap_err();

    assert_eq!(
        err,
        OrchestrationError::UnknownStatus {
            phase: Phase::Enhance,
            code: 7,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn persistent_transport_fault_exhausts_retries_and_aborts() {
    let harness = Harness::new();
    for _ in 0..3 {
        harness
            .client
            .script_submit_err(ClientError::Transport("connection refused".to_string()));
    }

    let err = harness.run().await.unwrap_err();

    assert!(matches!(
        err,
        OrchestrationError::Client(ClientError::Transport(_))
    ));
    // default policy: one initial attempt plus two retries
    assert_eq!(harness.client.calls().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn done_status_without_an_enhance_task_id_aborts() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness.client.script_upload_reports([UploadProgress {
        status: 1,
        ..UploadProgress::pending()
    }]);

    let err = harness.run().await.unwrap_err();

    assert!(matches!(
        err,
        OrchestrationError::Client(ClientError::MalformedResponse(_))
    ));
}
