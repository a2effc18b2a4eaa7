//! Full-run success paths.

use crate::prelude::*;

#[tokio::test(start_paused = true)]
async fn smooth_run_resolves_the_hardened_artifact() {
    let harness = Harness::new();
    harness.script_smooth_run();

    let result = harness.run().await.unwrap();

    assert_eq!(
        result,
        solid_core::OrchestrationResult::Success(FinalArtifact {
            download_url: HARDENED_URL.to_string(),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn waiting_run_polls_each_phase_at_its_own_cadence() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness.client.script_upload_reports([
        UploadProgress::pending(),
        UploadProgress::pending(),
        UploadProgress::succeeded(77),
    ]);
    harness.client.script_start(EnhanceStart::ok());
    harness.client.script_enhance_statuses([1, 2, 2, 3]);
    harness.client.script_download(HARDENED_URL);

    let start = tokio::time::Instant::now();
    let result = harness.run().await.unwrap();

    assert!(matches!(result, solid_core::OrchestrationResult::Success(_)));
    // two 1s waits during intake, three 2s waits during enhancement
    assert_eq!(start.elapsed(), std::time::Duration::from_secs(8));

    let calls = harness.client.calls();
    let upload_polls = calls
        .iter()
        .filter(|c| matches!(c, ClientCall::UploadProgress { .. }))
        .count();
    let enhance_polls = calls
        .iter()
        .filter(|c| matches!(c, ClientCall::EnhanceProgress { .. }))
        .count();
    assert_eq!(upload_polls, 3);
    assert_eq!(enhance_polls, 4);
    assert_eq!(harness.sink.count_containing("enhancement in progress"), 3);
}

#[tokio::test(start_paused = true)]
async fn narration_tells_the_whole_story_in_order() {
    let harness = Harness::new();
    harness.script_smooth_run();

    harness.run().await.unwrap();

    assert_eq!(
        harness.sink.lines(),
        vec![
            format!("mpaas hardening: submitting artifact [{ARTIFACT_URL}] for hardening"),
            "mpaas hardening: upload complete, enhancement task 77".to_string(),
            "mpaas hardening: enhancement task 77 started".to_string(),
            format!("mpaas hardening: hardened artifact available at {HARDENED_URL}"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn custom_prefix_flows_through_every_line() {
    let config = solid_core::RunConfig {
        prefix: "harden: ".to_string(),
        ..Default::default()
    };
    let harness = Harness::with_config(config);
    harness.script_smooth_run();

    harness.run().await.unwrap();

    assert!(harness
        .sink
        .lines()
        .iter()
        .all(|line| line.starts_with("harden: ")));
}

#[tokio::test(start_paused = true)]
async fn identically_scripted_runs_are_indistinguishable() {
    let mut observed = Vec::new();
    for _ in 0..2 {
        let harness = Harness::new();
        harness.client.script_submit(11);
        harness.client.script_upload_reports([
            UploadProgress::pending(),
            UploadProgress::succeeded(77),
        ]);
        harness.client.script_start(EnhanceStart::ok());
        harness.client.script_enhance_statuses([2, 3]);
        harness.client.script_download(HARDENED_URL);

        let result = harness.run().await.unwrap();
        observed.push((result, harness.client.calls(), harness.sink.lines()));
    }

    assert_eq!(observed[0], observed[1]);
}

#[tokio::test(start_paused = true)]
async fn traced_client_composes_with_the_orchestrator() {
    let harness = Harness::new();
    harness.script_smooth_run();
    let traced = solid_adapters::TracedClient::new(harness.client.clone());

    let result = solid_core::Orchestrator::new(
        traced,
        std::sync::Arc::new(harness.sink.clone()),
        solid_core::RunConfig::default(),
    )
    .run(
        &harness.identity(),
        &solid_core::ArtifactRef::from(ARTIFACT_URL),
    )
    .await
    .unwrap();

    assert!(matches!(result, solid_core::OrchestrationResult::Success(_)));
    assert_eq!(harness.client.calls().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn transient_transport_faults_do_not_change_the_outcome() {
    let harness = Harness::new();
    harness.client.script_submit(11);
    harness
        .client
        .script_upload_err(ClientError::Transport("connection reset".to_string()));
    harness
        .client
        .script_upload_reports([UploadProgress::succeeded(77)]);
    harness.client.script_start(EnhanceStart::ok());
    harness
        .client
        .script_enhance_err(ClientError::Transport("timeout".to_string()));
    harness.client.script_enhance_statuses([3]);
    harness.client.script_download(HARDENED_URL);

    let result = harness.run().await.unwrap();

    assert!(matches!(result, solid_core::OrchestrationResult::Success(_)));
}
