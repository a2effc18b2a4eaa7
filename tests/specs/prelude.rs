//! Shared helpers for orchestration specs.

use solid_core::{
    ArtifactRef, FakeClient, JobIdentity, MemorySink, OrchestrationError, OrchestrationResult,
    Orchestrator, RunConfig,
};
use std::sync::Arc;

pub use solid_core::remote::{ClientCall, ClientError, EnhanceStart, UploadProgress};
pub use solid_core::{FailureReason, FinalArtifact, Phase};

pub const ARTIFACT_URL: &str = "https://store.example.com/app.apk";
pub const HARDENED_URL: &str = "https://cdn.example.com/hardened.apk";

/// One scripted orchestration run: a fake client, a memory sink, and the
/// config under test.
pub struct Harness {
    pub client: FakeClient,
    pub sink: MemorySink,
    pub config: RunConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(RunConfig::default())
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self {
            client: FakeClient::new(),
            sink: MemorySink::new(),
            config,
        }
    }

    pub fn identity(&self) -> JobIdentity {
        JobIdentity::new("app-1", "tenant-1", "ws-1")
    }

    pub async fn run(&self) -> Result<OrchestrationResult, OrchestrationError> {
        Orchestrator::new(
            self.client.clone(),
            Arc::new(self.sink.clone()),
            self.config.clone(),
        )
        .run(&self.identity(), &ArtifactRef::from(ARTIFACT_URL))
        .await
    }

    /// Script a run that sails through both phases without waiting.
    pub fn script_smooth_run(&self) {
        self.client.script_submit(11);
        self.client
            .script_upload_reports([UploadProgress::succeeded(77)]);
        self.client.script_start(EnhanceStart::ok());
        self.client.script_enhance_statuses([3]);
        self.client.script_download(HARDENED_URL);
    }
}
