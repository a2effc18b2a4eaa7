// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced client wrapper for consistent observability

use async_trait::async_trait;
use solid_core::remote::{
    ClientError, DownloadInfo, EnhanceProgress, EnhanceStart, HardeningClient, UploadProgress,
    UploadReceipt,
};
use solid_core::{ArtifactRef, EnhanceTicket, JobIdentity, UploadTicket};

/// Wrapper that adds tracing to any HardeningClient
#[derive(Clone)]
pub struct TracedClient<C> {
    inner: C,
}

impl<C> TracedClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: HardeningClient> HardeningClient for TracedClient<C> {
    async fn submit_upload(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<UploadReceipt, ClientError> {
        let span = tracing::info_span!("client.submit_upload", app_id = %identity.app_id);
        let _guard = span.enter();

        tracing::info!(artifact = %artifact, "submitting");

        let start = std::time::Instant::now();
        let result = self.inner.submit_upload(identity, artifact).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(receipt) => tracing::info!(
                upload_task_id = %receipt.upload_task_id,
                elapsed_ms = elapsed.as_millis() as u64,
                "submitted"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "submit failed"
            ),
        }

        result
    }

    async fn upload_progress(
        &self,
        identity: &JobIdentity,
        ticket: &UploadTicket,
    ) -> Result<UploadProgress, ClientError> {
        let span = tracing::info_span!(
            "client.upload_progress",
            upload_task_id = %ticket.upload_task_id,
        );
        let _guard = span.enter();

        let result = self.inner.upload_progress(identity, ticket).await;
        match &result {
            Ok(report) => tracing::debug!(status = report.status, "polled"),
            Err(e) => tracing::error!(error = %e, "poll failed"),
        }

        result
    }

    async fn start_enhance(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
        task_type: &str,
    ) -> Result<EnhanceStart, ClientError> {
        let span = tracing::info_span!(
            "client.start_enhance",
            enhance_task_id = %ticket.enhance_task_id,
            task_type,
        );
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.start_enhance(identity, ticket, task_type).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) if response.success => {
                tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "started")
            }
            Ok(response) => tracing::warn!(
                code = %response.code,
                message = %response.message,
                "start rejected"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "start failed"
            ),
        }

        result
    }

    async fn enhance_progress(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<EnhanceProgress, ClientError> {
        let span = tracing::info_span!(
            "client.enhance_progress",
            enhance_task_id = %ticket.enhance_task_id,
        );
        let _guard = span.enter();

        let result = self.inner.enhance_progress(identity, ticket).await;
        match &result {
            Ok(report) => tracing::debug!(status = report.status, "polled"),
            Err(e) => tracing::error!(error = %e, "poll failed"),
        }

        result
    }

    async fn download_url(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<DownloadInfo, ClientError> {
        let span = tracing::info_span!(
            "client.download_url",
            enhance_task_id = %ticket.enhance_task_id,
        );
        let _guard = span.enter();

        let result = self.inner.download_url(identity, ticket).await;
        match &result {
            Ok(info) => tracing::info!(url = %info.url, "resolved"),
            Err(e) => tracing::error!(error = %e, "resolve failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
