// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTPS client for the mPaaS hardening service
//!
//! Thin JSON-over-POST adapter: every operation is a camelCase request body
//! against a regional endpoint, answered by one of the `solid-core` report
//! types. Transport and HTTP-level problems map onto [`ClientError`]; status
//! interpretation stays in the core.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use solid_core::remote::{
    ClientError, DownloadInfo, EnhanceProgress, EnhanceStart, HardeningClient, UploadProgress,
    UploadReceipt,
};
use solid_core::{ArtifactRef, EnhanceTicket, JobIdentity, UploadTicket};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Regional service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
}

impl Endpoints {
    /// Endpoints for an Alibaba Cloud region id, e.g. `cn-hangzhou`.
    pub fn for_region(region: &str) -> Self {
        Self {
            base_url: format!("https://mpaas.{region}.aliyuncs.com"),
        }
    }

    /// Endpoints rooted at an explicit base URL (private deployments, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Access credentials for the service.
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub access_key_secret: String,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
        }
    }
}

// The secret never reaches logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest<'a> {
    app_id: &'a str,
    tenant_id: &'a str,
    workspace_id: &'a str,
    file_url: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadStatusRequest<'a> {
    app_id: &'a str,
    tenant_id: &'a str,
    workspace_id: &'a str,
    upload_task_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceStartRequest<'a> {
    app_id: &'a str,
    tenant_id: &'a str,
    workspace_id: &'a str,
    enhance_task_id: i64,
    task_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceStatusRequest<'a> {
    app_id: &'a str,
    tenant_id: &'a str,
    workspace_id: &'a str,
    enhance_task_id: i64,
}

/// mPaaS hardening service client.
#[derive(Debug, Clone)]
pub struct MpaasClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl MpaasClient {
    pub fn new(endpoints: Endpoints, credentials: Credentials) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            endpoints,
            credentials,
        })
    }

    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.endpoints.base_url, path);
        let response = self
            .http
            .post(&url)
            .basic_auth(
                &self.credentials.access_key_id,
                Some(&self.credentials.access_key_secret),
            )
            .json(body)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClientError::Unauthorized(format!("{status}: {detail}")));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClientError::Transport(format!("{status} from {path}: {detail}")));
        }

        response.json().await.map_err(|e| {
            ClientError::MalformedResponse(format!("undecodable response from {path}: {e}"))
        })
    }
}

fn send_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::MalformedResponse(err.to_string())
    } else {
        ClientError::Transport(err.to_string())
    }
}

#[async_trait]
impl HardeningClient for MpaasClient {
    async fn submit_upload(
        &self,
        identity: &JobIdentity,
        artifact: &ArtifactRef,
    ) -> Result<UploadReceipt, ClientError> {
        self.post(
            "/userApp/upload",
            &UploadRequest {
                app_id: &identity.app_id,
                tenant_id: &identity.tenant_id,
                workspace_id: &identity.workspace_id,
                file_url: &artifact.0,
            },
        )
        .await
    }

    async fn upload_progress(
        &self,
        identity: &JobIdentity,
        ticket: &UploadTicket,
    ) -> Result<UploadProgress, ClientError> {
        self.post(
            "/userApp/uploadStatus",
            &UploadStatusRequest {
                app_id: &identity.app_id,
                tenant_id: &identity.tenant_id,
                workspace_id: &identity.workspace_id,
                upload_task_id: ticket.upload_task_id.0,
            },
        )
        .await
    }

    async fn start_enhance(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
        task_type: &str,
    ) -> Result<EnhanceStart, ClientError> {
        self.post(
            "/userApp/enhance/start",
            &EnhanceStartRequest {
                app_id: &identity.app_id,
                tenant_id: &identity.tenant_id,
                workspace_id: &identity.workspace_id,
                enhance_task_id: ticket.enhance_task_id.0,
                task_type,
            },
        )
        .await
    }

    async fn enhance_progress(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<EnhanceProgress, ClientError> {
        self.post(
            "/userApp/enhance/status",
            &EnhanceStatusRequest {
                app_id: &identity.app_id,
                tenant_id: &identity.tenant_id,
                workspace_id: &identity.workspace_id,
                enhance_task_id: ticket.enhance_task_id.0,
            },
        )
        .await
    }

    async fn download_url(
        &self,
        identity: &JobIdentity,
        ticket: &EnhanceTicket,
    ) -> Result<DownloadInfo, ClientError> {
        self.post(
            "/userApp/enhance/downloadUrl",
            &EnhanceStatusRequest {
                app_id: &identity.app_id,
                tenant_id: &identity.tenant_id,
                workspace_id: &identity.workspace_id,
                enhance_task_id: ticket.enhance_task_id.0,
            },
        )
        .await
    }
}

#[cfg(test)]
#[path = "mpaas_tests.rs"]
mod tests;
