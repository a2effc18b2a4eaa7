// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote hardening-service client boundary
//!
//! The orchestration core never speaks HTTP; it depends on the
//! [`HardeningClient`] trait covering the five remote operations. The real
//! implementation lives in `solid-adapters`; [`FakeClient`] here scripts
//! responses for tests.

mod fake;
mod traits;

pub use fake::{ClientCall, FakeClient};
pub use traits::{
    ClientError, DownloadInfo, EnhanceProgress, EnhanceStart, HardeningClient, UploadProgress,
    UploadReceipt,
};
