// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! solid-adapters: real-world implementations of the `solid-core` client trait
//!
//! - `MpaasClient`: the mPaaS hardening service over HTTPS
//! - `TracedClient`: tracing decorator for any `HardeningClient`

pub mod mpaas;
pub mod traced;

pub use mpaas::{Credentials, Endpoints, MpaasClient};
pub use traced::TracedClient;
