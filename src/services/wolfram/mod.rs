// WolframAlpha Launcher - Provider Module
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! WolframAlpha v2 query API: transport, response model and answer formatting

pub mod client;
pub mod error;
pub mod format;
pub mod models;

pub use client::{HttpProvider, Provider, ProviderRequest};
pub use error::{WolframError, WolframResult};
pub use format::{normalize_fragment, query_link, summarize_pod};
pub use models::{Pod, ProviderResponse, QueryResult, SubPod};
