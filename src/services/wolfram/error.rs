// WolframAlpha Launcher - Provider Errors
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for the WolframAlpha client

use thiserror::Error;

/// Failures that abort a single provider request.
///
/// A non-OK HTTP status is not one of these: it is rendered as a visible
/// display item instead.
#[derive(Error, Debug)]
pub enum WolframError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for WolframAlpha operations
pub type WolframResult<T> = Result<T, WolframError>;

impl WolframError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
