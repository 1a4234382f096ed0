// WolframAlpha Launcher - Services
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod wolfram;

pub use wolfram::{HttpProvider, Provider, ProviderRequest, WolframError, WolframResult};
