// WolframAlpha Launcher - Configuration
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::log_debug;

// Provider endpoints
pub const DEFAULT_API_URL: &str = "https://api.wolframalpha.com/v2/query";
pub const DEFAULT_QUERY_URL: &str = "https://www.wolframalpha.com/input/?i={}";

// Launcher integration
pub const DEFAULT_KEYWORD: &str = ":W";
pub const CONFIRM_MARKER: char = '\\';

// Settings storage
pub const DEFAULT_SETTINGS_PATH: &str = "wolfram.toml";
pub const APP_ID_ENV: &str = "WOLFRAM_APP_ID";

#[derive(Parser, Debug)]
#[command(author, version, about = "WolframAlpha at your fingertips")]
pub struct Cli {
    /// Query to evaluate; omit to start the interactive prompt
    pub query: Vec<String>,

    /// Settings file holding `[main] apiKey`
    #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Execute the N-th suggestion (1-based): copy answers, open links
    #[arg(short, long)]
    pub pick: Option<usize>,

    /// Print suggestions as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Enable trace output (adds module paths to log lines)
    #[arg(short, long)]
    pub trace: bool,

    /// Log in journald format
    #[arg(long)]
    pub journald: bool,
}

impl Cli {
    /// Query words joined back together, `None` when no words were given
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() { None } else { Some(self.query.join(" ")) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// On-disk settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub main: MainSection,
    #[serde(default)]
    pub provider: ProviderSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainSection {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSection {
    pub api_url: Option<String>,
    pub query_url: Option<String>,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a settings file; a missing file yields empty settings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log_debug!("Settings file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }
}

/// Immutable snapshot the query transformer runs against.
///
/// Replaced wholesale whenever the host reports a configuration change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WolframConfig {
    app_id: Option<String>,
    pub api_url: String,
    pub query_url: String,
}

impl Default for WolframConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_url: DEFAULT_API_URL.to_string(),
            query_url: DEFAULT_QUERY_URL.to_string(),
        }
    }
}

impl WolframConfig {
    /// Config with the given key; blank keys count as "not configured"
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self::default().app_id(Some(app_id.into()))
    }

    fn app_id(mut self, app_id: Option<String>) -> Self {
        self.app_id = app_id
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Resolve settings plus an optional environment override
    pub fn from_settings(settings: &Settings, env_app_id: Option<String>) -> Self {
        let defaults = Self::default();
        let app_id = env_app_id
            .filter(|key| !key.trim().is_empty())
            .or_else(|| settings.main.api_key.clone());

        Self {
            api_url: settings.provider.api_url.clone().unwrap_or(defaults.api_url),
            query_url: settings.provider.query_url.clone().unwrap_or(defaults.query_url),
            app_id: None,
        }.app_id(app_id)
    }

    /// Load settings from `path`, honouring `WOLFRAM_APP_ID` (including from `.env`)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        let settings = Settings::load(path)?;
        Ok(Self::from_settings(&settings, std::env::var(APP_ID_ENV).ok()))
    }

    pub fn credential(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.app_id.is_some()
    }
}
