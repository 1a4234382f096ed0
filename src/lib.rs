//! # WolframAlpha Launcher
//!
//! WolframAlpha at your fingertips: a launcher plugin that turns typed text
//! into short, copyable answers.
//!
//! - Type a query after the `:W` keyword to preview it.
//! - End it with a backslash (`\`) to send it to the WolframAlpha API.
//! - Every primary result pod becomes one `Title: answer` item, followed by a
//!   link to the full query on wolframalpha.com.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wolfram_launcher::{HttpProvider, WolframConfig, evaluate};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = WolframConfig::with_app_id("XXXX-XXXXXXXXXX");
//!     for item in evaluate("distance to the moon\\", &config, &HttpProvider::new())? {
//!         println!("{}  ({})", item.label, item.target);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding in a launcher
//!
//! Implement [`plugins::Host`] for the launcher's settings, clipboard and
//! browser services, wrap it in a [`WolframPlugin`] and forward the launcher's
//! callbacks to the [`LauncherPlugin`] methods.

pub mod config;
pub mod core;
pub mod plugins;
pub mod services;

pub use config::WolframConfig;
pub use crate::core::{DisplayItem, ItemCategory, ItemKind, ask, evaluate};
pub use plugins::{LauncherPlugin, WolframPlugin};
pub use services::{HttpProvider, Provider, WolframError};
