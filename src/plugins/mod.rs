//! Launcher plugin layer
//!
//! - `api`: the callback and host-service traits a launcher speaks
//! - `wolfram`: the WolframAlpha plugin implementing those callbacks
//! - `desktop`: clipboard/browser/settings services for the command-line host

pub mod api;
pub mod desktop;
pub mod wolfram;

pub use api::{Host, HostEvent, LauncherPlugin};
pub use desktop::DesktopHost;
pub use wolfram::WolframPlugin;
