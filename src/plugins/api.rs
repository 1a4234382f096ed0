//! Contract between a launcher and its plugins
//!
//! The launcher drives a plugin through [`LauncherPlugin`] callbacks and
//! offers its own services (settings storage, clipboard, browser) through
//! [`Host`]. Callbacks are never invoked concurrently with each other.

use crate::config::{ConfigError, WolframConfig};
use crate::core::DisplayItem;

/// Notifications the launcher broadcasts to plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The plugin's own configuration file changed
    PackageConfigChanged,
    /// The launcher's global configuration changed
    AppConfigChanged,
    /// The desktop network state changed
    NetworkChanged,
}

/// Services the launcher provides to a plugin
pub trait Host {
    /// Read the plugin's persisted settings
    fn load_settings(&self) -> Result<WolframConfig, ConfigError>;

    fn set_clipboard(&self, text: &str) -> anyhow::Result<()>;

    fn open_url(&self, url: &str) -> anyhow::Result<()>;
}

/// Callbacks a launcher invokes on a plugin
pub trait LauncherPlugin {
    /// Called once after loading
    fn on_start(&mut self);

    /// Items the plugin contributes to the launcher catalog
    fn on_catalog(&self) -> Vec<DisplayItem>;

    /// Suggestions for the current input.
    ///
    /// `items_chain` holds the items the user already selected, the first one
    /// being the catalog item that activated the plugin, if any. The returned
    /// order must be kept as-is by the launcher.
    fn on_suggest(&self, user_input: &str, items_chain: &[DisplayItem]) -> Vec<DisplayItem>;

    /// The user executed `item`
    fn on_execute(&self, item: &DisplayItem, action: Option<&str>) -> anyhow::Result<()>;

    fn on_events(&mut self, event: HostEvent);
}
