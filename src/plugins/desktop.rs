//! Desktop implementation of the launcher services
//!
//! Used by the command-line host: settings come from a TOML file, answers go
//! to the system clipboard and links open in the default browser.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::{ConfigError, WolframConfig};
use crate::log_debug;
use crate::plugins::api::Host;

pub struct DesktopHost {
    settings_path: PathBuf,
    // Kept alive: on X11 the clipboard contents vanish with their owner.
    clipboard: RefCell<Option<arboard::Clipboard>>,
}

impl DesktopHost {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            clipboard: RefCell::new(None),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

impl Host for DesktopHost {
    fn load_settings(&self) -> Result<WolframConfig, ConfigError> {
        WolframConfig::load(&self.settings_path)
    }

    fn set_clipboard(&self, text: &str) -> anyhow::Result<()> {
        let mut slot = self.clipboard.borrow_mut();
        if slot.is_none() {
            *slot = Some(arboard::Clipboard::new().context("Clipboard not available")?);
        }
        if let Some(clipboard) = slot.as_mut() {
            clipboard.set_text(text.to_string()).context("Failed to set clipboard")?;
        }
        log_debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }

    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        open::that(url).with_context(|| format!("Failed to open {} in a browser", url))?;
        log_debug!("Opened {}", url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_settings_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[main]\napiKey = \"FILE-KEY\"").unwrap();

        let host = DesktopHost::new(file.path());
        assert_eq!(host.settings_path(), file.path());

        let config = host.load_settings().unwrap();
        // WOLFRAM_APP_ID from the environment would take precedence
        if std::env::var(crate::config::APP_ID_ENV).is_err() {
            assert_eq!(config.credential(), Some("FILE-KEY"));
        }
    }
}
