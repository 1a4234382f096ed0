//! WolframAlpha launcher plugin
//!
//! Registers the `:W` keyword and forwards confirmed queries to the provider.

use crate::config::WolframConfig;
use crate::core::{DisplayItem, ItemCategory, evaluate, strip_keyword};
use crate::plugins::api::{Host, HostEvent, LauncherPlugin};
use crate::services::wolfram::Provider;
use crate::{log_debug, log_error, log_info, log_warn};

pub struct WolframPlugin<H: Host, P: Provider> {
    host: H,
    provider: P,
    config: WolframConfig,
}

impl<H: Host, P: Provider> WolframPlugin<H, P> {
    /// Plugin with an unconfigured key; [`LauncherPlugin::on_start`] reads settings
    pub fn new(host: H, provider: P) -> Self {
        Self { host, provider, config: WolframConfig::default() }
    }

    pub fn config(&self) -> &WolframConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Swap in freshly loaded settings; on failure the previous ones stay
    fn read_config(&mut self) {
        match self.host.load_settings() {
            Ok(config) => {
                if config != self.config {
                    log_info!(
                        "WolframAlpha settings loaded (API key {})",
                        if config.is_configured() { "configured" } else { "missing" }
                    );
                }
                self.config = config;
            }
            Err(e) => {
                log_warn!("Keeping previous WolframAlpha settings: {}", e);
            }
        }
    }

    /// Text to evaluate, or `None` when this request is not for us
    fn query_text<'a>(&self, user_input: &'a str, items_chain: &[DisplayItem]) -> Option<&'a str> {
        if user_input.is_empty() {
            return None;
        }
        if let Some(first) = items_chain.first() {
            if !first.is_keyword() {
                return None;
            }
        }

        match strip_keyword(user_input) {
            Some("") => None,
            Some(text) => Some(text),
            None if !items_chain.is_empty() => Some(user_input),
            None => None,
        }
    }
}

impl<H: Host, P: Provider> LauncherPlugin for WolframPlugin<H, P> {
    fn on_start(&mut self) {
        self.read_config();
    }

    fn on_catalog(&self) -> Vec<DisplayItem> {
        vec![DisplayItem::keyword()]
    }

    fn on_suggest(&self, user_input: &str, items_chain: &[DisplayItem]) -> Vec<DisplayItem> {
        let Some(text) = self.query_text(user_input, items_chain) else {
            return Vec::new();
        };

        match evaluate(text, &self.config, &self.provider) {
            Ok(items) => items,
            Err(e) => {
                log_error!("WolframAlpha query '{}' failed: {}", text, e);
                Vec::new()
            }
        }
    }

    fn on_execute(&self, item: &DisplayItem, action: Option<&str>) -> anyhow::Result<()> {
        log_debug!("Executing {:?} item (action: {:?})", item.kind, action);

        match item.category() {
            ItemCategory::Expression => self.host.set_clipboard(&item.target),
            ItemCategory::Url => self.host.open_url(&item.target),
            ItemCategory::Keyword => Ok(()),
        }
    }

    fn on_events(&mut self, event: HostEvent) {
        if event == HostEvent::PackageConfigChanged {
            self.read_config();
        }
    }
}
