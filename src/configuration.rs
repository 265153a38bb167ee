use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::registry::KEYS;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub client: ClientSettings,
    pub providers: HashMap<String, ProviderConfig>,
}

/// Options for the HTTP client shared by every probe.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Upstream HTTP proxy as `host:port`.
    pub proxy: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("vpnstatus/", env!("CARGO_PKG_VERSION")).to_string(),
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Settings {
    /// Loads settings from `path`. A missing or empty file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };

        if config_data.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = toml::from_str(&config_data)
            .with_context(|| format!("cannot parse {}", path.display()))?;

        for key in settings.providers.keys() {
            if !KEYS.contains(&key.as_str()) {
                log::warn!("ignoring unknown provider `{}` in {}", key, path.display());
            }
        }
        Ok(settings)
    }

    pub fn new() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.providers.get(key).map_or(true, |p| p.enabled)
    }

    /// Registry keys not switched off in `[providers]`, in registry order.
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        KEYS.iter().copied().filter(|k| self.is_enabled(k)).collect()
    }
}
