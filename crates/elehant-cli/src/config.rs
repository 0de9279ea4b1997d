//! Configuration file management.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use elehant_core::MacAddress;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ELEHANT_CONFIG";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format ("text", "json" or "csv")
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Output compact JSON
    #[serde(default)]
    pub compact: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "elehant_core=trace")
    #[serde(default)]
    pub log_level: Option<String>,

    /// Meter aliases (friendly name -> meter address)
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("elehant")
            .join("config.toml")
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`, or return default if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Resolve an alias to its meter address, or return the original if not an alias.
pub fn resolve_alias(address: &str, config: &Config) -> String {
    config
        .aliases
        .get(address)
        .cloned()
        .unwrap_or_else(|| address.to_string())
}

/// Find the alias name of a meter address.
///
/// Stored addresses are compared after parsing, so any accepted spelling
/// (upper case, dashes, bare hex) matches.
pub fn alias_for<'a>(address: &MacAddress, config: &'a Config) -> Option<&'a str> {
    config
        .aliases
        .iter()
        .find(|(_, v)| v.parse::<MacAddress>().is_ok_and(|m| m == *address))
        .map(|(k, _)| k.as_str())
}

/// Print alias resolution feedback if the user is not in quiet mode.
pub fn print_alias_feedback(original: &str, resolved: &str, quiet: bool) {
    if !quiet && original != resolved {
        eprintln!("Using meter '{}' -> {}", original, resolved);
    }
}
