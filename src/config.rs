// File: ./src/config.rs
// Handles configuration loading and defaults.
//
// Everything here is optional: the notifier must keep working with no
// config file at all, so a missing or unreadable file degrades to the
// defaults instead of failing.
use crate::context::AppContext;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_title() -> String {
    "Daily Quote".to_string()
}

fn default_timeout_secs() -> u32 {
    crate::notify::DEFAULT_TIMEOUT_SECS
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Notification title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Display-duration hint passed to the notification backends.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            title: default_title(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load(ctx: &dyn AppContext) -> Self {
        match Self::try_load(ctx) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("ignoring unreadable config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from disk; `Ok(None)` means no config file exists.
    fn try_load(ctx: &dyn AppContext) -> Result<Option<Self>> {
        let path = ctx.config_file_path()?;
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_yields_defaults() {
        let ctx = TestContext::new();
        let config = Config::load(&ctx);
        assert_eq!(config.title, "Daily Quote");
        assert_eq!(config.timeout_secs, crate::notify::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let ctx = TestContext::new();
        fs::write(ctx.config_file_path().unwrap(), "title = \"Carpe Diem\"\n").unwrap();
        let config = Config::load(&ctx);
        assert_eq!(config.title, "Carpe Diem");
        assert_eq!(config.timeout_secs, crate::notify::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let ctx = TestContext::new();
        fs::write(ctx.config_file_path().unwrap(), "title = [not toml").unwrap();
        let config = Config::load(&ctx);
        assert_eq!(config.title, "Daily Quote");
    }
}
