// src/config/config.rs
use crate::utils::error::NompError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the client
///
/// Contains all settings needed to talk to a pool server: where it lives,
/// how to identify ourselves, and how patient to be.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the pool's web frontend
    /// (e.g. "http://pool.example.com/")
    pub base_url: String,

    /// User-Agent header to present; empty string sends none
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Dump raw requests and responses to the debug log
    #[serde(default)]
    pub debug: bool,

    /// Per-request deadline in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    concat!("nomp-client-rs/", env!("CARGO_PKG_VERSION")).into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Builds a configuration from a base URL with every other field at
    /// its default, for callers that skip the config file entirely
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            debug: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Loads configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(NompError)` - If file couldn't be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NompError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            NompError::ConfigError(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&config_str)
            .map_err(|e| NompError::ConfigError(format!("Invalid config format: {}", e)))
    }

    /// Generates a configuration template string
    ///
    /// # Returns
    /// String containing a commented TOML configuration template
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# NOMP client configuration\n\n");
        template.push_str("# Base URL of the pool web frontend; the API is fetched from\n");
        template.push_str("# <base_url>api/stats\n");
        template.push_str("base_url = \"http://pool.example.com/\"\n\n");
        template.push_str("# User-Agent header; set to \"\" to send none\n");
        template.push_str(&format!("user_agent = \"{}\"\n\n", default_user_agent()));
        template.push_str("# Dump raw requests/responses to the debug log\n");
        template.push_str("debug = false\n\n");
        template.push_str("# Per-request deadline in seconds\n");
        template.push_str("timeout_secs = 30\n");
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_in() {
        let config: Config = toml::from_str("base_url = \"http://pool.example.com/\"").unwrap();
        assert_eq!(config.base_url, "http://pool.example.com/");
        assert!(!config.debug);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("nomp-client-rs/"));
    }

    #[test]
    fn test_template_round_trips() {
        let config: Config = toml::from_str(&Config::generate_template()).unwrap();
        assert_eq!(config.base_url, "http://pool.example.com/");
    }

    #[test]
    fn test_missing_base_url_is_an_error() {
        assert!(toml::from_str::<Config>("debug = true").is_err());
    }
}
