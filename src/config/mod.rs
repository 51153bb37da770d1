// src/config/mod.rs
//! Configuration management for the client
//!
//! This module handles all configuration-related functionality including:
//! - Loading and parsing configuration files
//! - Generating configuration templates
//!
//! The configuration uses TOML format.

/// Core configuration implementation
///
/// Contains the [`Config`] struct that defines the client's configuration
/// structure and behavior.
pub mod config;

// Re-export key items for easy access
pub use config::Config;

use crate::utils::error::NompError;
use std::path::PathBuf;

/// Loads client configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the configuration file (anything convertible to PathBuf)
///
/// # Returns
/// * `Ok(Config)` - Successfully loaded configuration
/// * `Err(NompError)` - If the file couldn't be read or parsed
pub fn load(path: impl Into<PathBuf>) -> Result<Config, NompError> {
    Config::load(path)
}

/// Generates a commented configuration template
///
/// # Returns
/// String containing a ready-to-use TOML configuration template
pub fn generate_template() -> String {
    Config::generate_template()
}
