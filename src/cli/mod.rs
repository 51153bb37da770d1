// src/cli/mod.rs
//! Command-line interface definitions
//!
//! Clap derive structs for the `nomp-client-rs` binary: a `fetch` command
//! that pulls and prints the pool status, and a `config` command that
//! writes a TOML configuration template.

/// Command and option structs
pub mod commands;

// Re-export for easier access
pub use commands::{Action, Commands, ConfigOptions, FetchOptions};
