// src/cli/commands.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NOMP Client CLI - pool statistics fetcher
#[derive(Parser, Debug)]
#[command(name = "nomp-client-rs")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// The action to perform (fetch pool status or generate config)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the client application
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Fetch and display the pool server's current status
    Fetch(FetchOptions),

    /// Generate configuration file template
    Config(ConfigOptions),
}

/// Options for fetching pool status
#[derive(Parser, Debug)]
pub struct FetchOptions {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Pool base URL (skips the config file entirely)
    #[arg(short, long)]
    pub url: Option<String>,

    /// User-Agent header to present (overrides config)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Dump raw requests and responses to the debug log
    #[arg(short, long)]
    pub debug: bool,
}

/// Options for generating configuration files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "config.toml")]
    pub output: PathBuf,
}
