//! NOMP Client - Rust client for NOMP pool statistics APIs
//!
//! This crate provides a typed client for the stats API exposed by NOMP
//! (Node Open Mining Portal) pool software, including:
//! - A single-call `stats` fetch decoded into typed structures
//! - Normalization of the API's inconsistent number/string encoding
//! - Human-readable hashrate string parsing ("2.43 MH" and friends)
//! - Share-proportional re-derivation of per-worker hashrates

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// NOMP API client implementation
pub mod client;

/// HTTP transport layer for talking to NOMP servers
pub mod transport;

/// Pool status data model and normalization
pub mod status;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Configuration management
pub mod config;

// Core exports
pub use cli::Commands;
pub use client::NompClient;
pub use config::Config;
pub use status::{
    Algo, Algos, Blocks, GlobalStat, Pool, Pools, Stat, Status, Worker, Workers, format_hashrate,
    parse_hashrate,
};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use utils::{NompError, init_logging};
