// src/status/mod.rs
//! Pool status data model and normalization
//!
//! This module owns everything between raw response bytes and the typed
//! [`Status`] value handed to callers:
//! - `model`: the public data structures
//! - `decode`: wire mirrors, numeric coercion and the per-pool
//!   normalization pass (equihash unit correction, worker hashrate
//!   redistribution)
//! - `hashrate`: "2.43 MH"-style string parsing and formatting

/// Public data structures for the stats endpoint
pub mod model;

/// Wire decoding and the normalization pass
pub mod decode;

/// Human-readable hashrate parsing and formatting
pub mod hashrate;

// Re-export main components for cleaner imports
pub use decode::decode_status;
pub use hashrate::{format_hashrate, parse_hashrate};
pub use model::{Algo, Algos, Blocks, GlobalStat, Pool, Pools, Stat, Status, Worker, Workers};
