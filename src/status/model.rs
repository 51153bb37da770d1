// src/status/model.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from worker identifier to [`Worker`]
pub type Workers = BTreeMap<String, Worker>;

/// Mapping from algorithm name to [`Algo`]
pub type Algos = BTreeMap<String, Algo>;

/// Mapping from pool identifier to [`Pool`]
pub type Pools = BTreeMap<String, Pool>;

/// Network-wide statistics across every pool the server runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStat {
    /// Number of connected workers across all pools
    pub workers: u16,
    /// Network-wide hashrate in raw H/s
    pub hashrate: f64,
}

/// Per-algorithm statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Algo {
    /// Number of workers mining this algorithm
    pub workers: u16,
    /// Aggregate hashrate for the algorithm in raw H/s
    pub hashrate: f64,
    /// Human-readable hashrate as reported by the server (informational
    /// only, never re-derived)
    #[serde(rename = "hashrateString")]
    pub hashrate_string: String,
}

/// Per-pool share and payout counters
///
/// The upstream API emits these fields inconsistently: sometimes as native
/// JSON numbers, sometimes as quoted numeric strings, and sometimes not at
/// all. After decoding they are always clean numerics, with absent or empty
/// values reading as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stat {
    /// Accepted shares over the pool's stats window
    pub valid_shares: u32,
    /// Blocks found by the pool
    pub valid_blocks: u32,
    /// Rejected shares over the pool's stats window
    pub invalid_shares: u32,
    /// Total amount paid out to miners, in the pool's currency
    pub total_paid: f64,
}

/// Block confirmation counters for a pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blocks {
    /// Blocks awaiting confirmation
    pub pending: u16,
    /// Confirmed blocks
    pub confirmed: u32,
    /// Orphaned blocks
    pub orphaned: u32,
}

/// A single worker's contribution to a pool
///
/// The `hashrate` field is always derived locally: the server's own
/// per-worker figures (a rounded display string for some pools, nothing at
/// all for others) are not trusted. See the normalization pass in
/// [`super::decode`] for how the value is re-derived from share counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Worker {
    /// Raw share count contributed over the stats window
    pub shares: f64,
    /// Rejected share count over the stats window
    pub invalid_shares: f64,
    /// Estimated hashrate in raw H/s, derived from the worker's share of
    /// the pool's aggregate hashrate
    pub hashrate: f64,
}

/// Statistics for a single pool
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pool {
    /// Pool display name
    pub name: String,
    /// Coin ticker symbol
    pub symbol: String,
    /// Proof-of-work algorithm identifier (e.g. "scrypt", "equihash")
    pub algorithm: String,
    /// Share and payout counters
    pub stats: Stat,
    /// Block confirmation counters
    pub blocks: Blocks,
    /// Per-worker statistics keyed by worker identifier
    pub workers: Workers,
    /// Pool aggregate hashrate in raw H/s (unit-corrected for equihash)
    pub hashrate: f64,
    /// Number of connected workers
    pub worker_count: u16,
    /// Human-readable hashrate as reported by the server
    pub hashrate_string: String,
}

/// Root value returned by the stats endpoint
///
/// Produced fresh for every API call and never mutated after the call
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Status {
    /// Server timestamp of the snapshot
    pub time: u64,
    /// Network-wide statistics
    pub global: GlobalStat,
    /// Per-algorithm statistics keyed by algorithm name
    pub algos: Algos,
    /// Per-pool statistics keyed by pool identifier
    pub pools: Pools,
}
