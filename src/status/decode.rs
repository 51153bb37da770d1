// src/status/decode.rs
//! Decoding and normalization of the raw stats payload
//!
//! The wire format needs repair before it is usable:
//! - Share/payout counters arrive as numbers or as quoted numeric strings,
//!   inconsistently across pools within one payload
//! - Equihash pools report hashrate in scaled Sol/s instead of H/s
//! - Per-worker hashrates are missing or stale display strings, and must be
//!   re-derived from share counts against the trusted pool aggregate
//!
//! This module holds the wire-side mirror structs and the normalization
//! pass that turns them into the public model.

use crate::status::hashrate::parse_hashrate;
use crate::status::model::{Algos, Blocks, GlobalStat, Pool, Pools, Stat, Status, Worker, Workers};
use crate::utils::error::NompError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Algorithm identifier whose pools report in scaled Sol/s
const EQUIHASH: &str = "equihash";

/// Fixed factor NOMP applies to equihash Sol/s figures
const EQUIHASH_SOL_SCALE: f64 = 500_000.0;

/// A JSON value that may be a native number or a quoted numeric string
///
/// NOMP deployments disagree on how they encode the share counters: some
/// emit `"validShares": 1359059`, others `"validShares": "1359059"`, and
/// both can appear for different pools in the same payload. Decoding
/// captures either form and conversion happens as an explicit second step
/// so a bad value surfaces as [`NompError::MalformedNumber`] rather than a
/// generic JSON error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Num {
    Number(f64),
    Text(String),
}

impl Num {
    /// Converts to an unsigned counter, treating an empty string as zero
    fn into_u32(self, field: &'static str) -> Result<u32, NompError> {
        match self {
            Num::Number(value) => {
                if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
                    Ok(value as u32)
                } else {
                    Err(NompError::MalformedNumber {
                        field,
                        value: value.to_string(),
                    })
                }
            }
            Num::Text(text) => {
                if text.is_empty() {
                    return Ok(0);
                }
                text.parse().map_err(|_| NompError::MalformedNumber {
                    field,
                    value: text,
                })
            }
        }
    }

    /// Converts to a float, treating an empty string as zero
    fn into_f64(self, field: &'static str) -> Result<f64, NompError> {
        match self {
            Num::Number(value) => Ok(value),
            Num::Text(text) => {
                if text.is_empty() {
                    return Ok(0.0);
                }
                text.parse().map_err(|_| NompError::MalformedNumber {
                    field,
                    value: text,
                })
            }
        }
    }
}

/// Wire form of [`Stat`], before numeric coercion
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStat {
    #[serde(rename = "validShares")]
    valid_shares: Option<Num>,
    #[serde(rename = "validBlocks")]
    valid_blocks: Option<Num>,
    #[serde(rename = "invalidShares")]
    invalid_shares: Option<Num>,
    #[serde(rename = "totalPaid")]
    total_paid: Option<Num>,
}

impl RawStat {
    fn into_stat(self) -> Result<Stat, NompError> {
        Ok(Stat {
            valid_shares: match self.valid_shares {
                Some(num) => num.into_u32("validShares")?,
                None => 0,
            },
            valid_blocks: match self.valid_blocks {
                Some(num) => num.into_u32("validBlocks")?,
                None => 0,
            },
            invalid_shares: match self.invalid_shares {
                Some(num) => num.into_u32("invalidShares")?,
                None => 0,
            },
            total_paid: match self.total_paid {
                Some(num) => num.into_f64("totalPaid")?,
                None => 0.0,
            },
        })
    }
}

/// Wire form of [`Worker`], still carrying the display string
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawWorker {
    shares: f64,
    invalidshares: f64,
    hashrate: Option<f64>,
    #[serde(rename = "hashrateString")]
    hashrate_string: String,
}

impl RawWorker {
    /// Builds a [`Worker`], preferring a positive numeric hashrate over the
    /// display string. The string is a decode-time artifact and is dropped
    /// here; the redistribution pass overwrites the hashrate anyway for any
    /// pool that reports shares.
    fn into_worker(self) -> Worker {
        let hashrate = match self.hashrate {
            Some(rate) if rate > 0.0 => rate,
            _ => parse_hashrate(&self.hashrate_string),
        };
        Worker {
            shares: self.shares,
            invalid_shares: self.invalidshares,
            hashrate,
        }
    }
}

/// Wire form of [`Pool`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPool {
    name: String,
    symbol: String,
    algorithm: String,
    #[serde(rename = "poolStats")]
    pool_stats: RawStat,
    blocks: Blocks,
    workers: BTreeMap<String, RawWorker>,
    hashrate: f64,
    #[serde(rename = "workerCount")]
    worker_count: u16,
    #[serde(rename = "hashrateString")]
    hashrate_string: String,
}

impl RawPool {
    fn into_pool(self) -> Result<Pool, NompError> {
        let stats = self.pool_stats.into_stat()?;

        // Equihash pools report Sol/s scaled by a fixed constant; divide it
        // back out so every pool shares the same base unit. Must happen
        // before redistribution so the multiplier is derived from the
        // corrected aggregate.
        let mut hashrate = self.hashrate;
        if self.algorithm == EQUIHASH {
            hashrate /= EQUIHASH_SOL_SCALE;
        }

        let workers = self
            .workers
            .into_iter()
            .map(|(id, raw)| (id, raw.into_worker()))
            .collect();

        Ok(Pool {
            name: self.name,
            symbol: self.symbol,
            algorithm: self.algorithm,
            stats,
            blocks: self.blocks,
            workers: redistribute_hashrate(hashrate, workers),
            hashrate,
            worker_count: self.worker_count,
            hashrate_string: self.hashrate_string,
        })
    }
}

/// Wire form of [`Status`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatus {
    time: u64,
    global: GlobalStat,
    algos: Algos,
    pools: BTreeMap<String, RawPool>,
}

/// Re-derives every worker's hashrate from its share contribution
///
/// The pool-level aggregate is the only hashrate figure the server computes
/// from raw data; the per-worker figures are rounded display strings at
/// best. NOMP derives a hashrate as `shareMultiplier * shares /
/// hashrateWindow`, so dividing the trusted aggregate by the summed shares
/// recovers that constant without knowing the server's configuration, and
/// each worker's hashrate follows from its share count. The returned map
/// replaces the input wholesale rather than being edited in place.
///
/// A pool whose workers hold zero total shares has no derivable multiplier;
/// every worker's hashrate is pinned to zero in that case instead of
/// propagating a non-finite division result.
fn redistribute_hashrate(pool_hashrate: f64, workers: Workers) -> Workers {
    let total_shares: f64 = workers.values().map(|worker| worker.shares).sum();

    if total_shares == 0.0 {
        return workers
            .into_iter()
            .map(|(id, mut worker)| {
                worker.hashrate = 0.0;
                (id, worker)
            })
            .collect();
    }

    let share_multiplier = pool_hashrate / total_shares;
    workers
        .into_iter()
        .map(|(id, mut worker)| {
            worker.hashrate = worker.shares * share_multiplier;
            (id, worker)
        })
        .collect()
}

/// Decodes a raw stats payload into a fully normalized [`Status`]
///
/// Applies numeric coercion, worker decoding, the equihash unit correction
/// and hashrate redistribution to every pool. Any coercion failure aborts
/// the decode; there are no partial results.
pub fn decode_status(body: &[u8]) -> Result<Status, NompError> {
    let raw: RawStatus = serde_json::from_slice(body)?;

    let pools = raw
        .pools
        .into_iter()
        .map(|(id, pool)| Ok((id, pool.into_pool()?)))
        .collect::<Result<Pools, NompError>>()?;

    Ok(Status {
        time: raw.time,
        global: raw.global,
        algos: raw.algos,
        pools,
    })
}
