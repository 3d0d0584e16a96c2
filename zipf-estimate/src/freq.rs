//! The frequency function `freq(r)`
//!
//! Extends the discrete rank table to every real rank `r >= 1`. Integer
//! ranks read the table directly. Between two integer ranks the value is
//! interpolated linearly in reciprocal space, i.e. the result is a weighted
//! harmonic mean of the two neighbouring counts.
//!
//! Results are memoized by the exact bit pattern of `r`. Two inputs that
//! differ only in their last bits are separate cache entries.

use crate::helpers::{is_close, lerp};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use zipf_core::{Result, ZipfError};
use zipf_stats::RankTable;

pub struct FrequencyFunction {
    table: Arc<RankTable>,
    cache: RwLock<HashMap<u64, f64>>,
}

impl FrequencyFunction {
    pub fn new(table: Arc<RankTable>) -> Self {
        Self {
            table,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn table(&self) -> &RankTable {
        &self.table
    }

    /// Evaluate `freq(r)`; fails with a domain error for `r < 1`
    pub fn eval(&self, r: f64) -> Result<f64> {
        if r.is_nan() || r < 1.0 {
            return Err(ZipfError::domain(format!(
                "cannot evaluate freq on r = {}; its domain is the real numbers >= 1",
                r
            )));
        }
        if r.is_infinite() {
            return Err(ZipfError::domain("cannot evaluate freq on an infinite rank"));
        }

        let key = r.to_bits();
        {
            let read_guard = self
                .cache
                .read()
                .map_err(|_| ZipfError::internal("Failed to acquire freq cache lock"))?;
            if let Some(&value) = read_guard.get(&key) {
                return Ok(value);
            }
        }

        let value = if is_close(r, r.round()) {
            self.at_rank(r.round())?
        } else {
            let lo = r.floor();
            let a = 1.0 / self.at_rank(lo)?;
            let b = 1.0 / self.at_rank(r.ceil())?;
            1.0 / lerp(a, b, r - lo)
        };
        debug!(r, value, "freq cache miss");

        // a poisoned lock only costs us the memo
        if let Ok(mut write_guard) = self.cache.write() {
            write_guard.insert(key, value);
        }

        Ok(value)
    }

    /// Table lookup for an integer-valued rank
    fn at_rank(&self, rank: f64) -> Result<f64> {
        self.table
            .get(rank as usize)
            .map(|count| count as f64)
            .ok_or_else(|| {
                ZipfError::domain(format!(
                    "rank {} is outside the table (1..={})",
                    rank,
                    self.table.len()
                ))
            })
    }

    /// Number of distinct inputs memoized so far
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }
}
