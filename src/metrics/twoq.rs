//! 2Q (Two-Queue) Cache Metrics
//!
//! Metrics specific to the 2Q algorithm, extending the core metrics with the
//! live sizes of the three internal lists (Am, A1in, A1out).

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// 2Q-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Clone)]
pub struct TwoQCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,
    /// Current size of Am (frequent, resident).
    pub am_len: u64,
    /// Current size of A1in (recent, resident).
    pub a1in_len: u64,
    /// Current size of A1out (recent, ghost).
    pub a1out_len: u64,
}

impl TwoQCacheMetrics {
    /// Creates a new `TwoQCacheMetrics` instance tracking a cache of the given capacity.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(max_cache_size_bytes),
            am_len: 0,
            a1in_len: 0,
            a1out_len: 0,
        }
    }

    /// Converts 2Q metrics to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("twoq_am_len".into(), self.am_len as f64);
        metrics.insert("twoq_a1in_len".into(), self.a1in_len as f64);
        metrics.insert("twoq_a1out_len".into(), self.a1out_len as f64);
        metrics
    }
}

impl CacheMetrics for TwoQCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "2Q"
    }
}
