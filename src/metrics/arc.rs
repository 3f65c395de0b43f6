//! ARC (Adaptive Replacement Cache) Metrics
//!
//! Metrics specific to the ARC algorithm, extending the core metrics with the
//! adaptive split parameter `p` and the live sizes of all four internal lists.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// ARC-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Clone)]
pub struct ArcCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,
    /// Current value of the adaptive target size for T1 (`p`).
    pub target_p: u64,
    /// Current size of T1 (recent, resident).
    pub t1_len: u64,
    /// Current size of T2 (frequent, resident).
    pub t2_len: u64,
    /// Current size of B1 (recent ghosts).
    pub b1_len: u64,
    /// Current size of B2 (frequent ghosts).
    pub b2_len: u64,
}

impl ArcCacheMetrics {
    /// Creates a new `ArcCacheMetrics` instance tracking a cache of the given capacity.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(max_cache_size_bytes),
            target_p: 0,
            t1_len: 0,
            t2_len: 0,
            b1_len: 0,
            b2_len: 0,
        }
    }

    /// Converts ARC metrics to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("arc_target_p".into(), self.target_p as f64);
        metrics.insert("arc_t1_len".into(), self.t1_len as f64);
        metrics.insert("arc_t2_len".into(), self.t2_len as f64);
        metrics.insert("arc_b1_len".into(), self.b1_len as f64);
        metrics.insert("arc_b2_len".into(), self.b2_len as f64);
        metrics
    }
}

impl CacheMetrics for ArcCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}
