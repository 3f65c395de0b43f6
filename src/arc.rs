//! Adaptive Replacement Cache (ARC) Implementation
//!
//! ARC tracks both recency and frequency simultaneously by splitting resident entries
//! into two LRU lists — T1 (seen once, recently) and T2 (seen more than once) — each
//! backed by a ghost list of evicted keys — B1 and B2 — that record capacity pressure
//! without holding values. A single adaptive parameter `p` shifts the target size of
//! T1 versus T2 in response to which ghost list is taking the hits.
//!
//! # How the Algorithm Works
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                            ARC Cache                                  │
//! │                                                                       │
//! │   B1 (ghost)   T1 (resident,     |      T2 (resident,   B2 (ghost)    │
//! │                 recent, once)    |       frequent)                    │
//! │   ┌─────────┐  ┌─────────────┐   |   ┌─────────────┐   ┌─────────┐    │
//! │   │ keys    │  │ key → value │   |   │ key → value │   │ keys    │    │
//! │   │ only    │  │             │   |   │             │   │ only    │    │
//! │   └─────────┘  └─────────────┘   |   └─────────────┘   └─────────┘    │
//! │                        ◀── adaptive split point p ──▶                 │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A ghost hit in B1 means T1 is being evicted too eagerly relative to access
//! patterns, so `p` grows (more room for T1). A ghost hit in B2 means the opposite,
//! so `p` shrinks. See Megiddo & Modha, *ARC: A Self-Tuning, Low Overhead Replacement
//! Cache* for the full derivation; this module implements the four-list/five-case
//! state machine from that paper directly atop [`crate::lru::LruCache`] (T1/T2
//! value-carrying, B1/B2 as `LruCache<K, (), S>` ghost lists) rather than a bespoke
//! structure, mirroring how `original_source/arc/arc.go` composes its four internal
//! `polacache.LRUCache` instances.
//!
//! # Thread Safety
//!
//! Not thread-safe. See [`crate::locked::LockedArcCache`] (requires the `concurrent` feature).
//!
//! # Examples
//!
//! ```
//! use cache_rs::ArcCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = ArcCache::new(NonZeroUsize::new(4).unwrap());
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! ```

extern crate alloc;

use crate::config::ArcCacheConfig;
use crate::lru::LruCache;
use crate::metrics::{ArcCacheMetrics, CacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// An Adaptive Replacement Cache (ARC).
///
/// See the module documentation for the algorithm. Needs only a capacity: ARC tunes
/// its own internal split, unlike [`crate::twoq::TwoQCache`], which needs ratios.
pub struct ArcCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    /// Adaptive target size for T1, in `[0, capacity]`.
    p: usize,
    t1: LruCache<K, V, S>,
    b1: LruCache<K, (), S>,
    t2: LruCache<K, V, S>,
    b2: LruCache<K, (), S>,
    metrics: ArcCacheMetrics,
}

impl<K, V, S> core::fmt::Debug for ArcCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArcCache")
            .field("capacity", &self.capacity)
            .field("p", &self.p)
            .field("t1_len", &self.t1.len())
            .field("t2_len", &self.t2.len())
            .field("b1_len", &self.b1.len())
            .field("b2_len", &self.b2.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V> ArcCache<K, V> {
    /// Creates a new ARC cache with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> ArcCache<K, V, DefaultHashBuilder> {
        ArcCache::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new ARC cache from an [`ArcCacheConfig`].
    pub fn from_config(config: ArcCacheConfig) -> ArcCache<K, V, DefaultHashBuilder> {
        ArcCache::new(config.capacity())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher + Clone> ArcCache<K, V, S> {
    /// Creates a new ARC cache with a custom hasher.
    ///
    /// All four internal lists (T1, T2, B1, B2) sit at the outer `capacity`, per
    /// `original_source/arc/arc.go`'s `NewARC`, so no internal `Add` can ever fail.
    pub fn with_hasher(capacity: NonZeroUsize, hash_builder: S) -> Self {
        ArcCache {
            capacity,
            p: 0,
            t1: LruCache::with_hasher(capacity, hash_builder.clone()),
            b1: LruCache::with_hasher(capacity, hash_builder.clone()),
            t2: LruCache::with_hasher(capacity, hash_builder.clone()),
            b2: LruCache::with_hasher(capacity, hash_builder),
            metrics: ArcCacheMetrics::new(capacity.get() as u64),
        }
    }

    /// Returns the cache's capacity (`|T1| + |T2|` at steady state).
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns `|T1| + |T2|`. Ghost lists are not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    /// Returns `true` if the cache holds no resident entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current value of the adaptive target size for T1.
    #[inline]
    pub fn target_p(&self) -> usize {
        self.p
    }

    /// Returns `true` if `key` is resident in T1 or T2. Ghost membership doesn't count:
    /// a ghost hit is a capacity-adaptation signal, not a cache hit.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.t1.contains(key) || self.t2.contains(key)
    }

    /// Retrieves a value, promoting a T1 hit to T2.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if let Some((k, v)) = self.t1.remove_entry(key) {
            self.t2.put(k.clone(), v);
            return self.t2.get(&k);
        }
        if self.t2.contains(key) {
            return self.t2.get(key);
        }
        self.metrics.core.record_miss(1);
        None
    }

    /// Demotes one live entry to its ghost list, per the ARC paper's `REPLACE`.
    fn replace(&mut self, in_b2: bool) {
        let t1_len = self.t1.len();
        if t1_len > 0 && (t1_len > self.p || (t1_len == self.p && in_b2)) {
            if let Some((key, _)) = self.t1.remove_oldest() {
                self.b1.put(key, ());
            }
        } else if let Some((key, _)) = self.t2.remove_oldest() {
            self.b2.put(key, ());
        }
    }

    /// Inserts a key-value pair, running the five-case ARC `Add` state machine.
    pub fn put(&mut self, key: K, value: V) {
        let size = self.capacity.get();

        // Case 1: resident in T1 -> promote to T2.
        if self.t1.remove(&key) {
            self.t2.put(key, value);
            return;
        }

        // Case 2: resident in T2 -> touch (overwrite + MRU bump).
        if self.t2.contains(&key) {
            self.t2.put(key, value);
            return;
        }

        // Case 3: ghost hit in B1 -> grow p, possibly replace, promote to T2.
        if self.b1.contains(&key) {
            let delta = core::cmp::max(1, self.b2.len() / self.b1.len().max(1));
            self.p = core::cmp::min(size, self.p + delta);
            if self.t1.len() + self.t2.len() >= size {
                self.replace(false);
            }
            self.b1.remove(&key);
            self.t2.put(key, value);
            return;
        }

        // Case 4: ghost hit in B2 -> shrink p, possibly replace, promote to T2.
        if self.b2.contains(&key) {
            let delta = core::cmp::max(1, self.b1.len() / self.b2.len().max(1));
            self.p = self.p.saturating_sub(delta);
            if self.t1.len() + self.t2.len() >= size {
                self.replace(true);
            }
            self.b2.remove(&key);
            self.t2.put(key, value);
            return;
        }

        // Case 5: fresh key -> trim ghosts, insert into T1.
        if self.t1.len() + self.t2.len() >= size {
            self.replace(false);
        }
        if self.b1.len() > size.saturating_sub(self.p) {
            self.b1.remove_oldest();
        }
        if self.b2.len() > self.p {
            self.b2.remove_oldest();
        }
        self.t1.put(key, value);
    }

    /// Removes `key` from whichever of T1/T2/B1/B2 holds it. Ghost removal does not
    /// touch `p`.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.t1.remove(key) || self.t2.remove(key) || self.b1.remove(key) || self.b2.remove(key)
    }

    /// Returns keys T2-then-T1 (frequent before recent), oldest-to-newest within each.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = self.t2.keys();
        keys.extend(self.t1.keys());
        keys
    }

    /// Clears T1, T2, B1, B2 and resets `p` to `0`.
    pub fn purge(&mut self) {
        self.t1.purge();
        self.t2.purge();
        self.b1.purge();
        self.b2.purge();
        self.p = 0;
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher + Clone> CacheMetrics for ArcCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut m = self.metrics.clone();
        m.target_p = self.p as u64;
        m.t1_len = self.t1.len() as u64;
        m.t2_len = self.t2.len() as u64;
        m.b1_len = self.b1.len() as u64;
        m.b2_len = self.b2.len() as u64;
        m.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_basic_get_put() {
        let mut cache = ArcCache::new(NonZeroUsize::new(4).unwrap());
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), None);
    }

    #[test]
    fn test_arc_fresh_keys_land_in_t1() {
        let cache = ArcCache::<&str, i32>::new(NonZeroUsize::new(4).unwrap());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.target_p(), 0);
    }

    #[test]
    fn test_arc_t1_promotion_to_t2() {
        let mut cache = ArcCache::new(NonZeroUsize::new(4).unwrap());
        cache.put("a", 1);
        assert!(cache.contains(&"a"));
        // Re-adding (Case 1) should promote "a" out of T1 into T2.
        cache.put("a", 2);
        assert_eq!(cache.get(&"a"), Some(&2));
    }

    #[test]
    fn test_arc_ghost_hit_adapts_p() {
        let mut cache = ArcCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3); // evicts oldest T1 entry into B1
        assert!(cache.b1.len() >= 1);
        let p_before = cache.target_p();
        // Re-adding an evicted key while it's a B1 ghost should grow p (Case 3).
        cache.put("a", 10);
        assert!(cache.target_p() >= p_before);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_arc_remove_and_purge() {
        let mut cache = ArcCache::new(NonZeroUsize::new(4).unwrap());
        cache.put("a", 1);
        cache.put("b", 2);
        assert!(cache.remove(&"a"));
        assert!(!cache.contains(&"a"));
        cache.purge();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.target_p(), 0);
    }

    #[test]
    fn test_arc_keys_frequent_then_recent() {
        let mut cache = ArcCache::new(NonZeroUsize::new(4).unwrap());
        cache.put("a", 1);
        cache.put("a", 10); // promotes "a" to T2
        cache.put("b", 2); // stays in T1
        assert_eq!(cache.keys(), alloc::vec!["a", "b"]);
    }

    #[test]
    fn test_arc_metrics_algorithm_name() {
        let cache = ArcCache::<i32, i32>::new(NonZeroUsize::new(4).unwrap());
        assert_eq!(cache.algorithm_name(), "ARC");
    }
}
