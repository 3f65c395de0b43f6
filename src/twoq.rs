//! 2Q (Two-Queue) Cache Implementation
//!
//! 2Q improves on plain LRU by separating entries that have been seen only once
//! from entries that have been seen more than once, so a burst of one-shot reads
//! (a scan) cannot evict the working set.
//!
//! # How the Algorithm Works
//!
//! Three lists are maintained:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         2Q Cache                                  │
//! │                                                                   │
//! │   A1in (recent, resident)   A1out (recent, ghost)   Am (frequent) │
//! │   ┌──────────────────┐      ┌──────────────────┐   ┌───────────┐  │
//! │   │ once-seen keys   │ ───▶ │ key only, no val │   │ re-seen   │  │
//! │   │ with values      │      │ (ghost)          │   │ keys      │  │
//! │   └──────────────────┘      └──────────────────┘   └───────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A fresh key lands in A1in. If it is evicted from A1in before being seen again,
//! its key (but not its value) moves to A1out as a ghost. A key that is re-observed
//! while still resident in A1in, or while still a ghost in A1out, graduates to Am
//! — the "frequent" list, which behaves like a plain LRU for already-promoted keys.
//!
//! Grounded in `original_source/two_queue/2q.go`'s `TwoQueueCache`, rebuilt on top of
//! the generic [`crate::lru::LruCache`] ordered-set primitive rather than a bespoke
//! recency structure for each of the three lists (A1out is `LruCache<K, (), S>`).
//!
//! # Thread Safety
//!
//! Not thread-safe. See [`crate::locked::LockedTwoQCache`] (requires the `concurrent` feature).
//!
//! # Examples
//!
//! ```
//! use cache_rs::TwoQCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = TwoQCache::new(NonZeroUsize::new(4).unwrap()).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! ```

extern crate alloc;

use crate::config::TwoQCacheConfig;
use crate::error::CacheError;
use crate::lru::LruCache;
use crate::metrics::{CacheMetrics, TwoQCacheMetrics};
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

/// A 2Q (Johnson/Shasha Two-Queue) cache.
///
/// See the module documentation for the algorithm. `V = ()` ghost-list sharing with
/// [`crate::arc::ArcCache`] is internal; callers interact with real key-value pairs.
pub struct TwoQCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    /// Target resident size for `a1in` (`recentSize` in the original).
    k_in: usize,
    am: LruCache<K, V, S>,
    a1in: LruCache<K, V, S>,
    a1out: LruCache<K, (), S>,
    metrics: TwoQCacheMetrics,
}

impl<K, V, S> core::fmt::Debug for TwoQCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TwoQCache")
            .field("capacity", &self.capacity)
            .field("am_len", &self.am.len())
            .field("a1in_len", &self.a1in.len())
            .field("a1out_len", &self.a1out.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V> TwoQCache<K, V> {
    /// Creates a new 2Q cache with the default ratios (`0.25` recent, `0.50` ghost).
    pub fn new(capacity: NonZeroUsize) -> Result<Self, CacheError> {
        Self::from_config(TwoQCacheConfig::new(capacity)?)
    }

    /// Creates a new 2Q cache from a [`TwoQCacheConfig`].
    pub fn from_config(config: TwoQCacheConfig) -> Result<Self, CacheError> {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher + Clone> TwoQCache<K, V, S> {
    /// Creates a new 2Q cache from a config with a custom hasher.
    ///
    /// All three internal lists sit at the outer `capacity`, save for the ghost list
    /// `a1out`, sized by `ratio_ghost`; this mirrors `New2QWithParams` in the original,
    /// where `recent`/`frequent` are each built with `size` and only `recentEvict` is
    /// scaled down.
    pub fn with_hasher(config: TwoQCacheConfig, hash_builder: S) -> Result<Self, CacheError> {
        let capacity = config.capacity();
        let k_in = (capacity.get() as f64 * config.ratio_recent()) as usize;
        let k_out = (capacity.get() as f64 * config.ratio_ghost()) as usize;
        let k_out = NonZeroUsize::new(k_out).unwrap_or(NonZeroUsize::new(1).unwrap());

        Ok(TwoQCache {
            capacity,
            k_in,
            am: LruCache::with_hasher(capacity, hash_builder.clone()),
            a1in: LruCache::with_hasher(capacity, hash_builder.clone()),
            a1out: LruCache::with_hasher(k_out, hash_builder),
            metrics: TwoQCacheMetrics::new(capacity.get() as u64),
        })
    }

    /// Returns the total capacity (`Am + A1in`).
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns `|Am| + |A1in|`. Ghosts in `A1out` are not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.am.len() + self.a1in.len()
    }

    /// Returns `true` if the cache holds no resident entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is present in Am, A1in, or as a ghost in A1out.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.am.contains(key) || self.a1in.contains(key) || self.a1out.contains(key)
    }

    /// Retrieves a value, promoting a resident A1in hit to Am.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.am.contains(key) {
            return self.am.get(key);
        }
        if self.a1in.peek(key).is_some() {
            let (k, v) = self.a1in.remove_entry(key)?;
            self.am.put(k.clone(), v);
            return self.am.get(&k);
        }
        self.metrics.core.record_miss(1);
        None
    }

    /// `ensureSpace` from the original: makes room for a new resident entry.
    ///
    /// `recent_evict` is `true` when the caller is about to promote a ghost hit, which
    /// changes the tie-breaking rule when `|A1in| == k_in`.
    fn ensure_space(&mut self, recent_evict: bool) {
        if self.a1in.len() + self.am.len() < self.capacity.get() {
            return;
        }
        if self.a1in.len() > 0
            && (self.a1in.len() > self.k_in || (self.a1in.len() == self.k_in && !recent_evict))
        {
            if let Some((key, _)) = self.a1in.remove_oldest() {
                self.a1out.put(key, ());
            }
            return;
        }
        self.am.remove_oldest();
    }

    /// Inserts a key-value pair, routing it through Am/A1in/A1out per the 2Q Add rule.
    pub fn put(&mut self, key: K, value: V) {
        if self.am.contains(&key) {
            self.am.put(key, value);
            return;
        }
        if self.a1in.contains(&key) {
            self.a1in.remove(&key);
            self.am.put(key, value);
            return;
        }
        if self.a1out.contains(&key) {
            self.ensure_space(true);
            self.a1out.remove(&key);
            self.am.put(key, value);
            return;
        }
        self.ensure_space(false);
        self.a1in.put(key, value);
    }

    /// Removes `key`, trying Am, then A1in, then A1out in turn.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.am.remove(key) {
            return true;
        }
        if self.a1in.remove(key) {
            return true;
        }
        self.a1out.remove(key)
    }

    /// Returns keys frequent-then-recent, oldest-to-newest within each list.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = self.am.keys();
        keys.extend(self.a1in.keys());
        keys
    }

    /// Clears Am, A1in, and A1out.
    pub fn purge(&mut self) {
        self.am.purge();
        self.a1in.purge();
        self.a1out.purge();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher + Clone> CacheMetrics for TwoQCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut m = self.metrics.clone();
        m.am_len = self.am.len() as u64;
        m.a1in_len = self.a1in.len() as u64;
        m.a1out_len = self.a1out.len() as u64;
        m.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "2Q"
    }
}
