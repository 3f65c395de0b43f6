//! Thread-Safe Cache Wrappers
//!
//! Every cache in this crate is `!Sync` by construction: `get` reorders internal
//! lists, so even a "read" needs `&mut self`. This module wraps each cache behind a
//! single lock, rather than the sharded/striped locking scheme some concurrent cache
//! crates use, because a fixed-capacity LRU/LFU/ARC/2Q cache's hot path already
//! touches shared global state (the recency list, the frequency buckets, the `p`
//! split point) on every operation — sharding would only move the contention
//! around, not remove it, while adding a hash-to-shard indirection and breaking
//! exact global ordering guarantees (global LRU order, global `min_frequency`).
//!
//! Two lock types are used, chosen per cache:
//!
//! - [`parking_lot::RwLock`] for [`LockedLruCache`], [`LockedLfuCache`],
//!   [`LockedLfudaCache`], and [`LockedGdsfCache`]: each of these exposes at least one
//!   operation (`peek`, `contains_key`, `len`, `keys`) that genuinely does not mutate
//!   the cache, so read-only callers can share a guard.
//! - [`parking_lot::Mutex`] for [`LockedArcCache`] and [`LockedTwoQCache`]: nearly
//!   every public operation on these two mutates the adaptive split point or moves
//!   entries between lists, so a reader/writer split buys nothing but an extra atomic.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     LockedLruCache<K, V>                    │
//! │                                                              │
//! │   RwLock<LruCache<K, V>>                                     │
//! │   ┌────────────────────────────────────────────────────┐    │
//! │   │  .read()  → peek(), contains(), len(), keys()       │    │
//! │   │  .write() → get(), put(), remove(), purge()         │    │
//! │   └────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types here require the `concurrent` feature (pulls in `parking_lot`) and,
//! because they hand out values by clone rather than by guarded reference (a
//! reference into the guarded cache cannot outlive the guard in a way that is
//! useful to callers), require `V: Clone`.

extern crate alloc;

use crate::arc::ArcCache;
use crate::config::{
    ArcCacheConfig, GdsfCacheConfig, LfuCacheConfig, LfudaCacheConfig, LruCacheConfig,
    TwoQCacheConfig,
};
use crate::error::CacheError;
use crate::gdsf::GdsfCache;
use crate::lfu::LfuCache;
use crate::lfuda::LfudaCache;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use crate::twoq::TwoQCache;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::{Mutex, RwLock};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe [`LruCache`] behind a single [`parking_lot::RwLock`].
///
/// # Examples
///
/// ```
/// use cache_rs::locked::LockedLruCache;
/// use core::num::NonZeroUsize;
///
/// let cache = LockedLruCache::new(NonZeroUsize::new(2).unwrap());
/// cache.put("a", 1);
/// assert_eq!(cache.get(&"a"), Some(1));
/// assert_eq!(cache.peek(&"a"), Some(1));
/// ```
#[derive(Debug)]
pub struct LockedLruCache<K, V, S = DefaultHashBuilder> {
    inner: RwLock<LruCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedLruCache<K, V> {
    /// Creates a new locked LRU cache with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new locked LRU cache from an [`LruCacheConfig`].
    pub fn from_config(config: LruCacheConfig) -> Self {
        Self::new(config.capacity())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LockedLruCache<K, V, S> {
    /// Creates a new locked LRU cache with a custom hasher.
    pub fn with_hasher(capacity: NonZeroUsize, hash_builder: S) -> Self {
        Self {
            inner: RwLock::new(LruCache::with_hasher(capacity, hash_builder)),
        }
    }

    /// Returns the cache's capacity.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.read().cap()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a clone of the value for `key` without reordering it, taking only a
    /// shared guard.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().peek(key).cloned()
    }

    /// Returns `true` if `key` is resident, without reordering it.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().contains(key)
    }

    /// Returns resident keys, oldest to newest.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys()
    }

    /// Retrieves a clone of the value for `key`, promoting it to most-recently-used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().get(key).cloned()
    }

    /// Inserts `key`/`value`, evicting the least recently used entry if at capacity.
    /// Returns `true` if an entry was evicted.
    pub fn put(&self, key: K, value: V) -> bool {
        self.inner.write().put(key, value)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(key)
    }

    /// Removes every entry, firing any eviction callback for each.
    pub fn purge(&self) {
        self.inner.write().purge();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LockedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.read().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

/// A thread-safe [`LfuCache`] behind a single [`parking_lot::RwLock`].
#[derive(Debug)]
pub struct LockedLfuCache<K, V, S = DefaultHashBuilder> {
    inner: RwLock<LfuCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedLfuCache<K, V> {
    /// Creates a new locked LFU cache with the given entry-count capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: RwLock::new(LfuCache::new(capacity)),
        }
    }

    /// Creates a new locked LFU cache from an [`LfuCacheConfig`].
    pub fn from_config(config: LfuCacheConfig) -> Self {
        Self::new(config.capacity())
    }

    /// Creates a new locked LFU cache limited only by total byte size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            inner: RwLock::new(LfuCache::with_max_size(max_size)),
        }
    }

    /// Creates a new locked LFU cache limited by both entry count and byte size.
    pub fn with_limits(capacity: NonZeroUsize, max_size: u64) -> Self {
        Self {
            inner: RwLock::new(LfuCache::with_limits(capacity, max_size)),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LockedLfuCache<K, V, S> {
    /// Returns the cache's entry-count capacity.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.read().cap()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the current total byte size of cached content.
    pub fn current_size(&self) -> u64 {
        self.inner.read().current_size()
    }

    /// Returns the maximum total byte size the cache can hold.
    pub fn max_size(&self) -> u64 {
        self.inner.read().max_size()
    }

    /// Retrieves a clone of the value for `key`, incrementing its frequency.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().get(key).cloned()
    }

    /// Records a miss for metrics purposes without inserting anything.
    pub fn record_miss(&self, object_size: u64) {
        self.inner.write().record_miss(object_size);
    }

    /// Inserts `key`/`value` at unit size, evicting the least frequently used entry
    /// if at capacity. Returns the evicted pair, if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.write().put(key, value)
    }

    /// Inserts `key`/`value` with an explicit byte size.
    pub fn put_with_size(&self, key: K, value: V, size: u64) -> Option<(K, V)> {
        self.inner.write().put_with_size(key, value, size)
    }

    /// Removes `key`, returning its value if present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LockedLfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.read().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.inner.read().algorithm_name()
    }
}

/// A thread-safe [`LfudaCache`] behind a single [`parking_lot::RwLock`].
#[derive(Debug)]
pub struct LockedLfudaCache<K, V, S = DefaultHashBuilder> {
    inner: RwLock<LfudaCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedLfudaCache<K, V> {
    /// Creates a new locked LFUDA cache with the given entry-count capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: RwLock::new(LfudaCache::new(capacity)),
        }
    }

    /// Creates a new locked LFUDA cache from an [`LfudaCacheConfig`].
    pub fn from_config(config: LfudaCacheConfig) -> Self {
        Self::new(config.capacity())
    }

    /// Creates a new locked LFUDA cache limited only by total byte size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            inner: RwLock::new(LfudaCache::with_max_size(max_size)),
        }
    }

    /// Creates a new locked LFUDA cache limited by both entry count and byte size.
    pub fn with_limits(capacity: NonZeroUsize, max_size: u64) -> Self {
        Self {
            inner: RwLock::new(LfudaCache::with_limits(capacity, max_size)),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LockedLfudaCache<K, V, S> {
    /// Returns the cache's entry-count capacity.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.read().cap()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the current total byte size of cached content.
    pub fn current_size(&self) -> u64 {
        self.inner.read().current_size()
    }

    /// Returns the maximum total byte size the cache can hold.
    pub fn max_size(&self) -> u64 {
        self.inner.read().max_size()
    }

    /// Returns the current global age, which rises monotonically as entries evict.
    pub fn global_age(&self) -> u64 {
        self.inner.read().global_age()
    }

    /// Retrieves a clone of the value for `key`, incrementing its frequency against
    /// the cache's current global age.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().get(key).cloned()
    }

    /// Records a miss for metrics purposes without inserting anything.
    pub fn record_miss(&self, object_size: u64) {
        self.inner.write().record_miss(object_size);
    }

    /// Inserts `key`/`value` at unit size. Returns the evicted pair, if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.write().put(key, value)
    }

    /// Inserts `key`/`value` with an explicit byte size.
    pub fn put_with_size(&self, key: K, value: V, size: u64) -> Option<(K, V)> {
        self.inner.write().put_with_size(key, value, size)
    }

    /// Removes `key`, returning its value if present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().remove(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LockedLfudaCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.read().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.inner.read().algorithm_name()
    }
}

/// A thread-safe [`GdsfCache`] behind a single [`parking_lot::RwLock`].
#[derive(Debug)]
pub struct LockedGdsfCache<K, V, S = DefaultHashBuilder> {
    inner: RwLock<GdsfCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedGdsfCache<K, V> {
    /// Creates a new locked GDSF cache with the given entry-count capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: RwLock::new(GdsfCache::new(capacity)),
        }
    }

    /// Creates a new locked GDSF cache from a [`GdsfCacheConfig`].
    pub fn from_config(config: GdsfCacheConfig) -> Self {
        Self {
            inner: RwLock::new(GdsfCache::from_config(config)),
        }
    }

    /// Creates a new locked GDSF cache limited only by total byte size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            inner: RwLock::new(GdsfCache::with_max_size(max_size)),
        }
    }

    /// Creates a new locked GDSF cache limited by both entry count and byte size.
    pub fn with_limits(capacity: NonZeroUsize, max_size: u64) -> Self {
        Self {
            inner: RwLock::new(GdsfCache::with_limits(capacity, max_size)),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LockedGdsfCache<K, V, S> {
    /// Returns the cache's entry-count capacity.
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.read().cap()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the current total byte size of cached content.
    pub fn current_size(&self) -> u64 {
        self.inner.read().current_size()
    }

    /// Returns the maximum total byte size the cache can hold.
    pub fn max_size(&self) -> u64 {
        self.inner.read().max_size()
    }

    /// Returns the current global age, which rises monotonically as entries evict.
    pub fn global_age(&self) -> f64 {
        self.inner.read().global_age()
    }

    /// Returns `true` if `key` is resident, without reordering it.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read().contains_key(key)
    }

    /// Records a miss for metrics purposes without inserting anything.
    pub fn record_miss(&self, object_size: u64) {
        self.inner.write().record_miss(object_size);
    }

    /// Retrieves a clone of the value for `key`, recomputing its priority against the
    /// cache's current global age.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().get(key)
    }

    /// Inserts `key`/`value` with `size`, evicting lowest-priority entries as needed.
    pub fn put(&self, key: K, value: V, size: u64) -> Option<V> {
        self.inner.write().put(key, value, size)
    }

    /// Removes `key`, returning its value if present.
    pub fn pop<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.write().pop(key)
    }

    /// Removes every entry and resets the global age.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LockedGdsfCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.read().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.inner.read().algorithm_name()
    }
}

/// A thread-safe [`ArcCache`] behind a single [`parking_lot::Mutex`].
///
/// Unlike the LRU/LFU-family wrappers, ARC gets no `RwLock` split: essentially every
/// public operation (`get`, `put`, even `contains` racing against a concurrent `get`
/// that moves entries between T1/T2) touches the adaptive split point `p` or moves
/// entries between lists, so there is no meaningfully read-only surface to share.
#[derive(Debug)]
pub struct LockedArcCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<ArcCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedArcCache<K, V> {
    /// Creates a new locked ARC cache with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(ArcCache::new(capacity)),
        }
    }

    /// Creates a new locked ARC cache from an [`ArcCacheConfig`].
    pub fn from_config(config: ArcCacheConfig) -> Self {
        Self::new(config.capacity())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> LockedArcCache<K, V, S> {
    /// Creates a new locked ARC cache with a custom hasher.
    pub fn with_hasher(capacity: NonZeroUsize, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(ArcCache::with_hasher(capacity, hash_builder)),
        }
    }

    /// Returns the cache's capacity (`|T1| + |T2|` at steady state).
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.lock().cap()
    }

    /// Returns `|T1| + |T2|`. Ghost lists are not counted.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no resident entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns `true` if `key` is resident in T1 or T2. Ghost entries don't count.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Retrieves a clone of the value for `key`, promoting a T1 hit into T2.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Inserts `key`/`value`, running the five-case ARC state machine.
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Removes `key` from whichever of T1/T2/B1/B2 holds it.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Returns resident keys, frequent (T2) before recent (T1).
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    /// Clears all four internal lists and resets the adaptive split point.
    pub fn purge(&self) {
        self.inner.lock().purge();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CacheMetrics
    for LockedArcCache<K, V, S>
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}

/// A thread-safe [`TwoQCache`] behind a single [`parking_lot::Mutex`].
///
/// Same reasoning as [`LockedArcCache`]: `get` can promote an A1in hit into Am, so
/// there is no operation that is safely shareable under a read guard.
#[derive(Debug)]
pub struct LockedTwoQCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<TwoQCache<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LockedTwoQCache<K, V> {
    /// Creates a new locked 2Q cache with the default ratios.
    pub fn new(capacity: NonZeroUsize) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TwoQCache::new(capacity)?),
        })
    }

    /// Creates a new locked 2Q cache from a [`TwoQCacheConfig`].
    pub fn from_config(config: TwoQCacheConfig) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TwoQCache::from_config(config)?),
        })
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> LockedTwoQCache<K, V, S> {
    /// Creates a new locked 2Q cache from a config with a custom hasher.
    pub fn with_hasher(config: TwoQCacheConfig, hash_builder: S) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TwoQCache::with_hasher(config, hash_builder)?),
        })
    }

    /// Returns the total capacity (`Am + A1in`).
    pub fn cap(&self) -> NonZeroUsize {
        self.inner.lock().cap()
    }

    /// Returns `|Am| + |A1in|`. Ghosts in A1out are not counted.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no resident entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns `true` if `key` is present in Am, A1in, or as a ghost in A1out.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Retrieves a clone of the value, promoting a resident A1in hit to Am.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Inserts `key`/`value`, routing it through Am/A1in/A1out per the 2Q Add rule.
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Removes `key`, trying Am, then A1in, then A1out in turn.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Returns keys frequent-then-recent, oldest-to-newest within each list.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    /// Clears Am, A1in, and A1out.
    pub fn purge(&self) {
        self.inner.lock().purge();
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CacheMetrics
    for LockedTwoQCache<K, V, S>
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "2Q"
    }
}
