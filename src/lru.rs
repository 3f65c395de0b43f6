//! Least Recently Used (LRU) Cache Implementation
//!
//! An LRU cache evicts the least recently accessed item when capacity is reached.
//! This implementation provides O(1) time complexity for all operations using a
//! hash map combined with a doubly-linked list.
//!
//! # How the Algorithm Works
//!
//! The LRU algorithm is based on the principle of **temporal locality**: items accessed
//! recently are likely to be accessed again soon. The cache maintains items ordered by
//! their last access time.
//!
//! ## Data Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        LRU Cache                                │
//! │                                                                 │
//! │  HashMap<K, *Node>          Doubly-Linked List                  │
//! │  ┌──────────────┐          ┌──────────────────────────────┐    │
//! │  │ "apple" ──────────────▶ │ MRU ◀──▶ ... ◀──▶ LRU       │    │
//! │  │ "banana" ─────────────▶ │  ▲                    │      │    │
//! │  │ "cherry" ─────────────▶ │  │                    ▼      │    │
//! │  └──────────────┘          │ head              tail       │    │
//! │                            └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **HashMap**: Provides O(1) key lookup, storing pointers to list nodes
//! - **Doubly-Linked List**: Maintains access order (most recent at head, least recent at tail)
//!
//! ## Operations
//!
//! | Operation | Action | Time |
//! |-----------|--------|------|
//! | `get(key)` | Move accessed node to head (MRU position) | O(1) |
//! | `put(key, value)` | Insert at head, evict from tail if full | O(1) |
//! | `remove(key)` | Unlink node from list, remove from map | O(1) |
//! | `remove_oldest()` | Pop the tail | O(1) |
//! | `keys()` | Collect keys oldest→newest | O(n) |
//! | `purge()` | Drop everything, firing the eviction callback each time | O(n) |
//!
//! This is the "ordered-set primitive" that [`crate::arc::ArcCache`] and
//! [`crate::twoq::TwoQCache`] compose directly: both are built from several
//! `LruCache` instances (value-carrying for live lists, `LruCache<K, (), S>` for
//! ghost lists) rather than a bespoke recency structure each.
//!
//! # Eviction Callback
//!
//! An optional `FnMut(&K, &V)` callback, set with [`LruCache::with_on_evict`], fires
//! synchronously for every entry that leaves the cache via [`LruCache::remove`],
//! [`LruCache::remove_oldest`], [`LruCache::purge`], or capacity-driven eviction inside
//! [`LruCache::put`]. It runs exactly once per departing entry, while any external guard
//! (see [`crate::locked::LockedLruCache`]) is still held.
//!
//! # Thread Safety
//!
//! `LruCache` is **not thread-safe**. For concurrent access, either wrap it yourself or
//! use [`crate::locked::LockedLruCache`] (requires the `concurrent` feature).
//!
//! # Examples
//!
//! ```
//! use cache_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"a"), Some(&1));  // "a" is now MRU
//!
//! cache.put("d", 4);  // Evicts "b" (LRU)
//! assert_eq!(cache.get(&"b"), None);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::list::{Entry as ListNode, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Payload stored in each list node: just the key and value, no per-entry
/// byte-size or timestamp bookkeeping. That apparatus lives in the LFU-core
/// instead (see [`crate::lfu`]), which is the only algorithm family that
/// actually needs byte accounting.
struct Node<K, V> {
    key: K,
    value: V,
}

/// A Least Recently Used (LRU) cache with O(1) operations.
///
/// Maintains items in order of access recency. When capacity is reached,
/// the least recently accessed item is evicted to make room for new entries.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq`. Mutation operations also need `Clone`.
/// - `V`: Value type. Ghost lists (no stored payload) use `V = ()`.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Safety
///
/// This struct contains raw pointers in the `map` field. These pointers are always
/// valid as long as the referenced node has not been removed from `list` and the
/// cache itself has not been dropped.
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    list: List<Node<K, V>>,
    map: HashMap<K, *mut ListNode<Node<K, V>>, S>,
    metrics: LruCacheMetrics,
    on_evict: Option<Box<dyn FnMut(&K, &V) + Send>>,
}

// SAFETY: LruCache owns all data; raw pointers point only at nodes owned by `list`.
unsafe impl<K: Send, V: Send, S: Send> Send for LruCache<K, V, S> {}
// SAFETY: all mutation requires `&mut self`; shared references cannot race.
unsafe impl<K: Send, V: Send, S: Sync> Sync for LruCache<K, V, S> {}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache with the given capacity.
    ///
    /// Capacity is `NonZeroUsize`, so there is no `InvalidSize` runtime branch here:
    /// a zero-sized cache simply cannot be named.
    pub fn new(capacity: NonZeroUsize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a [`LruCacheConfig`].
    pub fn from_config(config: LruCacheConfig) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::new(config.capacity())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with a custom hasher.
    pub fn with_hasher(capacity: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = capacity.get().next_power_of_two();
        LruCache {
            capacity,
            list: List::new(capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LruCacheMetrics::new(capacity.get() as u64),
            on_evict: None,
        }
    }

    /// Attaches an eviction callback, invoked synchronously once per departing entry.
    ///
    /// Grounded in `original_source/lru/simple.go`'s `EvictCallback` field.
    pub fn with_on_evict<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.on_evict = Some(Box::new(callback));
        self
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the current number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Retrieves a reference to the value for the given key, moving it to the MRU position.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        unsafe {
            // SAFETY: node comes from our map.
            self.list.move_to_front(node);
            let entry = (*node).get_value();
            self.metrics.core.record_hit(1);
            Some(&entry.value)
        }
    }

    /// Retrieves a mutable reference to the value for the given key, moving it to the MRU position.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        unsafe {
            // SAFETY: node comes from our map.
            self.list.move_to_front(node);
            let entry = (*node).get_value_mut();
            self.metrics.core.record_hit(1);
            Some(&mut entry.value)
        }
    }

    /// Returns a reference to the value for the given key without reordering.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        // SAFETY: node comes from our map.
        unsafe { Some(&(*node).get_value().value) }
    }

    /// Returns `true` if `key` is present, without reordering or firing the eviction callback.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the oldest (least-recently-used) entry without removing it, in O(1).
    pub fn get_oldest(&self) -> Option<(&K, &V)> {
        self.list.back().map(|node| (&node.key, &node.value))
    }

    /// Records a cache miss for metrics tracking (call sites that fetch from a backing store on miss).
    #[inline]
    pub fn record_miss(&mut self, object_size: u64) {
        self.metrics.core.record_miss(object_size);
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let boxed = self.list.remove_last()?;
        // SAFETY: remove_last only ever hands back non-sigil nodes.
        let Node { key, value } = unsafe { (*boxed).into_value() };
        self.map.remove(&key);
        self.metrics.core.record_eviction(1);
        if let Some(cb) = self.on_evict.as_mut() {
            cb(&key, &value);
        }
        Some((key, value))
    }

    /// Removes and returns the oldest entry, firing the eviction callback.
    #[inline]
    pub fn remove_oldest(&mut self) -> Option<(K, V)> {
        self.evict_one()
    }

    /// Returns the keys currently resident, in oldest-to-newest order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys: Vec<K> = self.list.iter().map(|node| node.key.clone()).collect();
        keys.reverse();
        keys
    }

    /// Removes all entries, firing the eviction callback once per prior resident.
    pub fn purge(&mut self) {
        let evicted = self.map.len() as u64;
        if let Some(cb) = self.on_evict.as_mut() {
            for node in self.list.iter() {
                cb(&node.key, &node.value);
            }
        }
        self.metrics.core.evictions += evicted;
        self.metrics.core.cache_size_bytes = 0;
        self.map.clear();
        self.list.clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key already exists, the value is overwritten in place and the entry
    /// moves to the MRU position. Otherwise a new entry is inserted at the front,
    /// evicting the LRU entry first if the cache is at capacity.
    ///
    /// Returns `true` if an existing resident was evicted to make room.
    pub fn put(&mut self, key: K, value: V) -> bool {
        if let Some(&node) = self.map.get(&key) {
            unsafe {
                // SAFETY: node comes from our map.
                self.list.move_to_front(node);
                (*node).get_value_mut().value = value;
            }
            return false;
        }

        let mut evicted = false;
        while self.map.len() >= self.capacity.get() {
            if self.evict_one().is_none() {
                break;
            }
            evicted = true;
        }

        let node = Node {
            key: key.clone(),
            value,
        };
        if let Some(ptr) = self.list.add(node) {
            self.map.insert(key, ptr);
            self.metrics.core.record_insertion(1);
        }
        evicted
    }

    /// Removes a key from the cache, firing the eviction callback if it was present.
    ///
    /// Returns `true` if the key was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes a key from the cache, returning its value if it was present.
    ///
    /// Fires the eviction callback. Used by composite caches ([`crate::arc::ArcCache`],
    /// [`crate::twoq::TwoQCache`]) to carry a value across from one internal list to
    /// another without requiring `V: Clone`.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        // SAFETY: node comes from our map, so it is a live, valid entry in `self.list`.
        let boxed = (unsafe { self.list.remove(node) })?;
        let Node { key, value } = unsafe { (*boxed).into_value() };
        self.metrics.core.record_eviction(1);
        if let Some(cb) = self.on_evict.as_mut() {
            cb(&key, &value);
        }
        Some((key, value))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}
