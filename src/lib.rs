#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and API references for each cache algorithm.
//!
//! ## Algorithm Selection Guide
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                    Which Cache Algorithm Should I Use?                       │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │                                                                              │
//! │  Is your workload primarily...                                               │
//! │                                                                              │
//! │  ┌─────────────────┐                                                         │
//! │  │ Recency-based?  │──Yes──▶ Worried about scans or one-hit wonders?        │
//! │  │ (recent = hot)  │              │                                          │
//! │  └────────┬────────┘         Yes  │  No                                      │
//! │           │                   │   │                                          │
//! │          No                   ▼   ▼                                          │
//! │           │               ┌──────────┐  ┌──────────┐                         │
//! │           │               │  2Q/ARC  │  │   LRU    │                         │
//! │           ▼               └──────────┘  └──────────┘                         │
//! │  ┌─────────────────┐                                                         │
//! │  │ Frequency-based?│──Yes──▶ Does popularity change over time?              │
//! │  │ (popular = hot) │              │                                          │
//! │  └────────┬────────┘         Yes  │  No                                      │
//! │           │                   │   │                                          │
//! │          No                   ▼   ▼                                          │
//! │           │               ┌──────────┐  ┌──────────┐                         │
//! │           │               │  LFUDA   │  │   LFU    │                         │
//! │           ▼               └──────────┘  └──────────┘                         │
//! │  ┌─────────────────┐                                                         │
//! │  │ Variable-sized  │──Yes──▶ ┌──────────┐                                   │
//! │  │    objects?     │         │   GDSF   │                                    │
//! │  └─────────────────┘         └──────────┘                                    │
//! │                                                                              │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Algorithm | Description | Best Use Case |
//! |-----------|-------------|---------------|
//! | [`LruCache`] | Least Recently Used | General purpose, recency-based access |
//! | [`TwoQCache`] | Two-Queue | Mixed workloads with scans |
//! | [`ArcCache`] | Adaptive Replacement Cache | Recency/frequency mix, no tuning needed |
//! | [`LfuCache`] | Least Frequently Used | Stable popularity patterns |
//! | [`LfudaCache`] | LFU with Dynamic Aging | Long-running, evolving popularity |
//! | [`GdsfCache`] | Greedy Dual Size Frequency | CDNs, variable-sized objects |
//!
//! ## Performance Characteristics
//!
//! | Algorithm | Get | Put | Remove | Memory/Entry | Scan Resist | Adapts |
//! |-----------|-----|-----|--------|--------------|-------------|--------|
//! | LRU       | O(1)| O(1)| O(1)   | ~80 bytes    | Poor        | N/A    |
//! | 2Q        | O(1)| O(1)| O(1)   | ~90 bytes    | Good        | No     |
//! | ARC       | O(1)| O(1)| O(1)   | ~100 bytes   | Good        | Yes    |
//! | LFU       | O(1)| O(1)| O(1)   | ~100 bytes   | Excellent   | No     |
//! | LFUDA     | O(1)| O(1)| O(1)   | ~110 bytes   | Excellent   | Yes    |
//! | GDSF      | O(1)| O(1)| O(1)   | ~120 bytes   | Good        | Yes    |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! Evicts the item that hasn't been accessed for the longest time. Simple and effective
//! for workloads with temporal locality.
//!
//! ```rust
//! use cache_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### 2Q (Two-Queue)
//!
//! Separates once-seen entries from re-seen entries, so a burst of one-shot reads
//! (a scan) cannot evict the working set. Needs tuning two ratios if the defaults
//! (`0.25` recent, `0.50` ghost) don't fit the workload.
//!
//! ```rust
//! use cache_rs::TwoQCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = TwoQCache::new(NonZeroUsize::new(100).unwrap()).unwrap();
//!
//! cache.put("hot", 1);
//! cache.get(&"hot");  // Promoted out of the one-hit queue into the frequent one.
//! ```
//!
//! ### ARC (Adaptive Replacement Cache)
//!
//! Tracks both recency and frequency, and self-tunes the balance between them — no
//! ratios to pick, unlike 2Q.
//!
//! ```rust
//! use cache_rs::ArcCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = ArcCache::new(NonZeroUsize::new(100).unwrap());
//!
//! cache.put("hot", 1);
//! cache.get(&"hot");
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! Tracks access frequency and evicts the least frequently accessed item.
//! Great for workloads with stable popularity patterns.
//!
//! ```rust
//! use cache_rs::LfuCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LfuCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! // Access "popular" multiple times
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.put("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! ```
//!
//! ### LFUDA (LFU with Dynamic Aging)
//!
//! Addresses LFU's "cache pollution" problem by incorporating aging. Old popular
//! items gradually lose priority, allowing new items to compete fairly.
//!
//! ```rust
//! use cache_rs::LfudaCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LfudaCache::new(NonZeroUsize::new(100).unwrap());
//!
//! // Old popular items will eventually age out if not accessed
//! for i in 0..100 {
//!     cache.put(i, i);
//! }
//! ```
//!
//! ### GDSF (Greedy Dual-Size Frequency)
//!
//! Combines frequency, size, and aging. Priority = (Frequency / Size) + Age.
//! Ideal for caching variable-sized objects like images or API responses.
//!
//! ```rust
//! use cache_rs::GdsfCache;
//! use cache_rs::config::GdsfCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = GdsfCacheConfig::new(NonZeroUsize::new(1000).unwrap())
//!     .with_max_size(10 * 1024 * 1024); // 10MB
//! let mut cache: GdsfCache<String, Vec<u8>> = GdsfCache::from_config(config);
//!
//! // Size-aware insertion
//! cache.put("small.txt".to_string(), vec![0u8; 100], 100);
//! cache.put("large.bin".to_string(), vec![0u8; 10000], 10000);
//! // Small items get higher priority per byte
//! ```
//!
//! ## Thread-Safe Caches
//!
//! Enable the `concurrent` feature for single-guard, thread-safe wrappers:
//!
//! ```toml
//! [dependencies]
//! recency-cache = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use cache_rs::locked::LockedLruCache;
//! use std::sync::Arc;
//! use core::num::NonZeroUsize;
//!
//! let cache = Arc::new(LockedLruCache::new(NonZeroUsize::new(10_000).unwrap()));
//!
//! // Safe to share across threads
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! });
//! ```
//!
//! Each `Locked*` wrapper holds a single `parking_lot` guard (`RwLock` for read-heavy
//! caches like LRU/LFU-family, `Mutex` where every operation mutates shared state like
//! ARC/2Q) around the underlying cache, rather than sharding it across segments:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                   LockedLruCache<K, V, S>                         │
//! │                                                                    │
//! │                  ┌───────────────────────────┐                    │
//! │                  │   RwLock<LruCache<K,V,S>> │                    │
//! │                  └───────────────────────────┘                    │
//! │                               ▲                                   │
//! │                   every thread's get/put serializes here          │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation, the ordered-set primitive
//!   [`arc`] and [`twoq`] are composed from
//! - [`arc`]: Adaptive Replacement Cache implementation
//! - [`twoq`]: Two-Queue cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation
//! - [`lfuda`]: LFU with Dynamic Aging cache implementation
//! - [`gdsf`]: Greedy Dual Size Frequency cache implementation
//! - [`config`]: Configuration structures for all cache algorithms
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`error`]: Error types for fallible cache constructors
//! - [`locked`]: Thread-safe single-guard cache wrappers (requires `concurrent` feature)

#![no_std]

#[cfg(test)]
extern crate scoped_threadpool;

/// Unified cache entry type.
///
/// Provides a generic `CacheEntry<K, V, M>` structure that holds key, value,
/// timestamps, and algorithm-specific metadata. This is the foundation for
/// the dual-limit capacity management system.
pub mod entry;

/// Algorithm-specific metadata types.
///
/// Provides metadata structures for each cache algorithm:
/// - `LfuMeta`: Frequency counter for LFU
/// - `LfudaMeta`: Frequency for LFUDA (age is cache-global)
/// - `GdsfMeta`: Frequency and priority for GDSF
pub mod meta;

/// Error types for fallible cache constructors.
pub mod error;

/// Doubly linked list implementation with in-place editing capabilities.
///
/// This module provides a memory-efficient doubly linked list that allows for
/// efficient insertion, removal, and reordering operations.
///
/// **Note**: This module is internal infrastructure and should not be used directly
/// by library consumers. It exposes unsafe raw pointer operations that require
/// careful invariant maintenance. Use the high-level cache implementations instead.
pub(crate) mod list;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache algorithm implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Adaptive Replacement Cache (ARC) implementation.
///
/// Tracks recency and frequency simultaneously via four internal lists
/// (T1/T2 resident, B1/B2 ghost) with a self-tuning split point.
pub mod arc;

/// 2Q (Two-Queue) cache implementation.
///
/// Separates once-seen entries from re-seen entries so a scan cannot evict
/// the frequently-accessed working set.
pub mod twoq;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached. Items are tracked by their access frequency.
pub mod lfu;

/// Least Frequently Used with Dynamic Aging (LFUDA) cache implementation.
///
/// An enhanced LFU cache that addresses the aging problem by dynamically
/// adjusting item priorities based on a global aging factor.
pub mod lfuda;

/// Greedy Dual-Size Frequency (GDSF) cache implementation.
///
/// A cache replacement algorithm that combines frequency, size, and aging.
/// Assigns priority based on (Frequency / Size) + Global_Age formula.
pub mod gdsf;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all cache algorithms.
/// Each algorithm can track algorithm-specific metrics while implementing a common interface.
pub mod metrics;

/// Thread-safe single-guard cache wrappers.
///
/// Wraps each cache behind one `parking_lot` lock (a `RwLock` where a genuinely
/// read-only operation exists, a `Mutex` otherwise) rather than the sharded,
/// per-segment locking scheme some concurrent cache crates use.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod locked;

// Re-export cache types
pub use arc::ArcCache;
pub use gdsf::GdsfCache;
pub use lfu::LfuCache;
pub use lfuda::LfudaCache;
pub use lru::LruCache;
pub use twoq::TwoQCache;

// Re-export entry type
pub use entry::CacheEntry;

// Re-export metadata types
pub use meta::{GdsfMeta, LfuMeta, LfudaMeta};

// Re-export error type
pub use error::CacheError;

#[cfg(feature = "concurrent")]
pub use locked::{
    LockedArcCache, LockedGdsfCache, LockedLfuCache, LockedLfudaCache, LockedLruCache,
    LockedTwoQCache,
};
