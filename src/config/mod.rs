//! Cache Configuration Module
//!
//! This module provides configuration structures for all cache algorithm implementations.
//! Each cache type has its own dedicated configuration struct that encapsulates
//! algorithm-specific parameters.
//!
//! # Design Philosophy
//!
//! Each cache is created using its configuration struct as the **single entry point**.
//! This provides several benefits:
//!
//! - **Consistent API**: All caches are created the same way: `Cache::from_config(config)`
//! - **Builder pattern**: Optional parameters use fluent builder methods
//! - **Type safety**: All required parameters must be provided at construction
//! - **Extensible**: New parameters can be added without breaking existing code
//!
//! # Cache Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | [`LruCacheConfig`] | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | [`LfuCacheConfig`] | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | [`LfudaCacheConfig`] | [`LfudaCache`](crate::LfudaCache) | LFU with Dynamic Aging |
//! | [`GdsfCacheConfig`] | [`GdsfCache`](crate::GdsfCache) | Greedy Dual-Size Frequency |
//! | [`ArcCacheConfig`] | [`ArcCache`](crate::arc::ArcCache) | Adaptive Replacement Cache |
//! | [`TwoQCacheConfig`] | [`TwoQCache`](crate::twoq::TwoQCache) | Two-Queue |
//!
//! Thread-safe wrappers (`Locked*`, behind the `concurrent` feature) are constructed
//! directly from the same config types; see [`crate::locked`].
//!
//! # Examples
//!
//! ```
//! use cache_rs::config::LruCacheConfig;
//! use cache_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Create config with required capacity
//! let config = LruCacheConfig::new(NonZeroUsize::new(1000).unwrap());
//!
//! // Create cache from config
//! let cache: LruCache<String, i32> = LruCache::from_config(config);
//! ```

pub mod arc;
pub mod gdsf;
pub mod lfu;
pub mod lfuda;
pub mod lru;
pub mod twoq;

pub use arc::ArcCacheConfig;
pub use gdsf::GdsfCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lfuda::LfudaCacheConfig;
pub use lru::LruCacheConfig;
pub use twoq::TwoQCacheConfig;
