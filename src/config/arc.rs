//! Configuration for the Adaptive Replacement Cache (ARC).

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an ARC (Adaptive Replacement Cache).
///
/// ARC needs only a single size parameter: it builds four internal LRU-cores
/// (T1, T2, B1, B2) each of this capacity, and starts with the adaptive split
/// parameter `p = 0`.
///
/// # Examples
///
/// ```
/// use cache_rs::config::arc::ArcCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = ArcCacheConfig::new(NonZeroUsize::new(128).unwrap());
/// assert_eq!(config.capacity(), NonZeroUsize::new(128).unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct ArcCacheConfig {
    /// Maximum number of resident (T1 + T2) key-value pairs.
    capacity: NonZeroUsize,
}

impl ArcCacheConfig {
    /// Creates a new configuration for an ARC cache.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }

    /// Returns the cache's capacity.
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl fmt::Debug for ArcCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
