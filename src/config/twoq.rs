//! Configuration for the 2Q (Two-Queue) cache.

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Default fraction of total capacity targeted for the resident "recent" queue (A1in).
pub const DEFAULT_RECENT_RATIO: f64 = 0.25;
/// Default fraction of total capacity targeted for the ghost "recent" queue (A1out).
pub const DEFAULT_GHOST_RATIO: f64 = 0.50;

/// Configuration for a 2Q (Johnson/Shasha Two-Queue) cache.
///
/// Grounded in `original_source/two_queue/2q.go`'s `New2QParams`: total size plus
/// two ratios governing how the recent-queue target (`k_in`) and the ghost-queue
/// capacity (`k_out`) are derived from `size`.
///
/// # Examples
///
/// ```
/// use cache_rs::config::twoq::TwoQCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = TwoQCacheConfig::new(NonZeroUsize::new(128).unwrap()).unwrap();
/// assert_eq!(config.capacity().get(), 128);
/// assert_eq!(config.ratio_recent(), 0.25);
/// assert_eq!(config.ratio_ghost(), 0.50);
/// ```
#[derive(Clone, Copy)]
pub struct TwoQCacheConfig {
    capacity: NonZeroUsize,
    ratio_recent: f64,
    ratio_ghost: f64,
}

impl TwoQCacheConfig {
    /// Creates a configuration using the default ratios (`0.25` recent, `0.50` ghost).
    pub fn new(capacity: NonZeroUsize) -> Result<Self, CacheError> {
        Self::with_ratios(capacity, DEFAULT_RECENT_RATIO, DEFAULT_GHOST_RATIO)
    }

    /// Creates a configuration with explicit ratios.
    ///
    /// Returns `Err(CacheError::InvalidRatio)` if either ratio falls outside `[0.0, 1.0]`.
    pub fn with_ratios(
        capacity: NonZeroUsize,
        ratio_recent: f64,
        ratio_ghost: f64,
    ) -> Result<Self, CacheError> {
        if !(0.0..=1.0).contains(&ratio_recent) || !(0.0..=1.0).contains(&ratio_ghost) {
            return Err(CacheError::InvalidRatio);
        }
        Ok(Self {
            capacity,
            ratio_recent,
            ratio_ghost,
        })
    }

    /// Returns the total capacity.
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the recent-queue target ratio.
    pub fn ratio_recent(&self) -> f64 {
        self.ratio_recent
    }

    /// Returns the ghost-queue capacity ratio.
    pub fn ratio_ghost(&self) -> f64 {
        self.ratio_ghost
    }
}

impl fmt::Debug for TwoQCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoQCacheConfig")
            .field("capacity", &self.capacity)
            .field("ratio_recent", &self.ratio_recent)
            .field("ratio_ghost", &self.ratio_ghost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twoq_config_defaults() {
        let config = TwoQCacheConfig::new(NonZeroUsize::new(100).unwrap()).unwrap();
        assert_eq!(config.ratio_recent(), DEFAULT_RECENT_RATIO);
        assert_eq!(config.ratio_ghost(), DEFAULT_GHOST_RATIO);
    }

    #[test]
    fn test_twoq_config_rejects_bad_ratio() {
        let err = TwoQCacheConfig::with_ratios(NonZeroUsize::new(100).unwrap(), 1.5, 0.5)
            .unwrap_err();
        assert_eq!(err, CacheError::InvalidRatio);

        let err = TwoQCacheConfig::with_ratios(NonZeroUsize::new(100).unwrap(), 0.5, -0.1)
            .unwrap_err();
        assert_eq!(err, CacheError::InvalidRatio);
    }
}
