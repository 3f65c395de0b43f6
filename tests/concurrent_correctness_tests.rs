//! Concurrent Cache Correctness Tests
//!
//! These tests validate that the thread-safe `Locked*` wrappers maintain
//! correct eviction semantics while being accessed from multiple threads.
//!
//! ## Test Strategy
//!
//! Unlike stress tests that focus on throughput and lack of panics, these tests:
//! - Use small cache sizes for predictable behavior
//! - Verify eviction policies work correctly under concurrent access
//! - Test that concurrent operations maintain invariants (capacity, size tracking)
//!
//! Every `Locked*` wrapper holds exactly one `parking_lot` guard; there is no
//! sharding/segment knob (unlike a striped-lock cache), so these tests exercise
//! a single shared instance per cache type rather than per-segment behavior.

#![cfg(feature = "concurrent")]

use cache_rs::config::GdsfCacheConfig;
use cache_rs::{
    LockedArcCache, LockedGdsfCache, LockedLfuCache, LockedLfudaCache, LockedLruCache,
    LockedTwoQCache,
};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// ============================================================================
// ALGORITHM CORRECTNESS UNDER CONCURRENCY
// ============================================================================

#[test]
fn test_concurrent_lru_access_prevents_eviction() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(3).unwrap()));

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    assert_eq!(cache.get(&1), Some(10));

    cache.put(4, 40);

    assert!(cache.get(&2).is_none(), "Key 2 should be evicted (LRU)");
    assert!(
        cache.get(&1).is_some(),
        "Key 1 should remain (recently accessed)"
    );
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should be present");
}

#[test]
fn test_concurrent_lru_writes_maintain_capacity() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(20).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = t * 1000 + i;
                    cache.put(key, key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(
        cache.len() <= 20,
        "Concurrent writes should not exceed capacity"
    );
}

#[test]
fn test_concurrent_lfu_frequency_based_eviction() {
    let cache: Arc<LockedLfuCache<i32, i32>> =
        Arc::new(LockedLfuCache::new(NonZeroUsize::new(3).unwrap()));

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    for _ in 0..10 {
        cache.get(&1);
    }
    for _ in 0..3 {
        cache.get(&2);
    }

    cache.put(4, 40);

    assert!(
        cache.get(&3).is_none(),
        "Key 3 should be evicted (lowest freq)"
    );
    assert!(
        cache.get(&1).is_some(),
        "Key 1 should remain (highest freq)"
    );
    assert!(cache.get(&2).is_some(), "Key 2 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should be present");
}

#[test]
fn test_concurrent_lfu_frequency_accumulation() {
    let cache: Arc<LockedLfuCache<String, i32>> =
        Arc::new(LockedLfuCache::new(NonZeroUsize::new(6).unwrap()));

    cache.put("hot".to_string(), 1);
    cache.put("warm".to_string(), 2);
    cache.put("cold".to_string(), 3);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..50 {
                    c.get(&"hot".to_string());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    cache.put("new1".to_string(), 4);
    cache.put("new2".to_string(), 5);
    cache.put("new3".to_string(), 6);
    cache.put("new4".to_string(), 7);

    assert!(
        cache.get(&"hot".to_string()).is_some(),
        "Hot key should survive due to high concurrent access frequency"
    );
}

#[test]
fn test_concurrent_lfuda_priority_eviction() {
    let cache: Arc<LockedLfudaCache<i32, i32>> =
        Arc::new(LockedLfudaCache::new(NonZeroUsize::new(4).unwrap()));

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    cache.put(4, 40);

    for _ in 0..20 {
        cache.get(&1);
    }
    for _ in 0..5 {
        cache.get(&2);
    }

    cache.put(5, 50);

    assert!(
        cache.get(&1).is_some(),
        "Key 1 should remain (highest priority)"
    );

    let key3_gone = cache.get(&3).is_none();
    let key4_gone = cache.get(&4).is_none();
    assert!(
        key3_gone || key4_gone,
        "One of the low-priority keys (3 or 4) should be evicted"
    );
}

#[test]
fn test_concurrent_gdsf_size_aware_eviction() {
    let cache: Arc<LockedGdsfCache<i32, i32>> = Arc::new(LockedGdsfCache::from_config(
        GdsfCacheConfig::new(NonZeroUsize::new(3).unwrap()),
    ));

    cache.put(1, 10, 100); // Large object, lower priority
    cache.put(2, 20, 1); // Small object, higher priority
    cache.put(3, 30, 1); // Small object, higher priority

    cache.put(4, 40, 1);

    assert!(
        cache.get(&1).is_none(),
        "Large object should be evicted (lower priority)"
    );
    assert!(cache.get(&2).is_some(), "Small object 2 should remain");
    assert!(cache.get(&3).is_some(), "Small object 3 should remain");
}

#[test]
fn test_concurrent_gdsf_concurrent_size_tracking() {
    let cache: Arc<LockedGdsfCache<i32, i32>> = Arc::new(LockedGdsfCache::from_config(
        GdsfCacheConfig::new(NonZeroUsize::new(10).unwrap()),
    ));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..5 {
                    let key = t * 10 + i;
                    let size = ((i + 1) * 10) as u64;
                    c.put(key, key, size);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.current_size() > 0, "Size should be tracked");
    assert!(cache.len() <= 10, "Should maintain entry capacity");
}

#[test]
fn test_concurrent_arc_repeated_access_promotes() {
    let cache: Arc<LockedArcCache<i32, i32>> =
        Arc::new(LockedArcCache::new(NonZeroUsize::new(4).unwrap()));

    cache.put(1, 10);
    cache.get(&1); // promotes 1 into T2

    cache.put(2, 20);
    cache.put(3, 30);
    cache.put(4, 40);
    cache.put(5, 50); // evicts from T1, not T2

    assert!(
        cache.get(&1).is_some(),
        "Key 1 should survive in T2 after repeated access"
    );
}

#[test]
fn test_concurrent_twoq_scan_resistance() {
    let cache: Arc<LockedTwoQCache<i32, i32>> =
        Arc::new(LockedTwoQCache::new(NonZeroUsize::new(4).unwrap()).unwrap());

    cache.put(100, 1);
    cache.get(&100); // promotes to Am

    for i in 0..20 {
        cache.put(i, i);
    }

    assert!(
        cache.get(&100).is_some(),
        "Promoted key should resist a scan of one-time keys"
    );
}

// ============================================================================
// THREAD SAFETY INVARIANTS
// ============================================================================

#[test]
fn test_capacity_never_exceeded_lru() {
    let capacity = 50;
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(capacity).unwrap()));

    let write_count = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            let wc = Arc::clone(&write_count);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key);
                    wc.fetch_add(1, Ordering::Relaxed);
                    assert!(
                        c.len() <= capacity,
                        "Capacity exceeded during concurrent writes!"
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(write_count.load(Ordering::Relaxed), 8 * 500);
    assert!(cache.len() <= capacity, "Final capacity check failed");
}

#[test]
fn test_capacity_never_exceeded_lfu() {
    let capacity = 50;
    let cache: Arc<LockedLfuCache<i32, i32>> =
        Arc::new(LockedLfuCache::new(NonZeroUsize::new(capacity).unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key);
                    assert!(c.len() <= capacity, "Capacity exceeded!");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= capacity);
}

#[test]
fn test_capacity_never_exceeded_lfuda() {
    let capacity = 50;
    let cache: Arc<LockedLfudaCache<i32, i32>> =
        Arc::new(LockedLfudaCache::new(NonZeroUsize::new(capacity).unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key);
                    assert!(c.len() <= capacity, "Capacity exceeded!");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= capacity);
}

#[test]
fn test_capacity_never_exceeded_gdsf() {
    let capacity = 50;
    let cache: Arc<LockedGdsfCache<i32, i32>> = Arc::new(LockedGdsfCache::from_config(
        GdsfCacheConfig::new(NonZeroUsize::new(capacity * 10).unwrap()),
    ));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key, 1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= capacity);
}

#[test]
fn test_capacity_never_exceeded_arc() {
    let capacity = 50;
    let cache: Arc<LockedArcCache<i32, i32>> =
        Arc::new(LockedArcCache::new(NonZeroUsize::new(capacity).unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= capacity);
}

#[test]
fn test_capacity_never_exceeded_twoq() {
    let capacity = 50;
    let cache: Arc<LockedTwoQCache<i32, i32>> =
        Arc::new(LockedTwoQCache::new(NonZeroUsize::new(capacity).unwrap()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500 {
                    let key = t * 1000 + i;
                    c.put(key, key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= capacity);
}

// ----------------------------------------------------------------------------
// DATA CONSISTENCY
// ----------------------------------------------------------------------------

#[test]
fn test_get_returns_correct_value() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(100).unwrap()));

    for i in 0..50 {
        cache.put(i, i * 100);
    }

    let errors = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&cache);
            let err = Arc::clone(&errors);
            thread::spawn(move || {
                for i in 0..50 {
                    if let Some(val) = c.get(&i) {
                        if val != i * 100 {
                            err.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(errors.load(Ordering::Relaxed), 0, "Values were corrupted");
}

#[test]
fn test_update_is_atomic() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(10).unwrap()));

    cache.put(1, 0);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..100 {
                    c.put(1, t);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let value = cache.get(&1).unwrap();
    assert!(
        (0..=3).contains(&value),
        "Value should be a valid thread ID"
    );
}

#[test]
fn test_remove_consistency() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(100).unwrap()));

    for i in 0..50 {
        cache.put(i, i);
    }

    let successful_removes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&cache);
            let sr = Arc::clone(&successful_removes);
            thread::spawn(move || {
                for i in 0..50 {
                    if c.remove(&i) {
                        sr.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(
        successful_removes.load(Ordering::Relaxed),
        50,
        "Each key should be removed exactly once"
    );
    assert!(cache.is_empty(), "Cache should be empty after all removes");
}

// ----------------------------------------------------------------------------
// MIXED OPERATIONS CORRECTNESS
// ----------------------------------------------------------------------------

#[test]
fn test_mixed_operations_lru() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(100).unwrap()));

    let mut handles = vec![];

    for t in 0..4 {
        let c = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                c.put(t * 1000 + i, i);
            }
        }));
    }

    for t in 0..4 {
        let c = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                let _ = c.get(&(t * 1000 + i));
            }
        }));
    }

    for t in 0..2 {
        let c = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                c.remove(&(t * 1000 + i));
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= 100);
}

#[test]
fn test_mixed_operations_gdsf() {
    let cache: Arc<LockedGdsfCache<i32, i32>> = Arc::new(LockedGdsfCache::from_config(
        GdsfCacheConfig::new(NonZeroUsize::new(1000).unwrap()),
    ));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..200 {
                    let size = (i % 10 + 1) as u64;
                    c.put(t * 1000 + i, i, size);
                    let _ = c.get(&(t * 1000 + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.len() <= 800);
}

// ----------------------------------------------------------------------------
// SIZE TRACKING CONSISTENCY
// ----------------------------------------------------------------------------

#[test]
fn test_size_tracking_concurrent_lfu() {
    let cache: Arc<LockedLfuCache<i32, String>> =
        Arc::new(LockedLfuCache::new(NonZeroUsize::new(200).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..25 {
                    let key = t * 100 + i;
                    c.put_with_size(key, format!("value_{}", key), 10);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(cache.current_size(), 100 * 10, "Size should match entries * 10");
    assert_eq!(cache.len(), 100);
}

#[test]
fn test_size_tracking_on_remove() {
    let cache: LockedLfuCache<i32, String> = LockedLfuCache::new(NonZeroUsize::new(100).unwrap());

    for i in 0..10 {
        cache.put_with_size(i, format!("value_{}", i), 1024);
    }

    assert_eq!(cache.current_size(), 10 * 1024);

    for i in 0..5 {
        cache.remove(&i);
    }

    assert_eq!(cache.current_size(), 5 * 1024);

    for i in 0..5 {
        assert!(cache.get(&i).is_none(), "Key {} should be removed", i);
    }
    for i in 5..10 {
        assert!(cache.get(&i).is_some(), "Key {} should still exist", i);
    }
}

// ----------------------------------------------------------------------------
// EDGE CASES
// ----------------------------------------------------------------------------

#[test]
fn test_concurrent_access_empty_cache() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(10).unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    assert!(c.get(&i).is_none(), "Empty cache should return None");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.is_empty());
}

#[test]
fn test_concurrent_single_key() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(10).unwrap()));

    let put_count = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&cache);
            let pc = Arc::clone(&put_count);
            thread::spawn(move || {
                for i in 0..100 {
                    c.put(1, i);
                    pc.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert!(cache.get(&1).is_some(), "Key should exist");
    assert_eq!(cache.len(), 1, "Should have exactly 1 key");
    assert_eq!(put_count.load(Ordering::Relaxed), 8 * 100);
}

#[test]
fn test_concurrent_capacity_one() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(1).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    c.put(t * 100 + i, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(cache.len(), 1, "Cache with capacity 1 should have 1 entry");
}

#[test]
fn test_contains_consistency() {
    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(50).unwrap()));

    for i in 0..30 {
        cache.put(i, i);
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..30 {
                    if c.contains(&i) {
                        let _ = c.get(&i);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}

// ----------------------------------------------------------------------------
// ALL ALGORITHMS: CONSISTENT BEHAVIOR
// ----------------------------------------------------------------------------

#[test]
fn test_all_locked_caches_len_consistency() {
    let cap = NonZeroUsize::new(20).unwrap();

    let lru: LockedLruCache<i32, i32> = LockedLruCache::new(cap);
    let lfu: LockedLfuCache<i32, i32> = LockedLfuCache::new(cap);
    let lfuda: LockedLfudaCache<i32, i32> = LockedLfudaCache::new(cap);
    let gdsf: LockedGdsfCache<i32, i32> = LockedGdsfCache::from_config(GdsfCacheConfig::new(cap));
    let arc: LockedArcCache<i32, i32> = LockedArcCache::new(cap);
    let twoq: LockedTwoQCache<i32, i32> = LockedTwoQCache::new(cap).unwrap();

    for i in 0..100 {
        lru.put(i, i);
        lfu.put(i, i);
        lfuda.put(i, i);
        gdsf.put(i, i, 1);
        arc.put(i, i);
        twoq.put(i, i);
    }

    assert!(lru.len() <= 20, "LRU exceeded capacity");
    assert!(lfu.len() <= 20, "LFU exceeded capacity");
    assert!(lfuda.len() <= 20, "LFUDA exceeded capacity");
    assert!(gdsf.len() <= 20, "GDSF exceeded capacity");
    assert!(arc.len() <= 20, "ARC exceeded capacity");
    assert!(twoq.len() <= 20, "2Q exceeded capacity");
}

#[test]
fn test_all_locked_caches_clear() {
    let cap = NonZeroUsize::new(20).unwrap();

    let lru: LockedLruCache<i32, i32> = LockedLruCache::new(cap);
    let lfu: LockedLfuCache<i32, i32> = LockedLfuCache::new(cap);
    let lfuda: LockedLfudaCache<i32, i32> = LockedLfudaCache::new(cap);
    let gdsf: LockedGdsfCache<i32, i32> = LockedGdsfCache::from_config(GdsfCacheConfig::new(cap));
    let arc: LockedArcCache<i32, i32> = LockedArcCache::new(cap);
    let twoq: LockedTwoQCache<i32, i32> = LockedTwoQCache::new(cap).unwrap();

    for i in 0..20 {
        lru.put(i, i);
        lfu.put(i, i);
        lfuda.put(i, i);
        gdsf.put(i, i, 1);
        arc.put(i, i);
        twoq.put(i, i);
    }

    lru.purge();
    lfu.clear();
    lfuda.clear();
    gdsf.clear();
    arc.purge();
    twoq.purge();

    assert!(lru.is_empty(), "LRU should be empty after purge");
    assert!(lfu.is_empty(), "LFU should be empty after clear");
    assert!(lfuda.is_empty(), "LFUDA should be empty after clear");
    assert!(gdsf.is_empty(), "GDSF should be empty after clear");
    assert!(arc.is_empty(), "ARC should be empty after purge");
    assert!(twoq.is_empty(), "2Q should be empty after purge");
}

// ----------------------------------------------------------------------------
// CONSTRUCTOR AND SIZE-LIMIT COVERAGE
// ----------------------------------------------------------------------------

#[test]
fn test_locked_lfu_with_max_size() {
    let max_size: u64 = 1024 * 1024;
    let cache: LockedLfuCache<String, Vec<u8>> = LockedLfuCache::with_max_size(max_size);

    assert_eq!(cache.max_size(), max_size);
    assert_eq!(cache.current_size(), 0);

    cache.put_with_size("key1".to_string(), vec![1, 2, 3], 100);
    assert_eq!(cache.current_size(), 100);
}

#[test]
fn test_locked_lfu_with_limits() {
    let max_entries = NonZeroUsize::new(100).unwrap();
    let max_size: u64 = 50_000;
    let cache: LockedLfuCache<i32, String> = LockedLfuCache::with_limits(max_entries, max_size);

    for i in 0..50 {
        cache.put_with_size(i, format!("value_{}", i), 100);
    }

    assert_eq!(cache.current_size(), 5000);

    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.current_size(), 0);
}

#[test]
fn test_locked_lfuda_with_limits() {
    let max_entries = NonZeroUsize::new(100).unwrap();
    let max_size: u64 = 50_000;
    let cache: LockedLfudaCache<i32, String> =
        LockedLfudaCache::with_limits(max_entries, max_size);

    for i in 0..50 {
        cache.put_with_size(i, format!("value_{}", i), 100);
    }

    assert_eq!(cache.current_size(), 5000);

    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.current_size(), 0);
}

#[test]
fn test_locked_gdsf_with_limits() {
    let max_entries = NonZeroUsize::new(100).unwrap();
    let max_size: u64 = 50_000;
    let cache: LockedGdsfCache<i32, String> = LockedGdsfCache::with_limits(max_entries, max_size);

    for i in 0..50 {
        cache.put(i, format!("value_{}", i), 100);
    }

    assert_eq!(cache.current_size(), 5000);

    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.current_size(), 0);
}

// ----------------------------------------------------------------------------
// CLEAR UNDER CONCURRENCY
// ----------------------------------------------------------------------------

#[test]
fn test_concurrent_clear_during_operations() {
    let cache: Arc<LockedLfuCache<i32, i32>> =
        Arc::new(LockedLfuCache::new(NonZeroUsize::new(1000).unwrap()));

    for i in 0..100 {
        cache.put(i, i);
    }
    assert_eq!(cache.len(), 100);

    let cache_clone = Arc::clone(&cache);
    let handle = thread::spawn(move || {
        for _ in 0..5 {
            cache_clone.clear();
            thread::sleep(std::time::Duration::from_millis(1));
        }
    });

    for i in 100..200 {
        cache.put(i, i);
    }

    handle.join().unwrap();

    assert!(cache.len() <= 1000, "Cache should respect capacity");
}

// ----------------------------------------------------------------------------
// RECORD_MISS COVERAGE
// ----------------------------------------------------------------------------

#[test]
fn test_locked_lfu_record_miss() {
    let cache: LockedLfuCache<i32, i32> = LockedLfuCache::new(NonZeroUsize::new(100).unwrap());

    cache.record_miss(100);
    cache.record_miss(200);

    // record_miss feeds the byte-hit-rate metric; it must not affect capacity.
    cache.put(1, 1);
    assert_eq!(cache.len(), 1);
}
