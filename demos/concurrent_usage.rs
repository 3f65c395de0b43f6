//! Concurrent Cache Usage Examples
//!
//! This example demonstrates multi-threaded usage patterns for cache-rs's
//! single-guard thread-safe wrappers.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

extern crate cache_rs;

use cache_rs::config::GdsfCacheConfig;
use cache_rs::{
    LockedArcCache, LockedGdsfCache, LockedLfuCache, LockedLfudaCache, LockedLruCache,
    LockedTwoQCache,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("Concurrent Cache Usage Examples");
    println!("================================\n");

    basic_concurrent_usage();
    println!();

    all_locked_cache_types();
    println!();

    throughput_comparison();
}

/// Basic multi-threaded cache usage
fn basic_concurrent_usage() {
    println!("1. Basic Concurrent Usage");
    println!("   -----------------------");

    // Every Locked* wrapper holds exactly one parking_lot guard; there is no
    // sharding knob to tune, unlike a striped-lock cache.
    let cache = Arc::new(LockedLruCache::new(NonZeroUsize::new(1000).unwrap()));

    let num_threads = 4;
    let ops_per_thread = 1000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread{thread_id}-key{i}");
                    let value = thread_id * 10000 + i;

                    cache.put(key.clone(), value);

                    if let Some(v) = cache.get(&key) {
                        assert_eq!(v, value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    println!(
        "   Completed {} operations across {} threads",
        num_threads * ops_per_thread * 2,
        num_threads
    );
    println!("   Final cache size: {} items", cache.len());
}

/// Show each thread-safe wrapper the `concurrent` feature exposes.
fn all_locked_cache_types() {
    println!("2. All Locked Cache Types");
    println!("   -----------------------");

    let lru: LockedLruCache<String, i32> = LockedLruCache::new(NonZeroUsize::new(100).unwrap());
    lru.put("key".to_string(), 1);
    println!("   LockedLruCache: RwLock-guarded, general purpose");

    let twoq: LockedTwoQCache<String, i32> =
        LockedTwoQCache::new(NonZeroUsize::new(100).unwrap()).unwrap();
    twoq.put("key".to_string(), 1);
    println!("   LockedTwoQCache: Mutex-guarded, scan resistant");

    let arc: LockedArcCache<String, i32> = LockedArcCache::new(NonZeroUsize::new(100).unwrap());
    arc.put("key".to_string(), 1);
    println!("   LockedArcCache: Mutex-guarded, self-tuning recency/frequency split");

    let lfu: LockedLfuCache<String, i32> = LockedLfuCache::new(NonZeroUsize::new(100).unwrap());
    lfu.put("key".to_string(), 1);
    println!("   LockedLfuCache: RwLock-guarded, frequency-based eviction");

    let lfuda: LockedLfudaCache<String, i32> =
        LockedLfudaCache::new(NonZeroUsize::new(100).unwrap());
    lfuda.put("key".to_string(), 1);
    println!("   LockedLfudaCache: RwLock-guarded, frequency + dynamic aging");

    let gdsf_config = GdsfCacheConfig::new(NonZeroUsize::new(10000).unwrap());
    let gdsf: LockedGdsfCache<String, Vec<u8>> = LockedGdsfCache::from_config(gdsf_config);
    gdsf.put("small.txt".to_string(), vec![0u8; 100], 100);
    gdsf.put("large.jpg".to_string(), vec![0u8; 5000], 5000);
    println!("   LockedGdsfCache: RwLock-guarded, size-aware for variable-size objects");
}

/// Measure throughput for a single shared `LockedLruCache` under contention.
fn throughput_comparison() {
    println!("3. Throughput Under Contention (8 threads, 10K ops each)");
    println!("   --------------------------------------------------------");

    let ops_per_thread = 10_000;
    let num_threads = 8;

    let cache: Arc<LockedLruCache<i32, i32>> =
        Arc::new(LockedLruCache::new(NonZeroUsize::new(10000).unwrap()));

    let start = Instant::now();

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let offset = t * ops_per_thread;
                for i in 0..ops_per_thread {
                    let key = offset + i;
                    cache.put(key, key);
                    cache.get(&key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let elapsed = start.elapsed();
    let total_ops = num_threads * ops_per_thread * 2;
    let ops_per_sec = (total_ops as f64 / elapsed.as_secs_f64()) as u64;

    println!("   {elapsed:>7.2?} elapsed ({ops_per_sec:>10} ops/sec)");
}
