//! Cache Metrics Demonstration
//!
//! Exercises the metrics system implemented across all cache algorithms
//! (LRU, 2Q, ARC, LFU, LFUDA, GDSF), showing both core metrics and
//! algorithm-specific metrics for performance analysis and comparison.

use cache_rs::{
    arc::ArcCache,
    config::{gdsf::GdsfCacheConfig, lfu::LfuCacheConfig, lfuda::LfudaCacheConfig, lru::LruCacheConfig},
    gdsf::GdsfCache,
    lfu::LfuCache,
    lfuda::LfudaCache,
    lru::LruCache,
    metrics::CacheMetrics,
    twoq::TwoQCache,
};
use core::num::NonZeroUsize;
use std::collections::BTreeMap;

fn main() {
    println!("Cache Metrics System - Demonstration");
    println!("=====================================\n");

    let capacity = NonZeroUsize::new(3).unwrap();

    println!("Comparing cache algorithms with identical workloads:");
    println!("   - Capacity: {} items", capacity.get());
    println!("   - Operations: Insert 3 items -> Access patterns -> Insert 2 more");
    println!("   - This will trigger evictions and show algorithm differences\n");

    let caches: Vec<(String, Box<dyn CacheMetrics>)> = vec![
        ("LRU".to_string(), Box::new(test_lru_cache(capacity))),
        ("2Q".to_string(), Box::new(test_twoq_cache(capacity))),
        ("ARC".to_string(), Box::new(test_arc_cache(capacity))),
        ("LFU".to_string(), Box::new(test_lfu_cache(capacity))),
        ("LFUDA".to_string(), Box::new(test_lfuda_cache(capacity))),
        ("GDSF".to_string(), Box::new(test_gdsf_cache(capacity))),
    ];

    display_metrics_comparison(&caches);
    demonstrate_deterministic_ordering(&*caches[0].1);
}

fn test_lru_cache(capacity: NonZeroUsize) -> LruCache<&'static str, i32> {
    println!("Testing LRU Cache...");
    let _config = LruCacheConfig::new(capacity);
    let mut cache = LruCache::new(capacity);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.record_miss(64);
    cache.record_miss(32);

    cache.put("date", 4);
    cache.put("elderberry", 5);

    println!("   LRU test completed");
    cache
}

fn test_twoq_cache(capacity: NonZeroUsize) -> TwoQCache<&'static str, i32> {
    println!("Testing 2Q Cache...");
    let mut cache = TwoQCache::new(capacity).unwrap();

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.put("date", 4);
    cache.put("elderberry", 5);

    println!("   2Q test completed");
    cache
}

fn test_arc_cache(capacity: NonZeroUsize) -> ArcCache<&'static str, i32> {
    println!("Testing ARC Cache...");
    let mut cache = ArcCache::new(capacity);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.put("date", 4);
    cache.put("elderberry", 5);

    println!("   ARC test completed");
    cache
}

fn test_lfu_cache(capacity: NonZeroUsize) -> LfuCache<&'static str, i32> {
    println!("Testing LFU Cache...");
    let _config = LfuCacheConfig::new(capacity);
    let mut cache = LfuCache::new(capacity);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.record_miss(64);
    cache.record_miss(32);

    cache.put("date", 4);
    cache.put("elderberry", 5);

    println!("   LFU test completed");
    cache
}

fn test_lfuda_cache(capacity: NonZeroUsize) -> LfudaCache<&'static str, i32> {
    println!("Testing LFUDA Cache...");
    let _config = LfudaCacheConfig::new(capacity);
    let mut cache = LfudaCache::new(capacity);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.record_miss(64);
    cache.record_miss(32);

    cache.put("date", 4);
    cache.put("elderberry", 5);

    println!("   LFUDA test completed");
    cache
}

fn test_gdsf_cache(capacity: NonZeroUsize) -> GdsfCache<&'static str, i32> {
    println!("Testing GDSF Cache...");
    let _config = GdsfCacheConfig::new(capacity);
    let mut cache = GdsfCache::new(capacity);

    cache.put("apple", 1, 10);
    cache.put("banana", 2, 50);
    cache.put("cherry", 3, 25);

    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");

    cache.record_miss(64);
    cache.record_miss(32);

    cache.put("date", 4, 15);
    cache.put("elderberry", 5, 40);

    println!("   GDSF test completed");
    cache
}

fn display_metrics_comparison(caches: &[(String, Box<dyn CacheMetrics>)]) {
    println!("\nCOMPREHENSIVE METRICS COMPARISON");
    println!("====================================\n");

    println!("Core Performance Metrics:");
    println!(
        "{:<10} {:<8} {:<8} {:<10} {:<12} {:<8}",
        "Algorithm", "Hits", "Misses", "Evictions", "Hit Rate %", "Requests"
    );
    println!("{}", "-".repeat(70));

    for (name, cache) in caches {
        let metrics = cache.metrics();
        let hits = metrics.get("cache_hits").unwrap_or(&0.0);
        let requests = metrics.get("requests").unwrap_or(&0.0);
        let evictions = metrics.get("evictions").unwrap_or(&0.0);
        let hit_rate = metrics.get("hit_rate").unwrap_or(&0.0) * 100.0;
        let misses = requests - hits;

        println!(
            "{name:<10} {hits:<8.0} {misses:<8.0} {evictions:<10.0} {hit_rate:<12.1} {requests:<8.0}"
        );
    }

    println!("\nAlgorithm-Specific Metrics:\n");

    for (name, cache) in caches {
        let metrics = cache.metrics();
        println!("{name} Cache Metrics:");

        match name.as_str() {
            "LRU" => print_lru_metrics(&metrics),
            "2Q" => print_twoq_metrics(&metrics),
            "ARC" => print_arc_metrics(&metrics),
            "LFU" => print_lfu_metrics(&metrics),
            "LFUDA" => print_lfuda_metrics(&metrics),
            "GDSF" => print_gdsf_metrics(&metrics),
            _ => {}
        }
        println!();
    }
}

fn print_lru_metrics(metrics: &BTreeMap<String, f64>) {
    if let Some(updates) = metrics.get("recency_updates") {
        println!("  - Recency Updates: {updates:.0}");
    }
    if let Some(rate) = metrics.get("cache_utilization") {
        println!("  - Cache Utilization: {:.1}%", rate * 100.0);
    }
}

fn print_twoq_metrics(metrics: &BTreeMap<String, f64>) {
    for key in ["twoq_am_len", "twoq_a1in_len", "twoq_a1out_len"] {
        if let Some(value) = metrics.get(key) {
            println!("  - {}: {:.0}", key.replace('_', " "), value);
        }
    }
}

fn print_arc_metrics(metrics: &BTreeMap<String, f64>) {
    for key in [
        "arc_target_p",
        "arc_t1_len",
        "arc_t2_len",
        "arc_b1_len",
        "arc_b2_len",
    ] {
        if let Some(value) = metrics.get(key) {
            println!("  - {}: {:.0}", key.replace('_', " "), value);
        }
    }
}

fn print_lfu_metrics(metrics: &BTreeMap<String, f64>) {
    let keys = [
        "min_frequency",
        "max_frequency",
        "frequency_range",
        "average_frequency",
    ];
    for key in &keys {
        if let Some(value) = metrics.get(*key) {
            println!("  - {}: {:.2}", key.replace('_', " "), value);
        }
    }
}

fn print_lfuda_metrics(metrics: &BTreeMap<String, f64>) {
    let keys = [
        "global_age",
        "total_aging_events",
        "aging_effectiveness",
        "items_benefited_from_aging",
    ];
    for key in &keys {
        if let Some(value) = metrics.get(*key) {
            println!("  - {}: {:.2}", key.replace('_', " "), value);
        }
    }
}

fn print_gdsf_metrics(metrics: &BTreeMap<String, f64>) {
    let keys = [
        "average_item_size",
        "size_based_evictions",
        "priority_range",
    ];
    for key in &keys {
        if let Some(value) = metrics.get(*key) {
            println!("  - {}: {:.2}", key.replace('_', " "), value);
        }
    }
}

fn demonstrate_deterministic_ordering(cache: &dyn CacheMetrics) {
    println!("\nDeterministic Metrics Ordering (BTreeMap):");
    println!("==============================================");
    println!("All metrics use BTreeMap for consistent, reproducible ordering across runs.\n");

    let metrics = cache.metrics();
    println!("Sample metrics keys (showing deterministic alphabetical ordering):");
    for (i, key) in metrics.keys().take(8).enumerate() {
        println!("  {}. {}", i + 1, key);
    }

    println!("\nMetrics integration complete across all six cache algorithms.");
}
