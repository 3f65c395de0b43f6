extern crate cache_rs;

use cache_rs::config::GdsfCacheConfig;
use cache_rs::{ArcCache, GdsfCache, LfuCache, LfudaCache, LruCache, TwoQCache};
use core::num::NonZeroUsize;

fn main() {
    println!("Cache Implementation Comparison");
    println!("===============================");
    println!("Each cache has capacity of 3 items.");
    println!("We'll add 4 items to see eviction behavior, then access 'apple' multiple times.");
    println!(
        "Finally, we'll add 'elderberry' to see how different algorithms choose what to evict.\n"
    );

    let cap = NonZeroUsize::new(3).unwrap();

    let mut lru_cache: LruCache<&str, i32> = LruCache::new(cap);
    let mut twoq_cache: TwoQCache<&str, i32> = TwoQCache::new(cap).unwrap();
    let mut arc_cache: ArcCache<&str, i32> = ArcCache::new(cap);
    let mut lfu_cache: LfuCache<&str, i32> = LfuCache::new(cap);
    let mut lfuda_cache: LfudaCache<&str, i32> = LfudaCache::new(cap);
    let gdsf_config = GdsfCacheConfig::new(cap);
    let mut gdsf_cache: GdsfCache<&str, i32> = GdsfCache::from_config(gdsf_config);

    // Test data
    let data = vec![("apple", 1), ("banana", 2), ("cherry", 3), ("date", 4)];

    // Test data with sizes for GDSF cache
    let gdsf_data = vec![
        ("apple", 1, 10), // (key, value, size)
        ("banana", 2, 20),
        ("cherry", 3, 15),
        ("date", 4, 5),
    ];

    println!("\n1. LRU Cache (Least Recently Used):");
    for (key, value) in &data {
        let evicted = lru_cache.put(*key, *value);
        println!("   Added: {key} -> {value} (evicted something: {evicted})");
    }

    println!("\n2. 2Q Cache (Two-Queue):");
    for (key, value) in &data {
        twoq_cache.put(*key, *value);
        println!("   Added: {key} -> {value}");
    }

    println!("\n3. ARC Cache (Adaptive Replacement Cache):");
    for (key, value) in &data {
        arc_cache.put(*key, *value);
        println!("   Added: {key} -> {value} (p={})", arc_cache.target_p());
    }

    println!("\n4. LFU Cache (Least Frequently Used):");
    for (key, value) in &data {
        if let Some(evicted) = lfu_cache.put(*key, *value) {
            println!("   Evicted: {evicted:?}");
        }
        println!("   Added: {key} -> {value}");
    }

    println!("\n5. LFUDA Cache (LFU with Dynamic Aging):");
    for (key, value) in &data {
        if let Some(evicted) = lfuda_cache.put(*key, *value) {
            println!("   Evicted: {evicted:?}");
        }
        println!("   Added: {key} -> {value}");
    }

    println!("\n6. GDSF Cache (Greedy Dual-Size Frequency):");
    println!(
        "   GDSF considers both frequency and size. Priority = (Frequency / Size) + Global_Age"
    );
    for (key, value, size) in &gdsf_data {
        if let Some(evicted) = gdsf_cache.put(*key, *value, *size) {
            println!("   Evicted: {evicted:?}");
        }
        println!(
            "   Added: {} -> {} (size: {}, priority will be 1/{} = {:.3})",
            key,
            value,
            size,
            size,
            1.0 / *size as f64
        );
    }

    println!("\nAccessing 'apple' multiple times to increase its frequency...");
    println!("This should affect frequency-based caches differently than recency-based ones.");

    for _ in 0..3 {
        lru_cache.get(&"apple");
        twoq_cache.get(&"apple");
        arc_cache.get(&"apple");
        lfu_cache.get(&"apple");
        lfuda_cache.get(&"apple");
        gdsf_cache.get(&"apple");
    }

    println!("\nAdding 'elderberry' to see different eviction behaviors...");

    let lru_evicted = lru_cache.put("elderberry", 5);
    println!("LRU evicted something: {lru_evicted}");

    twoq_cache.put("elderberry", 5);
    println!("2Q: added elderberry");

    arc_cache.put("elderberry", 5);
    println!("ARC: added elderberry (p={})", arc_cache.target_p());

    if let Some(evicted) = lfu_cache.put("elderberry", 5) {
        println!("LFU evicted: {evicted:?}");
    }

    if let Some(evicted) = lfuda_cache.put("elderberry", 5) {
        println!("LFUDA evicted: {evicted:?}");
    }

    if let Some(evicted) = gdsf_cache.put("elderberry", 5, 8) {
        println!(
            "GDSF evicted: {evicted:?} (algorithm chose based on lowest (frequency/size) + global_age)"
        );
    } else {
        println!("GDSF: Added elderberry (no eviction needed)");
    }

    println!("\nFinal cache states:");
    println!("LRU cache size: {}", lru_cache.len());
    println!("2Q cache size: {}", twoq_cache.len());
    println!("ARC cache size: {}", arc_cache.len());
    println!("LFU cache size: {}", lfu_cache.len());
    println!("LFUDA cache size: {}", lfuda_cache.len());
    println!("GDSF cache size: {}", gdsf_cache.len());
}
