use cache_rs::{ArcCache, GdsfCache, LfuCache, LfudaCache, LruCache, TwoQCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::num::NonZeroUsize;

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    LruCache::new(NonZeroUsize::new(cap).unwrap())
}

fn make_twoq<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> TwoQCache<K, V> {
    TwoQCache::new(NonZeroUsize::new(cap).unwrap()).unwrap()
}

fn make_arc<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> ArcCache<K, V> {
    ArcCache::new(NonZeroUsize::new(cap).unwrap())
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LfuCache<K, V> {
    LfuCache::new(NonZeroUsize::new(cap).unwrap())
}

fn make_lfuda<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LfudaCache<K, V> {
    LfudaCache::new(NonZeroUsize::new(cap).unwrap())
}

fn make_gdsf<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> GdsfCache<K, V> {
    GdsfCache::new(NonZeroUsize::new(cap).unwrap())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    // LRU benchmarks
    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, i));
                }
            });
        });
    }

    // 2Q benchmarks
    {
        let mut cache = make_twoq(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("2Q get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    // ARC benchmarks
    {
        let mut cache = make_arc(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("ARC get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    // LFU benchmarks
    {
        let mut cache = make_lfu(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LFU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    // LFUDA benchmarks
    {
        let mut cache = make_lfuda(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LFUDA get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    // GDSF benchmarks
    {
        let mut cache = make_gdsf(CACHE_SIZE * 10);
        for i in 0..CACHE_SIZE {
            cache.put(i, i, ((i % 10) + 1) as u64); // Size between 1-10, cast to u64
        }

        group.bench_function("GDSF get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
