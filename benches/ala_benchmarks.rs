//! Ala Trie Benchmarks
//!
//! Benchmarks for the trie's insert, lookup, and enumeration paths, using the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use ala_trie::{AlaTrie, AlaTrieConfig, WriteMode};

/// Benchmark insertion under both write modes and several key lengths
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ala_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for mode in [WriteMode::Immediate, WriteMode::Deferred] {
        for key_length in [8, 16, 32, 64].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), key_length),
                key_length,
                |b, &length| {
                    let trie = AlaTrie::<char>::with_config(
                        AlaTrieConfig::new().with_write_mode(mode),
                    );
                    let keys: Vec<String> = (0..1000)
                        .map(|i| format!("{:0width$}", i, width = length))
                        .collect();

                    let mut index = 0;
                    b.iter(|| {
                        // Cycle through keys to avoid reusing the same key
                        let key = &keys[index % keys.len()];
                        index += 1;
                        trie.insert_str(black_box(key));
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark exact and prefix lookups on a populated trie
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ala_trie_lookup");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    let trie = AlaTrie::<char>::new();
    let keys: Vec<String> = (0..1000).map(|i| format!("key_{}", i)).collect();
    for key in &keys {
        trie.insert_str(key);
    }

    group.bench_function("contains", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.contains_str(key));
        });
    });

    group.bench_function("contains_prefix", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.contains_prefix_str(&key[..key.len() / 2]));
        });
    });

    group.finish();
}

/// Benchmark full and prefix enumeration
fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ala_trie_enumerate");
    group.sampling_mode(SamplingMode::Flat);

    for size in [100, 1000, 10_000].iter() {
        let trie = AlaTrie::<char>::new();
        for i in 0..*size {
            trie.insert_str(&format!("prefix_{}_key_{}", i % 100, i));
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("iter", size), size, |b, _| {
            b.iter(|| black_box(trie.iter().count()));
        });
        group.bench_with_input(BenchmarkId::new("count", size), size, |b, _| {
            b.iter(|| black_box(trie.count()));
        });
    }

    let trie = AlaTrie::<char>::new();
    for i in 0..100 {
        for j in 0..10 {
            trie.insert_str(&format!("prefix_{}_key_{}", i, j));
        }
    }

    group.bench_function("iter_prefix", |b| {
        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("prefix_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(trie.iter_prefix(prefix.chars()).count());
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insert, bench_lookup, bench_enumerate
}

criterion_main!(benches);
