//! Throughput Benchmark for linekv
//!
//! This benchmark measures the store and the command executor
//! under various workloads.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linekv::commands::CommandHandler;
use linekv::protocol::LineParser;
use linekv::storage::{KeyPattern, Store};
use std::sync::Arc;
use std::time::Duration;

/// Benchmark SET operations
fn bench_set(c: &mut Criterion) {
    let store = Arc::new(Store::new());

    let mut group = c.benchmark_group("set");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_small", |b| {
        let mut i = 0u64;
        b.iter(|| {
            store.set(format!("key:{}", i), "small_value".to_string());
            i += 1;
        });
    });

    group.bench_function("set_medium", |b| {
        let mut i = 0u64;
        let value = "x".repeat(1024); // 1KB value
        b.iter(|| {
            store.set(format!("key:{}", i), value.clone());
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark GET operations
fn bench_get(c: &mut Criterion) {
    let store = Arc::new(Store::new());

    // Pre-populate with data
    for i in 0..100_000 {
        store.set(format!("key:{}", i), format!("value:{}", i));
    }

    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_existing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            black_box(store.get(&format!("key:{}", i % 100_000)));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            black_box(store.get(&format!("missing:{}", i)));
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark multi-key DEL and EXISTS
fn bench_multi_key(c: &mut Criterion) {
    let store = Arc::new(Store::new());

    for i in 0..10_000 {
        store.set(format!("key:{}", i), "value".to_string());
    }

    let keys: Vec<String> = (0..10).map(|i| format!("key:{}", i * 7)).collect();

    let mut group = c.benchmark_group("multi_key");
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("exists_10", |b| {
        b.iter(|| black_box(store.exists_many(&keys)));
    });

    group.bench_function("del_set_10", |b| {
        b.iter(|| {
            black_box(store.delete_many(&keys));
            for key in &keys {
                store.set(key.clone(), "value".to_string());
            }
        });
    });

    group.finish();
}

/// Benchmark parse + execute of whole command lines
fn bench_executor(c: &mut Criterion) {
    let handler = CommandHandler::new(Arc::new(Store::new()));
    let parser = LineParser::new();
    let pipeline = b"SET user:1 Ariz\nGET user:1\nEXISTS user:1 user:2\nDEL user:1\n";

    let mut group = c.benchmark_group("executor");
    group.throughput(Throughput::Elements(4));

    group.bench_function("pipeline_4", |b| {
        b.iter(|| {
            let mut offset = 0;
            while let Ok(Some((command, consumed))) = parser.parse(&pipeline[offset..]) {
                black_box(handler.execute(command));
                offset += consumed;
            }
        });
    });

    group.finish();
}

/// Benchmark concurrent access
fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("concurrent");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("4_threads_mixed", |b| {
        b.iter(|| {
            let store = Arc::new(Store::new());
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || {
                        for i in 0..10_000 {
                            let key = format!("key:{}:{}", t, i);
                            store.set(key.clone(), "value".to_string());
                            store.get(&key);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(store.len());
        });
    });

    group.finish();
}

/// Benchmark KEYS
fn bench_keys(c: &mut Criterion) {
    let store = Arc::new(Store::new());

    for i in 0..1_000 {
        store.set(format!("user:{}", i), "user_data".to_string());
        store.set(format!("session:{}", i), "session_data".to_string());
    }

    let mut group = c.benchmark_group("keys");

    group.bench_function("keys_exact", |b| {
        let pattern = KeyPattern::new("user:500");
        b.iter(|| black_box(store.keys(&pattern)));
    });

    group.bench_function("keys_all", |b| {
        b.iter(|| black_box(store.keys(&KeyPattern::All)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_multi_key,
    bench_executor,
    bench_concurrent,
    bench_keys,
);

criterion_main!(benches);
