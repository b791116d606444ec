use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slot_store::SlotStore;
use slotmap::SlotMap;
use std::hint::black_box;

// ========== 基础操作测试 ==========

/// 测试插入操作性能
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("SlotStore", size), size, |b, &size| {
            b.iter(|| {
                let mut store = SlotStore::new();
                for i in 0..size {
                    store.insert(black_box(i));
                }
                store
            });
        });

        group.bench_with_input(BenchmarkId::new("SlotMap", size), size, |b, &size| {
            b.iter(|| {
                let mut map = SlotMap::new();
                for i in 0..size {
                    map.insert(black_box(i));
                }
                map
            });
        });
    }

    group.finish();
}

/// 测试查询操作性能
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [100, 1000, 10000].iter() {
        // 准备 SlotStore
        let mut store = SlotStore::new();
        let handles: Vec<_> = (0..*size).map(|i| store.insert(i)).collect();

        group.bench_with_input(BenchmarkId::new("SlotStore", size), size, |b, _| {
            b.iter(|| {
                for &handle in &handles {
                    black_box(store.get(handle));
                }
            });
        });

        // 准备 SlotMap
        let mut slot_map = SlotMap::new();
        let slot_keys: Vec<_> = (0..*size).map(|i| slot_map.insert(i)).collect();

        group.bench_with_input(BenchmarkId::new("SlotMap", size), size, |b, _| {
            b.iter(|| {
                for &key in &slot_keys {
                    black_box(slot_map.get(key));
                }
            });
        });
    }

    group.finish();
}

/// 测试删除操作性能（按插入顺序删除，最后一次删除触发收缩）
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("SlotStore", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut store = SlotStore::new();
                    let handles: Vec<_> = (0..size).map(|i| store.insert(i)).collect();
                    (store, handles)
                },
                |(mut store, handles)| {
                    for handle in handles {
                        black_box(store.remove(handle));
                    }
                    store
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("SlotMap", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map = SlotMap::new();
                    let keys: Vec<_> = (0..size).map(|i| map.insert(i)).collect();
                    (map, keys)
                },
                |(mut map, keys)| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// 测试遍历性能
fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for size in [100, 1000, 10000].iter() {
        let mut store = SlotStore::new();
        for i in 0..*size {
            store.insert(i);
        }

        group.bench_with_input(BenchmarkId::new("SlotStore", size), size, |b, _| {
            b.iter(|| store.iter().map(|(_, v)| *v).sum::<usize>());
        });

        let mut slot_map = SlotMap::new();
        for i in 0..*size {
            slot_map.insert(i);
        }

        group.bench_with_input(BenchmarkId::new("SlotMap", size), size, |b, _| {
            b.iter(|| slot_map.iter().map(|(_, v)| *v).sum::<usize>());
        });
    }

    group.finish();
}

// ========== 复杂场景测试 ==========

/// 测试高频复用：删除后立即插入同一位置
fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("SlotStore", size), size, |b, &size| {
            let mut store = SlotStore::new();
            let mut handles: Vec<_> = (0..size).map(|i| store.insert(i)).collect();
            b.iter(|| {
                for (i, handle) in handles.iter_mut().enumerate() {
                    store.destruct(*handle);
                    *handle = store.insert(black_box(i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("SlotMap", size), size, |b, &size| {
            let mut map = SlotMap::new();
            let mut keys: Vec<_> = (0..size).map(|i| map.insert(i)).collect();
            b.iter(|| {
                for (i, key) in keys.iter_mut().enumerate() {
                    map.remove(*key);
                    *key = map.insert(black_box(i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_remove,
    bench_iter,
    bench_churn
);
criterion_main!(benches);
