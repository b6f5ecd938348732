#[macro_use]
extern crate criterion;

use criterion::Criterion;

use sporhund_core::alloc::arena::Arena;
use sporhund_core::counter::table::CounterTable;

fn bench_counter_record_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_throughput");

    for subjects in [16u32, 256, 4096] {
        group.throughput(criterion::Throughput::Elements(1));
        group.bench_function(format!("subjects_{}", subjects), |b| {
            let table = CounterTable::new();
            for subject in 0..subjects {
                table.record(subject, 0u32);
            }
            let mut next = 0u32;
            b.iter(|| {
                let subject = next % subjects;
                next = next.wrapping_add(1);
                table.record(subject, 1u32);
                table.query(&subject, &1u32)
            });
        });
    }
    group.finish();
}

fn bench_arena_allocate_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_throughput");

    for size in [16usize, 64, 256] {
        group.throughput(criterion::Throughput::Bytes(size as u64));
        group.bench_function(format!("size_{}", size), |b| {
            let mut arena = Arena::new();
            b.iter(|| {
                let snapshot = arena.snapshot();
                arena.allocate(size).unwrap();
                arena.restore(snapshot);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_counter_record_query, bench_arena_allocate_restore);
criterion_main!(benches);
