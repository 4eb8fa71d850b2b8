//! Benchmark for the trace recording hot path.

use criterion::{Criterion, criterion_group, criterion_main};
use openvpu_trace::TraceRing;
use std::hint::black_box;

fn bench_record(c: &mut Criterion) {
    let ring = TraceRing::new();

    c.bench_function("record_short_message", |b| {
        b.iter(|| {
            ring.record(black_box("interrupt: frame done, instance 0"));
        });
    });

    c.bench_function("record_truncated_message", |b| {
        let long = "x".repeat(200);
        b.iter(|| {
            ring.record(black_box(&long));
        });
    });

    c.bench_function("dump_recent_30", |b| {
        b.iter(|| {
            black_box(ring.dump_recent(30));
        });
    });
}

criterion_group!(benches, bench_record);
criterion_main!(benches);
