use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semidense::RunIndex;

// 1000 passes of 3600 values each, separated by irregular gaps.
fn passes() -> RunIndex {
    let mut r = RunIndex::with_capacity(1000);
    let mut start = 0u32;
    for pass in 0..1000u32 {
        for v in start..start + 3600 {
            r.push(v);
        }
        start += 3600 + 40_000 + (pass * 7919) % 5000;
    }
    r
}

fn bench_run_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_index");
    let r = passes();
    let max = r.max().unwrap_or(0);

    group.bench_function("push_tail", |b| b.iter(passes));

    group.bench_function("push_interior", |b| {
        b.iter(|| {
            let mut r = r.clone();
            for k in 0..100u32 {
                r.push(black_box(k * (max / 100) + 3601));
            }
            r
        })
    });

    group.bench_function("index_of", |b| {
        b.iter(|| {
            for x in (0..max).step_by(4099) {
                black_box(r.index_of(x));
            }
        })
    });

    group.bench_function("select", |b| {
        b.iter(|| {
            for k in (0..r.len()).step_by(997) {
                black_box(r.select(k).ok());
            }
        })
    });
}

criterion_group!(benches, bench_run_index);
criterion_main!(benches);
