use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_rs::{Stem, analyze, annual};

fn facade_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.bench_function("analyze_chart_string", |b| {
        b.iter(|| analyze(black_box("庚辰 乙酉 癸未 庚申")).expect("valid chart"))
    });
    group.bench_function("annual_decade", |b| {
        b.iter(|| annual(black_box(2020..=2029), Stem::Gye).expect("valid range"))
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
