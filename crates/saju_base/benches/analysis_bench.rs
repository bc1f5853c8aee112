use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ElementTally, FourPillars, HarmonyPriority, TenGodCounts, chart_hidden_stems, chart_stages,
    detect, detect_sinsal, strength, transform_report,
};

fn reference_chart() -> FourPillars {
    FourPillars::new(
        saju_base::Pillar::from_cycle_index(16),
        saju_base::Pillar::from_cycle_index(21),
        saju_base::Pillar::from_cycle_index(19),
        saju_base::Pillar::from_cycle_index(56),
    )
}

fn relation_bench(c: &mut Criterion) {
    let chart = reference_chart();

    let mut group = c.benchmark_group("relations");
    group.bench_function("ten_god_counts", |b| {
        b.iter(|| TenGodCounts::of(black_box(&chart)))
    });
    group.bench_function("strength", |b| b.iter(|| strength(black_box(&chart))));
    group.bench_function("twelve_stages", |b| {
        b.iter(|| chart_stages(black_box(&chart)))
    });
    group.finish();
}

fn harmony_bench(c: &mut Criterion) {
    let chart = reference_chart();

    let mut group = c.benchmark_group("harmony");
    group.bench_function("detect_six_first", |b| {
        b.iter(|| detect(black_box(&chart), HarmonyPriority::SixFirst))
    });
    group.bench_function("detect_and_transform", |b| {
        b.iter(|| {
            let report = detect(black_box(&chart), HarmonyPriority::SixFirst);
            transform_report(ElementTally::of(&chart), &report)
        })
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let chart = reference_chart();

    let mut group = c.benchmark_group("lookups");
    group.bench_function("sinsal", |b| b.iter(|| detect_sinsal(black_box(&chart))));
    group.bench_function("hidden_stems", |b| {
        b.iter(|| chart_hidden_stems(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, relation_bench, harmony_bench, lookup_bench);
criterion_main!(benches);
