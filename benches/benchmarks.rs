/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use calc_benefits::benefits::{total_benefits, yearly_benefits};
use calc_benefits::report::format_usd;
use calc_benefits::CalculationInput;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn accumulation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Accumulation");
    let career = CalculationInput::new(45000, 40, 4.0, 6.5).unwrap();

    group.bench_function("total_benefits", |b| {
        b.iter(|| black_box(total_benefits(black_box(&career))))
    });

    group.bench_function("yearly_benefits", |b| {
        b.iter(|| {
            yearly_benefits(black_box(&career))
                .map(|term| term.future_value)
                .sum::<f64>()
        })
    });

    group.finish();
}

fn formatting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatting");

    group.bench_function("format_usd", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(format_usd(black_box(i as f64 * 123.456)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, accumulation_benchmark, formatting_benchmark);
criterion_main!(benches);
