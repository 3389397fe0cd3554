//! Criterion benchmarks for the closed-form pricing functions.

use bsv_engine::{call_price, greeks, put_price, OptionType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_prices(c: &mut Criterion) {
    c.bench_function("call_price atm", |b| {
        b.iter(|| {
            call_price(
                black_box(100.0),
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.2),
            )
        })
    });

    c.bench_function("put_price atm", |b| {
        b.iter(|| {
            put_price(
                black_box(100.0),
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.2),
            )
        })
    });

    c.bench_function("greeks atm call", |b| {
        b.iter(|| {
            greeks(
                OptionType::Call,
                black_box(100.0),
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.2),
            )
        })
    });
}

criterion_group!(benches, bench_prices);
criterion_main!(benches);
