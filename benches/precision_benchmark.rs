// ============================================================================
// Precise Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Literal to DecimalValue, including exponent expansion
// 2. Arithmetic - Exact add/mul and truncated division
// 3. Normalization - decimal_to_precision per precision convention
// 4. Market Resolution - amount/price resolution against a market
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use precise_decimal::prelude::*;
use std::hint::black_box;

fn dec(s: &str) -> DecimalValue {
    s.parse().unwrap()
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for literal in ["42", "38567.123456", "0.00000001234", "1.5e-8", "123456789012345678901234.5678"] {
        group.bench_with_input(BenchmarkId::from_parameter(literal), &literal, |b, literal| {
            b.iter(|| black_box(literal.parse::<DecimalValue>()))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let price = dec("38567.5");
    let amount = dec("0.00123456");
    let fee = dec("0.00000012");

    group.bench_function("add", |b| b.iter(|| black_box(&amount + &fee)));
    group.bench_function("sub", |b| b.iter(|| black_box(&amount - &fee)));
    group.bench_function("mul", |b| b.iter(|| black_box(&price * &amount)));

    for scale in [8u32, 18, 36] {
        group.bench_with_input(BenchmarkId::new("div", scale), &scale, |b, &scale| {
            b.iter(|| black_box(price.div_with_scale(&amount, scale)))
        });
    }

    group.bench_function("cmp", |b| b.iter(|| black_box(price > amount)));

    group.finish();
}

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_to_precision");

    let value = dec("38567.345678");
    let specs = [
        ("decimal_places", PrecisionSpec::decimal_places(2).unwrap()),
        ("significant_digits", PrecisionSpec::significant_digits(5).unwrap()),
        ("tick_size", PrecisionSpec::tick_size(dec("0.5")).unwrap()),
        (
            "tick_size_padded",
            PrecisionSpec::tick_size(dec("0.001")).unwrap().with_padding(true),
        ),
    ];

    for (name, spec) in specs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), spec, |b, spec| {
            b.iter(|| black_box(decimal_to_precision(&value, spec)))
        });
    }

    group.finish();
}

// ============================================================================
// Market Resolution Benchmarks
// ============================================================================

fn benchmark_market_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_resolution");

    let market = MarketPrecision::tick_size_style("0.001", "0.5").unwrap();
    let price = dec("38567.3");
    let amount = dec("0.0129");

    group.bench_function("price_to_precision", |b| {
        b.iter(|| black_box(price_to_precision(&price, &market)))
    });
    group.bench_function("amount_to_precision", |b| {
        b.iter(|| black_box(amount_to_precision(&amount, &market)))
    });
    group.bench_function("order_from_strings", |b| {
        b.iter(|| {
            let price = price_to_precision(&dec(black_box("38567.3")), &market).unwrap();
            let amount = amount_to_precision(&dec(black_box("0.0129")), &market).unwrap();
            black_box(&price * &amount)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_arithmetic,
    benchmark_normalization,
    benchmark_market_resolution
);
criterion_main!(benches);
