//! Benchmarks for the analytic layer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optval_core::types::{OptionContract, OptionKind};
use optval_models::analytical::black_scholes;
use optval_models::implied::{ImpliedVolSolver, OptionQuote};

fn bench_black_scholes_price(c: &mut Criterion) {
    let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();

    c.bench_function("black_scholes_call_price", |b| {
        b.iter(|| black_scholes::price(black_box(&contract)))
    });
}

fn bench_implied_volatility(c: &mut Criterion) {
    let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
    let premium = black_scholes::price(&contract);
    let quote = OptionQuote::new(100.0, 100.0, 1.0, 0.05, premium, OptionKind::Call).unwrap();
    let solver = ImpliedVolSolver::default();

    c.bench_function("implied_volatility_atm", |b| {
        b.iter(|| solver.solve(black_box(&quote)))
    });
}

criterion_group!(benches, bench_black_scholes_price, bench_implied_volatility);
criterion_main!(benches);
