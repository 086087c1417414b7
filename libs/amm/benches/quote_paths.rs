//! Quote path benchmarks
//!
//! Measures the per-hop pricing cost and the full engine path for direct and
//! two-hop conversions against an in-memory pool table.

use amm::{ConstantProductMath, EngineConfig, MemoryPoolStore, PoolRecord, QuoteEngine, Variant};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use types::{Asset, ExtendedSymbol, Symbol};

fn pool(code: &str, connector: i64, outstanding: i64) -> PoolRecord {
    let base = Symbol::new(4, "BASE").unwrap();
    PoolRecord {
        pair: format!("{code}BASE"),
        connector_balance: Asset::new(connector, base).unwrap(),
        outstanding_balance: Asset::new(outstanding, Symbol::new(4, code).unwrap()).unwrap(),
        connector_weight: 50,
        enabled: true,
        reinvest_fees: true,
        price: 0.0,
        admin_fee_balance: Asset::zero(base),
    }
}

fn engine(variant: Variant) -> QuoteEngine<MemoryPoolStore> {
    let config = EngineConfig::new(
        ExtendedSymbol::new(Symbol::new(4, "BASE").unwrap(), "basetoken".parse().unwrap()),
        "dexrelays".parse().unwrap(),
        variant,
    );
    let store = MemoryPoolStore::with_records(
        config.pool_account,
        [
            pool("ABC", 10_000_000, 20_000_000),
            pool("XYZ", 5_000_000, 2_500_000),
        ],
    );
    QuoteEngine::new(config, store)
}

fn bench_constant_product(c: &mut Criterion) {
    c.bench_function("amount_out_small", |b| {
        b.iter(|| {
            ConstantProductMath::amount_out(
                black_box(10_000),
                black_box(1_000_000),
                black_box(2_000_000),
                black_box(20),
            )
        })
    });

    c.bench_function("amount_out_extreme", |b| {
        let max = types::MAX_AMOUNT;
        b.iter(|| {
            ConstantProductMath::amount_out(black_box(max), black_box(max), black_box(max), black_box(20))
        })
    });
}

fn bench_engine_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_amount_out");
    let abc = Symbol::new(4, "ABC").unwrap();
    let base = Symbol::new(4, "BASE").unwrap();
    let xyz = Symbol::new(4, "XYZ").unwrap();

    for variant in [Variant::General, Variant::Simplified] {
        let engine = engine(variant);

        let direct_in = Asset::new(100_000, base).unwrap();
        group.bench_with_input(BenchmarkId::new("direct", variant), &direct_in, |b, input| {
            b.iter(|| engine.get_amount_out(black_box(*input), abc))
        });

        let cross_in = Asset::new(100_000, abc).unwrap();
        group.bench_with_input(BenchmarkId::new("through_base", variant), &cross_in, |b, input| {
            b.iter(|| engine.get_amount_out(black_box(*input), xyz))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_constant_product, bench_engine_paths);
criterion_main!(benches);
