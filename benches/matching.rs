//! Benchmarks for the tickmatch matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use tickmatch::{MatchingEngine, Order, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

fn make_buy_order(id: u64, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Buy, price, quantity, 0)
}

fn make_sell_order(id: u64, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Sell, price, quantity, 0)
}

/// Rest `count` sell orders at ascending price levels, starting from
/// `next_id`. Returns the next free id.
fn populate_asks(
    engine: &mut MatchingEngine,
    next_id: u64,
    count: usize,
    base_price: u64,
    price_step: u64,
    quantity: u64,
) -> u64 {
    for i in 0..count {
        let price = base_price + (i as u64 * price_step);
        let id = next_id + i as u64;
        engine
            .submit(make_sell_order(id, price, quantity), 0)
            .expect("resting ask rejected");
    }
    next_id + count as u64
}

/// Rest `count` buy orders at descending price levels.
fn populate_bids(
    engine: &mut MatchingEngine,
    next_id: u64,
    count: usize,
    base_price: u64,
    price_step: u64,
    quantity: u64,
) -> u64 {
    for i in 0..count {
        let price = base_price - (i as u64 * price_step);
        let id = next_id + i as u64;
        engine
            .submit(make_buy_order(id, price, quantity), 0)
            .expect("resting bid rejected");
    }
    next_id + count as u64
}

/// Generate a deterministic mixed batch of orders for throughput testing.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    // Base price: 100.00000000 (fixed-point)
    let base_price: u64 = 10_000_000_000;

    for i in 0..count {
        let is_buy = rng.gen_bool(0.5);
        // Price variation: up to 1.00000000 either way
        let price_offset: i64 = rng.gen_range(-100_000_000i64..=100_000_000i64);
        let price = (base_price as i64 + price_offset) as u64;
        // Quantity: 0.01 to 1.0
        let quantity: u64 = rng.gen_range(1_000_000..=100_000_000);

        let order = if is_buy {
            make_buy_order((i + 1) as u64, price, quantity)
        } else {
            make_sell_order((i + 1) as u64, price, quantity)
        };
        orders.push(order);
    }

    orders
}

// ============================================================================
// BENCHMARK: Single Match Latency
// ============================================================================

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(1000);

    // Match a buy against the best ask of a 1k-deep book. The book mutates
    // across samples; once the cheap asks drain, later samples degrade
    // toward the rest-on-book path.
    group.bench_function("against_1k_orders", |b| {
        let mut engine = MatchingEngine::with_capacity(100_000);
        populate_asks(&mut engine, 1, 1000, 10_000_000_000, 100_000_000, 100_000_000);

        let mut next_id = 1_000_000u64;
        b.iter_batched(
            || {
                next_id += 1;
                make_buy_order(next_id, 10_000_000_000, 100_000_000)
            },
            |buy_order| black_box(engine.submit(buy_order, 0)),
            BatchSize::SmallInput,
        );
    });

    // A buy large enough to sweep ~10 price levels
    group.bench_function("multi_level_sweep", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(200);
                // 100 asks spaced 0.1 apart, 0.1 quantity each
                populate_asks(&mut engine, 1, 100, 10_000_000_000, 10_000_000, 10_000_000);

                // Large enough to clear ~10 levels
                let buy = make_buy_order(999_999, 10_100_000_000, 100_000_000);
                (engine, buy)
            },
            |(mut engine, buy)| black_box(engine.submit(buy, 0)),
            BatchSize::SmallInput,
        );
    });

    // No match: the order rests on the book
    group.bench_function("no_match_rest_on_book", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                populate_asks(&mut engine, 1, 1000, 10_000_000_000, 100_000_000, 100_000_000);

                let buy = make_buy_order(999_999, 9_900_000_000, 100_000_000);
                (engine, buy)
            },
            |(mut engine, buy)| black_box(engine.submit(buy, 0)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Order Operations
// ============================================================================

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("submit_to_empty", |b| {
        b.iter_batched(
            MatchingEngine::new,
            |mut engine| {
                let order = make_buy_order(1, 10_000_000_000, 100_000_000);
                black_box(engine.submit(order, 0))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("submit_to_1k_book", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                let next = populate_asks(&mut engine, 1, 500, 10_000_000_000, 100_000_000, 100_000_000);
                populate_bids(&mut engine, next, 500, 9_990_000_000, 100_000_000, 100_000_000);
                engine
            },
            |mut engine| {
                let order = make_buy_order(999_999, 9_000_000_000, 100_000_000);
                black_box(engine.submit(order, 0))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_order", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::with_capacity(2000);
                populate_bids(&mut engine, 1, 1000, 10_000_000_000, 100_000, 100_000_000);
                engine
            },
            |mut engine| {
                // Middle of the book
                black_box(engine.cancel(500))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("orders", batch_size),
            &batch_size,
            |b, &size| {
                let orders = generate_order_batch(size, 42);

                b.iter_batched(
                    || (MatchingEngine::with_capacity(size * 2), orders.clone()),
                    |(mut engine, orders)| {
                        for (i, order) in orders.into_iter().enumerate() {
                            black_box(engine.submit(order, i as u64)).ok();
                        }
                        engine.registered_orders()
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Determinism Verification
// ============================================================================

fn bench_determinism(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinism");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("1k_deterministic_sequence", |b| {
        let orders = generate_order_batch(1000, 12345);

        b.iter_batched(
            || orders.clone(),
            |orders| {
                let mut engine = MatchingEngine::with_capacity(2000);
                let mut trade_count = 0;

                for (i, order) in orders.into_iter().enumerate() {
                    if let Ok(trades) = engine.submit(order, i as u64) {
                        trade_count += trades.len();
                    }
                }

                black_box((engine.level_count(), trade_count))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_single_match,
    bench_order_operations,
    bench_throughput,
    bench_determinism
);

criterion_main!(benches);
