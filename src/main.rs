//! Tick-to-trade benchmark harness.
//!
//! Generates a deterministic synthetic tick stream, derives near-mid limit
//! orders from it, submits them to the matching engine, and reports the
//! tick-to-trade latency distribution plus a final top-of-book snapshot.
//! Executed trades are batched out to CSV.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tickmatch::logger::DEFAULT_BATCH_SIZE;
use tickmatch::types::price::{from_fixed_trimmed, SCALE};
use tickmatch::{FeedGenerator, LatencyStats, MatchingEngine, Order, Side, TradeLogger};

/// Order book latency harness
#[derive(Parser, Debug)]
#[command(name = "tickmatch", about = "Limit order book tick-to-trade benchmark")]
struct Args {
    /// Number of synthetic ticks to process
    #[arg(long, default_value_t = 10_000)]
    ticks: usize,

    /// RNG seed for the tick stream and order flow
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Skip capacity pre-reservation (measures rehash/realloc impact)
    #[arg(long)]
    no_reserve: bool,

    /// CSV file receiving the executed trades
    #[arg(long, default_value = "trades.csv")]
    csv: PathBuf,

    /// Number of trades buffered between CSV flushes
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!(
        ticks = args.ticks,
        seed = args.seed,
        reserve = !args.no_reserve,
        "starting harness"
    );

    let mut engine = MatchingEngine::new();
    if !args.no_reserve {
        engine.reserve(args.ticks);
    }

    let mut feed = FeedGenerator::new(args.seed);
    let ticks = feed.generate(args.ticks);

    // Separate stream for the order flow so tick prices stay comparable
    // across flow variations
    let mut flow = ChaCha8Rng::seed_from_u64(args.seed.wrapping_add(1));

    let mut logger = TradeLogger::new(&args.csv, args.batch_size)?;
    let mut stats = LatencyStats::new();
    let mut trade_count: u64 = 0;

    let run_start = Instant::now();

    for (i, tick) in ticks.iter().enumerate() {
        // Place orders near the mid with a small skew toward crossing
        let mid = tick.mid();
        let is_buy = flow.gen_bool(0.5);
        let qty: u64 = flow.gen_range(10..=200) * SCALE;
        let skew: u64 = flow.gen_range(0..=10_000_000); // up to 0.10
        let price = if is_buy {
            mid.saturating_add(skew)
        } else {
            mid.saturating_sub(skew)
        };
        let side = if is_buy { Side::Buy } else { Side::Sell };

        let submitted_at = Instant::now();
        let timestamp = run_start.elapsed().as_nanos() as u64;
        let order = Order::new((i + 1) as u64, side, price, qty, timestamp);

        match engine.submit(order, timestamp) {
            Ok(trades) if !trades.is_empty() => {
                stats.record(submitted_at.elapsed().as_nanos() as u64);
                trade_count += trades.len() as u64;
                logger.append(&trades)?;
            }
            Ok(_) => {}
            Err(reason) => warn!(order_id = i + 1, %reason, "order rejected"),
        }
    }

    logger.flush()?;

    let elapsed = run_start.elapsed();
    info!(
        trades = trade_count,
        levels = engine.level_count(),
        orders = engine.registered_orders(),
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );
    info!("tick-to-trade latency: {}", stats.summary());
    info!(
        best_bid = %from_fixed_trimmed(engine.best_bid()),
        best_ask = %from_fixed_trimmed(engine.best_ask()),
        "final top of book"
    );

    Ok(())
}
