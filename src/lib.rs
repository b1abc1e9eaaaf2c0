//! # tickmatch
//!
//! Single-instrument limit order book with continuous price-time-priority
//! matching, plus the scaffolding to benchmark it tick-to-trade.
//!
//! ## Architecture
//!
//! The core is a triad of collaborating structures:
//! - **Types**: value types ([`Order`], [`Trade`], [`Side`], [`OrderState`])
//! - **OrderBook**: the authoritative [`OrderRegistry`] and the derived
//!   [`PriceLevelIndex`] with lazy-eviction top-of-book heaps
//! - **Engine**: the [`MatchingEngine`] crossing incoming orders against
//!   resting liquidity and keeping registry and index in lockstep
//!
//! Around the core, the harness modules generate synthetic ticks
//! ([`feed`]), export trades to CSV ([`logger`]), and aggregate
//! tick-to-trade latencies ([`metrics`]).
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same order sequence always produces the same trades
//! 2. **No Floating Point**: All prices and quantities are u64 fixed-point
//!    (10^8 scaling)
//! 3. **Single-Threaded Core**: Every operation runs to completion; the
//!    book is owned by one execution thread
//! 4. **No Hidden State**: All state lives in explicitly constructed
//!    engine instances

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Trade, Side, OrderState
pub mod types;

/// Order book: authoritative registry plus price-level aggregation
pub mod orderbook;

/// Matching engine: continuous price-time-priority crossing
pub mod engine;

/// Synthetic market data generation (harness)
pub mod feed;

/// Batched CSV trade export (harness)
pub mod logger;

/// Tick-to-trade latency statistics (harness)
pub mod metrics;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{MatchingEngine, RejectReason};
pub use feed::{FeedGenerator, Tick};
pub use logger::TradeLogger;
pub use metrics::LatencyStats;
pub use orderbook::{OrderRegistry, PriceLevel, PriceLevelIndex, NO_PRICE};
pub use types::{Order, OrderState, Side, Trade};
