//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input sequence always produces the same trades
//! 2. **Fixed-Point Math**: No floating-point operations
//! 3. **Synchronous Execution**: Every operation runs to completion
//! 4. **Price-Time Priority**: Best price first, then FIFO within a level
//!
//! ## Example
//!
//! ```
//! use tickmatch::engine::MatchingEngine;
//! use tickmatch::types::{Order, Side};
//!
//! let mut engine = MatchingEngine::with_capacity(1000);
//!
//! // Resting sell order
//! engine.submit(Order::new(1, Side::Sell, 10_050_000_000, 100_000_000, 0), 0).unwrap();
//!
//! // Incoming buy order matches it
//! let trades = engine
//!     .submit(Order::new(2, Side::Buy, 10_050_000_000, 100_000_000, 1), 1)
//!     .unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! ```

pub mod matcher;

pub use matcher::{MatchingEngine, RejectReason};
