//! Core data types for the tickmatch engine.
//!
//! All numeric values use fixed-point representation (scaled by 10^8).
//!
//! ## Types
//!
//! - [`Order`]: A limit order with an explicit lifecycle state
//! - [`Side`]: Buy or Sell
//! - [`OrderState`]: New, PartiallyFilled, Filled, Canceled
//! - [`Trade`]: An executed match between two orders

mod order;
mod trade;
pub mod price;

// Re-export all types at module level
pub use order::{Order, OrderState, Side};
pub use trade::Trade;
