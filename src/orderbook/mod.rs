//! Order book storage for the tickmatch engine.
//!
//! ## Architecture
//!
//! Book state is split into two collaborating structures:
//!
//! - [`OrderRegistry`]: the authoritative store for order existence, side,
//!   price, remaining quantity, and lifecycle state
//! - [`PriceLevelIndex`]: a derived aggregation keyed by price, with FIFO
//!   queues per level and lazy-eviction heaps for top-of-book queries
//! - [`PriceLevel`]: the per-price aggregate (total quantity, order count,
//!   time-priority queue)
//!
//! The registry never updates the index and vice versa; the matching engine
//! mutates both in lockstep so their views never diverge.
//!
//! ## Performance
//!
//! | Operation            | Complexity      |
//! |----------------------|-----------------|
//! | Register order       | O(1)            |
//! | Cancel/amend routing | O(1)            |
//! | Insert into level    | O(log n)        |
//! | Best bid/ask         | O(log n) amortized |

pub mod index;
pub mod level;
pub mod registry;

pub use index::{PriceLevelIndex, NO_PRICE};
pub use level::PriceLevel;
pub use registry::OrderRegistry;
