//! Continuous matching of incoming orders against resting liquidity.
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - Within a price level, resting orders fill oldest first (price-time
//!   priority)
//! - The execution price is always the resting order's price
//! - **Partial fills** are supported; an unfilled remainder rests on the book
//! - An incoming order is only added to the book after matching, so it can
//!   never trade against itself

use thiserror::Error;

use crate::orderbook::{OrderRegistry, PriceLevelIndex, NO_PRICE};
use crate::types::{Order, OrderState, Side, Trade};

/// Why a submission was rejected before touching the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// An order with this id is already registered
    #[error("order id {0} already exists")]
    DuplicateOrderId(u64),

    /// Quantity must be positive
    #[error("order quantity must be positive")]
    InvalidQuantity,

    /// Price zero is the empty-market sentinel and cannot carry an order
    #[error("order price must be positive")]
    InvalidPrice,
}

/// Matching engine owning the registry and the price-level index.
///
/// Every state change that touches both structures goes through the engine,
/// so callers always observe them in agreement. All operations run to
/// completion; there is no I/O or suspension inside the engine.
///
/// ## Example
///
/// ```
/// use tickmatch::engine::MatchingEngine;
/// use tickmatch::types::{Order, Side};
///
/// let mut engine = MatchingEngine::with_capacity(1024);
///
/// // Resting sell at 100.50
/// engine.submit(Order::new(1, Side::Sell, 10_050_000_000, 100_000_000, 0), 0).unwrap();
///
/// // Crossing buy
/// let trades = engine
///     .submit(Order::new(2, Side::Buy, 10_060_000_000, 100_000_000, 1), 1)
///     .unwrap();
///
/// assert_eq!(trades.len(), 1);
/// assert_eq!(trades[0].price, 10_050_000_000);
/// ```
#[derive(Debug, Default)]
pub struct MatchingEngine {
    registry: OrderRegistry,
    index: PriceLevelIndex,
}

impl MatchingEngine {
    /// Create a new empty engine
    pub fn new() -> Self {
        Self {
            registry: OrderRegistry::new(),
            index: PriceLevelIndex::new(),
        }
    }

    /// Create an engine with pre-allocated capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            registry: OrderRegistry::with_capacity(order_capacity),
            index: PriceLevelIndex::with_capacity(order_capacity),
        }
    }

    /// Grow capacity ahead of a known load.
    ///
    /// Purely a performance hint; observable behavior is unchanged.
    pub fn reserve(&mut self, expected_orders: usize) {
        self.registry.reserve(expected_orders);
        self.index.reserve(expected_orders);
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit an order, crossing it against the book.
    ///
    /// The order is registered first, then matched against the opposing
    /// side's best price while it keeps crossing; each fill updates the
    /// registry and the index in lockstep. Whatever quantity is left rests
    /// on the book at the order's limit price.
    ///
    /// Trades are returned in the order the matches occurred, each at the
    /// resting order's price.
    ///
    /// # Errors
    ///
    /// Rejected before any mutation for a duplicate id, a zero quantity, or
    /// a zero price.
    pub fn submit(&mut self, order: Order, timestamp: u64) -> Result<Vec<Trade>, RejectReason> {
        if order.quantity == 0 {
            return Err(RejectReason::InvalidQuantity);
        }
        if order.price == NO_PRICE {
            return Err(RejectReason::InvalidPrice);
        }
        if self.registry.exists(order.id) {
            return Err(RejectReason::DuplicateOrderId(order.id));
        }

        let id = order.id;
        let side = order.side;
        let limit = order.price;

        // Registered now so fills below are recorded against it; it enters
        // the index only after matching, which rules out self-crossing.
        self.registry.create(order);

        let mut trades = Vec::new();

        while self.registry.remaining_qty(id) > 0 {
            let best = match side {
                Side::Buy => self.index.best_ask(),
                Side::Sell => self.index.best_bid(),
            };
            if best == NO_PRICE {
                break;
            }
            let crosses = match side {
                Side::Buy => limit >= best,
                Side::Sell => limit <= best,
            };
            if !crosses {
                break;
            }

            let Some(resting_id) = self.index.front_order(side.opposite(), best) else {
                break;
            };
            let resting_remaining = self.registry.remaining_qty(resting_id);
            if resting_remaining == 0 {
                // The index got ahead of the registry; drop the husk and rescan
                self.index.remove(resting_id);
                continue;
            }

            let exec_qty = self.registry.remaining_qty(id).min(resting_remaining);
            let (buy_id, sell_id) = match side {
                Side::Buy => (id, resting_id),
                Side::Sell => (resting_id, id),
            };
            trades.push(Trade::new(buy_id, sell_id, best, exec_qty, timestamp));

            self.registry.fill(resting_id, exec_qty);
            self.registry.fill(id, exec_qty);

            if self.registry.state(resting_id) == OrderState::Filled {
                self.index.remove(resting_id);
            } else {
                self.index
                    .amend(resting_id, self.registry.remaining_qty(resting_id));
            }
        }

        let remaining = self.registry.remaining_qty(id);
        if remaining > 0 {
            self.index.insert(id, limit, remaining, side);
        }

        Ok(trades)
    }

    // ========================================================================
    // Lifecycle mutators
    // ========================================================================

    /// Cancel an order, removing it from the book.
    ///
    /// # Returns
    ///
    /// `false` if the id is unknown or the order is already terminal; the
    /// book is untouched in that case
    pub fn cancel(&mut self, id: u64) -> bool {
        if !self.registry.cancel(id) {
            return false;
        }
        self.index.remove(id);
        true
    }

    /// Set an order's remaining quantity.
    ///
    /// An amend to zero drives the order to `Filled` and removes it from
    /// its price level; any other value adjusts the level aggregate by the
    /// delta.
    ///
    /// # Returns
    ///
    /// `false` if the id is unknown or the order is terminal
    pub fn amend_quantity(&mut self, id: u64, new_qty: u64) -> bool {
        if !self.registry.amend_quantity(id, new_qty) {
            return false;
        }
        if new_qty == 0 {
            self.index.remove(id);
        } else {
            self.index.amend(id, new_qty);
        }
        true
    }

    /// Move an order to a new price.
    ///
    /// The order is pulled from its old level and reinserted at the new one
    /// with its current remaining quantity, so it forfeits queue position
    /// (the usual venue convention for cancel/replace). Nothing is mutated
    /// when the id is unknown, the order is terminal, or the new price is
    /// the zero sentinel.
    pub fn replace_price(&mut self, id: u64, new_price: u64) -> bool {
        if new_price == NO_PRICE || self.registry.state(id).is_terminal() || !self.registry.exists(id)
        {
            return false;
        }
        let Some(side) = self.registry.side(id) else {
            return false;
        };
        let remaining = self.registry.remaining_qty(id);

        self.index.remove(id);
        self.registry.replace_price(id, new_price);
        self.index.insert(id, new_price, remaining, side);
        true
    }

    // ========================================================================
    // Market-state queries
    // ========================================================================

    /// Best active bid price, zero when no bids rest
    #[inline]
    pub fn best_bid(&mut self) -> u64 {
        self.index.best_bid()
    }

    /// Best active ask price, zero when no asks rest
    #[inline]
    pub fn best_ask(&mut self) -> u64 {
        self.index.best_ask()
    }

    /// Number of resting orders at a price
    #[inline]
    pub fn order_count(&self, price: u64) -> usize {
        self.index.order_count(price)
    }

    /// Total resting quantity at a price
    #[inline]
    pub fn total_volume(&self, price: u64) -> u64 {
        self.index.total_volume(price)
    }

    /// Number of active price levels
    #[inline]
    pub fn level_count(&self) -> usize {
        self.index.level_count()
    }

    // ========================================================================
    // Order queries
    // ========================================================================

    /// Lifecycle state of an order, `Canceled` for an unknown id
    #[inline]
    pub fn order_state(&self, id: u64) -> OrderState {
        self.registry.state(id)
    }

    /// Remaining quantity of an order, zero for an unknown id
    #[inline]
    pub fn remaining_qty(&self, id: u64) -> u64 {
        self.registry.remaining_qty(id)
    }

    /// Limit price of an order, zero for an unknown id
    #[inline]
    pub fn order_price(&self, id: u64) -> u64 {
        self.registry.price(id)
    }

    /// Total number of registered orders, terminal ones included
    #[inline]
    pub fn registered_orders(&self) -> usize {
        self.registry.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
