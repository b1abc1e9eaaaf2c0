//! Order types for the tickmatch engine.
//!
//! ## Fixed-Point Representation
//!
//! Prices and quantities are stored as u64 scaled by 10^8 (SCALE constant).
//! This provides 8 decimal places of precision without floating-point errors.
//!
//! ## Lifecycle
//!
//! Every order carries an explicit lifecycle state:
//!
//! ```text
//! New --fill(partial)--> PartiallyFilled --fill(complete)--> Filled
//! New --fill(complete)--> Filled
//! New | PartiallyFilled --cancel--> Canceled
//! ```
//!
//! `Filled` and `Canceled` are terminal: fills, cancels, amends, and price
//! replaces against a terminal order are rejected without changing state.

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// True for `Side::Buy`
    #[inline]
    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }
}

// ============================================================================
// OrderState enum
// ============================================================================

/// Lifecycle state of an order.
///
/// State transitions are driven exclusively by [`Order::fill`],
/// [`Order::cancel`], and [`Order::amend_remaining`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderState {
    /// Accepted, no executions yet
    #[default]
    New,
    /// At least one execution, quantity still remaining
    PartiallyFilled,
    /// Fully executed (terminal)
    Filled,
    /// Canceled before full execution (terminal)
    Canceled,
}

impl OrderState {
    /// Terminal states reject every further mutation
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Filled | OrderState::Canceled)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// ## Fields
///
/// Price and quantity fields use fixed-point representation (scaled by 10^8).
/// The identifier is assigned externally; it must be unique but need not be
/// monotonic.
///
/// ## Example
///
/// ```
/// use tickmatch::types::{Order, OrderState, Side};
///
/// // Buy 1.0 unit at 100.50000000
/// let order = Order::new(1, Side::Buy, 10_050_000_000, 100_000_000, 0);
/// assert_eq!(order.state, OrderState::New);
/// assert_eq!(order.remaining, order.quantity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (externally assigned)
    pub id: u64,

    /// Order side
    pub side: Side,

    /// Limit price in fixed-point (scaled by 10^8)
    pub price: u64,

    /// Original quantity in fixed-point (scaled by 10^8)
    pub quantity: u64,

    /// Remaining quantity (decremented as the order is matched)
    pub remaining: u64,

    /// Lifecycle state
    pub state: OrderState,

    /// Submission timestamp in nanoseconds
    pub timestamp: u64,
}

impl Order {
    /// Create a new limit order in state `New`
    pub fn new(id: u64, side: Side, price: u64, quantity: u64, timestamp: u64) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            remaining: quantity,
            state: OrderState::New,
            timestamp,
        }
    }

    /// Check if the order is fully executed
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Quantity executed so far
    #[inline]
    pub fn filled_quantity(&self) -> u64 {
        self.quantity.saturating_sub(self.remaining)
    }

    /// Apply an execution to this order.
    ///
    /// Rejects a zero quantity and any mutation of a terminal order. An
    /// execution of at least the remaining quantity drives the order straight
    /// to `Filled`; a smaller one decrements the remainder and marks the
    /// order `PartiallyFilled`.
    ///
    /// # Returns
    ///
    /// `true` if the fill was applied
    pub fn fill(&mut self, exec_qty: u64) -> bool {
        if exec_qty == 0 || self.state.is_terminal() {
            return false;
        }
        if exec_qty >= self.remaining {
            self.remaining = 0;
            self.state = OrderState::Filled;
        } else {
            self.remaining -= exec_qty;
            self.state = OrderState::PartiallyFilled;
        }
        true
    }

    /// Cancel this order.
    ///
    /// # Returns
    ///
    /// `true` if the order was active and is now `Canceled`
    pub fn cancel(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = OrderState::Canceled;
        true
    }

    /// Set the remaining quantity directly.
    ///
    /// An amend to zero marks the order `Filled` (fully executed through
    /// external means). A nonzero amend keeps a `New` order `New`; an order
    /// that has already traded stays `PartiallyFilled`.
    ///
    /// # Returns
    ///
    /// `true` if the amend was applied
    pub fn amend_remaining(&mut self, new_qty: u64) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.remaining = new_qty;
        if new_qty == 0 {
            self.state = OrderState::Filled;
        } else if self.state != OrderState::New {
            self.state = OrderState::PartiallyFilled;
        }
        true
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
