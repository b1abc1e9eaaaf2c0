//! Trade type representing an executed match between two orders.
//!
//! ## Price Discovery
//!
//! A trade always executes at the resting order's price. The order already
//! in the book sets the execution price, not the aggressor; this is standard
//! price-time priority behavior.

/// A completed match between a buy order and a sell order.
///
/// ## Example
///
/// ```
/// use tickmatch::types::Trade;
///
/// let trade = Trade::new(
///     1,               // buy_order_id
///     2,               // sell_order_id
///     10_050_000_000,  // price: 100.50000000
///     50_000_000,      // quantity: 0.50000000
///     1703577600000,   // timestamp (ns)
/// );
/// assert!(trade.quantity > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Identifier of the buy-side order
    pub buy_order_id: u64,

    /// Identifier of the sell-side order
    pub sell_order_id: u64,

    /// Execution price in fixed-point (scaled by 10^8)
    /// Always the resting order's price
    pub price: u64,

    /// Executed quantity in fixed-point (scaled by 10^8), always > 0
    pub quantity: u64,

    /// Execution timestamp in nanoseconds
    pub timestamp: u64,
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        buy_order_id: u64,
        sell_order_id: u64,
        price: u64,
        quantity: u64,
        timestamp: u64,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            timestamp,
        }
    }

    /// Notional value of this trade (price * quantity) in raw fixed-point.
    ///
    /// The result is scaled by 10^16 (10^8 * 10^8); divide by SCALE to get
    /// a value on the usual 10^8 scale.
    pub fn notional_raw(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
