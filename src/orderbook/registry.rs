//! Order registry: the authoritative store for every order's state.
//!
//! ## Architecture
//!
//! The registry is the single source of truth for "does this order still
//! have quantity to trade". It owns existence, side, price, remaining
//! quantity, and lifecycle state, keyed by order identifier:
//!
//! - **Slab**: Pre-allocated storage for O(1) slot access
//! - **HashMap**: Order ID to slab key mapping for O(1) lookup
//!
//! Orders are never evicted; terminal orders stay queryable for post-trade
//! inspection. The price aggregation index is maintained separately by its
//! callers, so a registry mutation alone never touches it.
//!
//! ## Example
//!
//! ```
//! use tickmatch::orderbook::OrderRegistry;
//! use tickmatch::types::{Order, OrderState, Side};
//!
//! let mut registry = OrderRegistry::with_capacity(1024);
//! registry.create(Order::new(1, Side::Buy, 10_050_000_000, 100_000_000, 0));
//!
//! assert!(registry.fill(1, 100_000_000));
//! assert_eq!(registry.state(1), OrderState::Filled);
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::types::{Order, OrderState, Side};

/// Authoritative order store with O(1) id lookup.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    /// Pre-allocated order storage
    orders: Slab<Order>,

    /// Order ID to slab key mapping
    index: HashMap<u64, usize>,
}

impl OrderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            index: HashMap::with_capacity(order_capacity),
        }
    }

    /// Grow capacity ahead of a known load to avoid rehashing.
    ///
    /// Purely a performance hint; observable behavior is unchanged.
    pub fn reserve(&mut self, additional: usize) {
        self.orders.reserve(additional);
        self.index.reserve(additional);
    }

    /// Current pre-allocated capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Total number of registered orders, terminal ones included
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders were ever registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // ========================================================================
    // Create / Cancel / Fill
    // ========================================================================

    /// Register a new order.
    ///
    /// Rejects a duplicate id and a zero quantity; nothing is stored in
    /// either case.
    ///
    /// # Returns
    ///
    /// The storage key for the accepted order, `None` on rejection
    pub fn create(&mut self, order: Order) -> Option<usize> {
        if order.quantity == 0 || self.index.contains_key(&order.id) {
            return None;
        }
        let id = order.id;
        let key = self.orders.insert(order);
        self.index.insert(id, key);
        Some(key)
    }

    /// Cancel an order.
    ///
    /// # Returns
    ///
    /// `false` if the id is unknown or the order is already terminal
    pub fn cancel(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(order) => order.cancel(),
            None => false,
        }
    }

    /// Apply an execution to an order.
    ///
    /// Rejects a zero quantity, an unknown id, and a terminal order. An
    /// execution of at least the remaining quantity drives the order to
    /// `Filled`; a smaller one leaves it `PartiallyFilled`.
    pub fn fill(&mut self, id: u64, exec_qty: u64) -> bool {
        match self.get_mut(id) {
            Some(order) => order.fill(exec_qty),
            None => false,
        }
    }

    // ========================================================================
    // Amend / Replace
    // ========================================================================

    /// Set an order's remaining quantity.
    ///
    /// An amend to zero drives the order to `Filled` (fully executed through
    /// external means). Rejected for unknown or terminal orders.
    pub fn amend_quantity(&mut self, id: u64, new_qty: u64) -> bool {
        match self.get_mut(id) {
            Some(order) => order.amend_remaining(new_qty),
            None => false,
        }
    }

    /// Change an order's limit price in place.
    ///
    /// Quantity and state are untouched. The registry records only the new
    /// price; relocating the order between price levels is the caller's job.
    pub fn replace_price(&mut self, id: u64, new_price: u64) -> bool {
        match self.get_mut(id) {
            Some(order) if !order.state.is_terminal() => {
                order.price = new_price;
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================
    // Reads never signal errors: an unknown id reports Canceled for state,
    // zero for quantity and price, and false for side and existence.

    /// Lifecycle state, `Canceled` for an unknown id
    pub fn state(&self, id: u64) -> OrderState {
        self.get(id).map_or(OrderState::Canceled, |o| o.state)
    }

    /// Check if an order was ever registered
    #[inline]
    pub fn exists(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Remaining quantity, zero for an unknown id
    pub fn remaining_qty(&self, id: u64) -> u64 {
        self.get(id).map_or(0, |o| o.remaining)
    }

    /// Limit price, zero for an unknown id
    pub fn price(&self, id: u64) -> u64 {
        self.get(id).map_or(0, |o| o.price)
    }

    /// Buy-side check, false for an unknown id
    pub fn is_buy(&self, id: u64) -> bool {
        self.get(id).is_some_and(|o| o.side.is_buy())
    }

    /// Side of an order, if it exists
    pub fn side(&self, id: u64) -> Option<Side> {
        self.get(id).map(|o| o.side)
    }

    /// Get a reference to an order by id
    #[inline]
    pub fn get(&self, id: u64) -> Option<&Order> {
        let key = *self.index.get(&id)?;
        self.orders.get(key)
    }

    #[inline]
    fn get_mut(&mut self, id: u64) -> Option<&mut Order> {
        let key = *self.index.get(&id)?;
        self.orders.get_mut(key)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(id: u64, price: u64, qty: u64) -> Order {
        Order::new(id, Side::Buy, price, qty, 0)
    }

    fn sell(id: u64, price: u64, qty: u64) -> Order {
        Order::new(id, Side::Sell, price, qty, 0)
    }

    #[test]
    fn test_create_and_query() {
        let mut registry = OrderRegistry::with_capacity(16);

        assert!(registry.create(buy(1, 10_050_000_000, 100_000_000)).is_some());
        assert!(registry.exists(1));
        assert_eq!(registry.state(1), OrderState::New);
        assert_eq!(registry.remaining_qty(1), 100_000_000);
        assert_eq!(registry.price(1), 10_050_000_000);
        assert!(registry.is_buy(1));
        assert_eq!(registry.side(1), Some(Side::Buy));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_duplicate_rejected() {
        let mut registry = OrderRegistry::new();

        assert!(registry.create(buy(1, 10_050_000_000, 100_000_000)).is_some());
        assert!(registry.create(sell(1, 10_040_000_000, 50_000_000)).is_none());

        // First registration wins
        assert!(registry.is_buy(1));
        assert_eq!(registry.remaining_qty(1), 100_000_000);
    }

    #[test]
    fn test_create_zero_quantity_rejected() {
        let mut registry = OrderRegistry::new();

        assert!(registry.create(buy(1, 10_050_000_000, 0)).is_none());
        assert!(!registry.exists(1));
    }

    #[test]
    fn test_unknown_id_fallbacks() {
        let registry = OrderRegistry::new();

        assert_eq!(registry.state(404), OrderState::Canceled);
        assert_eq!(registry.remaining_qty(404), 0);
        assert_eq!(registry.price(404), 0);
        assert!(!registry.is_buy(404));
        assert!(registry.side(404).is_none());
        assert!(!registry.exists(404));
    }

    #[test]
    fn test_fill_transitions() {
        let mut registry = OrderRegistry::new();
        registry.create(buy(1, 10_050_000_000, 100_000_000));

        assert!(registry.fill(1, 40_000_000));
        assert_eq!(registry.state(1), OrderState::PartiallyFilled);
        assert_eq!(registry.remaining_qty(1), 60_000_000);

        assert!(registry.fill(1, 60_000_000));
        assert_eq!(registry.state(1), OrderState::Filled);
        assert_eq!(registry.remaining_qty(1), 0);

        // Terminal: no further fills
        assert!(!registry.fill(1, 1));
    }

    #[test]
    fn test_fill_invalid_args() {
        let mut registry = OrderRegistry::new();
        registry.create(buy(1, 10_050_000_000, 100_000_000));

        assert!(!registry.fill(1, 0));
        assert!(!registry.fill(404, 10));
        assert_eq!(registry.state(1), OrderState::New);
    }

    #[test]
    fn test_cancel_idempotence() {
        let mut registry = OrderRegistry::new();
        registry.create(buy(1, 10_050_000_000, 100_000_000));

        assert!(registry.cancel(1));
        assert_eq!(registry.state(1), OrderState::Canceled);
        assert!(!registry.cancel(1));
        assert!(!registry.cancel(404));
    }

    #[test]
    fn test_amend_quantity() {
        let mut registry = OrderRegistry::new();
        registry.create(buy(1, 10_050_000_000, 100_000_000));

        assert!(registry.amend_quantity(1, 30_000_000));
        assert_eq!(registry.remaining_qty(1), 30_000_000);
        assert_eq!(registry.state(1), OrderState::New);

        assert!(registry.amend_quantity(1, 0));
        assert_eq!(registry.state(1), OrderState::Filled);

        assert!(!registry.amend_quantity(1, 10));
        assert!(!registry.amend_quantity(404, 10));
    }

    #[test]
    fn test_replace_price() {
        let mut registry = OrderRegistry::new();
        registry.create(sell(1, 10_050_000_000, 100_000_000));

        assert!(registry.replace_price(1, 10_100_000_000));
        assert_eq!(registry.price(1), 10_100_000_000);
        assert_eq!(registry.state(1), OrderState::New);
        assert_eq!(registry.remaining_qty(1), 100_000_000);

        registry.cancel(1);
        assert!(!registry.replace_price(1, 10_200_000_000));
        assert_eq!(registry.price(1), 10_100_000_000);

        assert!(!registry.replace_price(404, 10_000_000_000));
    }

    #[test]
    fn test_reserve_and_capacity() {
        let mut registry = OrderRegistry::with_capacity(64);
        assert!(registry.capacity() >= 64);

        registry.reserve(1000);
        assert!(registry.capacity() >= 1000);
    }
}
