//! One side of the market: an ordered sequence of price levels.
//!
//! ## Price Ordering
//!
//! The order of levels comes from a [`LevelComparator`] supplied at
//! construction, so bids and offers share one implementation:
//!
//! - **Bids** (buy orders): [`descending`], best bid = highest price
//! - **Offers** (sell orders): [`ascending`], best offer = lowest price
//!
//! ## Level Lifecycle
//!
//! A level is created by the first order at its price and evicted by the
//! removal of its last order. No empty level is visible between calls.
//!
//! ## Example
//!
//! ```
//! use order_dashboard::orderbook::SideBook;
//! use order_dashboard::types::{Order, Side};
//!
//! let mut bids = SideBook::for_side(Side::Buy);
//! bids.add(Order::parse(Side::Buy, "u1", "1.5", "100").unwrap());
//! bids.add(Order::parse(Side::Buy, "u2", "2", "101").unwrap());
//!
//! let best = bids.price_volume_pairs()[0];
//! assert_eq!(best.price().to_string(), "101");
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::orderbook::PriceLevel;
use crate::types::{Order, OrderId, Price, PriceVolumePair, Quantity, Side};

/// Total order over levels for one side of the book
pub type LevelComparator = fn(&PriceLevel, &PriceLevel) -> Ordering;

/// Lowest price first (offers)
pub fn ascending(a: &PriceLevel, b: &PriceLevel) -> Ordering {
    a.price().cmp(&b.price())
}

/// Highest price first (bids)
pub fn descending(a: &PriceLevel, b: &PriceLevel) -> Ordering {
    b.price().cmp(&a.price())
}

/// Price levels for one side, best price first.
#[derive(Debug, Clone)]
pub struct SideBook {
    side: Side,

    comparator: LevelComparator,

    /// Sorted by `comparator`, unique by price, never holding an empty level
    levels: Vec<PriceLevel>,

    /// Total resting orders across all levels
    order_count: usize,
}

impl SideBook {
    /// Create an empty book ordered by `comparator`
    pub fn new(side: Side, comparator: LevelComparator) -> Self {
        Self::with_capacity(side, comparator, 0)
    }

    /// Create an empty book with room for `levels` price levels
    pub fn with_capacity(side: Side, comparator: LevelComparator, levels: usize) -> Self {
        Self {
            side,
            comparator,
            levels: Vec::with_capacity(levels),
            order_count: 0,
        }
    }

    /// Create an empty book with the canonical ordering for `side`
    pub fn for_side(side: Side) -> Self {
        Self::new(side, Self::canonical_comparator(side))
    }

    /// Descending for bids, ascending for offers
    pub fn canonical_comparator(side: Side) -> LevelComparator {
        match side {
            Side::Buy => descending,
            Side::Sell => ascending,
        }
    }

    // ========================================================================
    // Size and Access
    // ========================================================================

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels in canonical order
    #[inline]
    pub fn levels(&self) -> &[PriceLevel] {
        &self.levels
    }

    /// The level at exactly `price`, if any
    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.iter().find(|level| level.price() == price)
    }

    /// Best price on this side
    pub fn best_price(&self) -> Option<Price> {
        self.levels.first().map(PriceLevel::price)
    }

    pub fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.first()
    }

    /// Snapshot of (price, aggregate volume), one entry per level, best first
    pub fn price_volume_pairs(&self) -> Vec<PriceVolumePair> {
        self.levels.iter().map(PriceLevel::to_pair).collect()
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Add an order at its price, creating the level if needed
    pub fn add(&mut self, order: Order) {
        let price = order.price();
        trace!(side = %self.side, %price, id = %order.id(), "adding order");
        self.order_count += 1;

        if let Some(level) = self.levels.iter_mut().find(|level| level.price() == price) {
            level.add_order(order);
            return;
        }

        let mut level = PriceLevel::new(price);
        level.add_order(order);

        // Same position a stable sort would give after pushing the new level.
        let comparator = self.comparator;
        let index = self
            .levels
            .partition_point(|existing| comparator(existing, &level) != Ordering::Greater);
        self.levels.insert(index, level);
        debug!(side = %self.side, %price, levels = self.levels.len(), "price level created");
    }

    /// Remove the resting order equal to `order`
    pub fn remove_order(&mut self, order: &Order) -> Option<Order> {
        let removed = self.remove_first(|level| level.remove_order(order));
        if removed.is_none() {
            trace!(side = %self.side, id = %order.id(), "order not found");
        }
        removed
    }

    /// Remove the resting order with identity `id`
    pub fn remove_order_by_id(&mut self, id: &OrderId) -> Option<Order> {
        let removed = self.remove_first(|level| level.remove_order_by_id(id));
        if removed.is_none() {
            trace!(side = %self.side, %id, "order id not found");
        }
        removed
    }

    /// Remove an order at exactly `price` owned by `owner` with `quantity`
    ///
    /// When several orders match, which one is removed is unspecified.
    pub fn remove_order_by_attributes(
        &mut self,
        owner: &str,
        price: Price,
        quantity: Quantity,
    ) -> Option<Order> {
        let removed = self
            .levels
            .iter()
            .position(|level| level.price() == price)
            .and_then(|index| {
                let order = self.levels[index].remove_order_by_attributes(owner, quantity)?;
                self.after_removal(index);
                Some(order)
            });
        if removed.is_none() {
            trace!(side = %self.side, owner, %price, %quantity, "no order matches attributes");
        }
        removed
    }

    /// Remove every level and order
    pub fn clear(&mut self) {
        self.levels.clear();
        self.order_count = 0;
    }

    // ========================================================================
    // Cleanup Helpers
    // ========================================================================

    /// Scan levels best-first until `remove` takes an order from one
    fn remove_first<F>(&mut self, mut remove: F) -> Option<Order>
    where
        F: FnMut(&mut PriceLevel) -> Option<Order>,
    {
        for index in 0..self.levels.len() {
            if let Some(order) = remove(&mut self.levels[index]) {
                self.after_removal(index);
                return Some(order);
            }
        }
        None
    }

    /// Book-keeping after a level at `index` gave up one order
    fn after_removal(&mut self, index: usize) {
        debug_assert!(self.order_count > 0, "order count out of step with levels");
        self.order_count -= 1;
        if self.levels[index].is_empty() {
            let level = self.levels.remove(index);
            debug!(side = %self.side, price = %level.price(), "price level evicted");
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
