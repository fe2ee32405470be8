//! Two-sided dashboard routing orders to per-side books.
//!
//! ## Routing Rules
//!
//! - **Buy orders** rest in the bid book (highest price first)
//! - **Sell orders** rest in the offer book (lowest price first)
//! - Removal by identity alone searches bids, then offers
//!
//! ## Example
//!
//! ```
//! use order_dashboard::dashboard::Dashboard;
//! use order_dashboard::types::{Order, Side};
//!
//! let mut dashboard = Dashboard::new();
//! let order = Order::parse(Side::Sell, "user", "23.4", "12.4").unwrap();
//! let id = order.id();
//! dashboard.add_order(order);
//!
//! let offers = dashboard.price_volume_pairs(Side::Sell);
//! assert_eq!(offers.len(), 1);
//! assert_eq!(offers[0].volume().to_string(), "23.4");
//! assert!(dashboard.price_volume_pairs(Side::Buy).is_empty());
//!
//! assert!(dashboard.remove_order_by_id(&id));
//! assert!(dashboard.is_empty());
//! ```

pub mod digest;

use crate::error::Result;
use crate::orderbook::{ascending, descending, SideBook};
use crate::types::{Order, OrderId, Price, PriceVolumePair, Quantity, Side};

/// Bid and offer books behind one interface.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Buy side, sorted high to low
    bids: SideBook,

    /// Sell side, sorted low to high
    offers: SideBook,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a dashboard with room for `levels` price levels per side
    pub fn with_capacity(levels: usize) -> Self {
        Self {
            bids: SideBook::with_capacity(Side::Buy, descending, levels),
            offers: SideBook::with_capacity(Side::Sell, ascending, levels),
        }
    }

    /// The book holding orders of `side`
    #[inline]
    pub fn book(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.offers,
        }
    }

    #[inline]
    fn book_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.offers,
        }
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Add an order to the book for its side
    pub fn add_order(&mut self, order: Order) {
        self.book_mut(order.side()).add(order);
    }

    /// Remove an order by identity
    ///
    /// The side is not known from the identity, so bids are searched first
    /// and offers only if the bids do not hold it.
    pub fn remove_order_by_id(&mut self, id: &OrderId) -> bool {
        self.bids.remove_order_by_id(id).is_some() || self.offers.remove_order_by_id(id).is_some()
    }

    /// Remove an order of `side` at `price` owned by `owner` with `quantity`
    ///
    /// If more than one order matches, there is no guarantee which one is
    /// removed.
    pub fn remove_order_by_attributes(
        &mut self,
        side: Side,
        owner: &str,
        price: Price,
        quantity: Quantity,
    ) -> bool {
        self.book_mut(side)
            .remove_order_by_attributes(owner, price, quantity)
            .is_some()
    }

    /// Remove the resting order equal to `order`
    pub fn remove_order(&mut self, order: &Order) -> bool {
        self.book_mut(order.side()).remove_order(order).is_some()
    }

    /// Remove every order from both sides
    pub fn clear(&mut self) {
        self.bids.clear();
        self.offers.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Price/volume pairs for `side`, best price first
    pub fn price_volume_pairs(&self, side: Side) -> Vec<PriceVolumePair> {
        self.book(side).price_volume_pairs()
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Lowest offer price
    pub fn best_ask(&self) -> Option<Price> {
        self.offers.best_price()
    }

    /// Best ask minus best bid
    ///
    /// `None` when either side is empty. Nothing here matches orders, so a
    /// crossed book is possible and its spread is negative.
    pub fn spread(&self) -> Option<Price> {
        let (bid, ask) = (self.best_bid()?, self.best_ask()?);
        ask.checked_sub(bid)
    }

    /// Resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.offers.order_count()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.offers.is_empty()
    }

    /// SHA-256 fingerprint of the visible depth of both sides
    pub fn depth_root(&self) -> Result<[u8; 32]> {
        digest::depth_root([&self.bids, &self.offers])
    }

    pub fn depth_root_hex(&self) -> Result<String> {
        self.depth_root().map(hex::encode)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
