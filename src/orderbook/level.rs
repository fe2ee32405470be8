//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` owns every order resting at one exact price, in
//! insertion order:
//!
//! ```text
//! [oldest, order2, order3, newest]
//! ```
//!
//! The aggregate volume is kept alongside the queue and updated on every
//! insert and removal, so reading it is O(1). Removals scan the queue and
//! are O(level size).

use crate::types::{Order, OrderId, Price, PriceVolumePair, Quantity, Volume};

/// All orders at a single price.
///
/// Levels compare equal by price alone.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level, fixed at construction
    price: Price,

    /// Resting orders, oldest first
    orders: Vec<Order>,

    /// Exact sum of the quantities in `orders`
    total_volume: Volume,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: Vec::new(),
            total_volume: Volume::ZERO,
        }
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Aggregate volume of the resting orders (zero when empty)
    #[inline]
    pub fn total_volume(&self) -> Volume {
        self.total_volume
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in insertion order
    pub fn orders(&self) -> impl ExactSizeIterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    /// The (price, volume) projection of this level
    pub fn to_pair(&self) -> PriceVolumePair {
        PriceVolumePair::new(self.price, self.total_volume)
    }

    /// Append an order to the tail of the queue
    ///
    /// The order's price is not checked against the level's; routing it to
    /// the right level is the caller's job.
    pub fn add_order(&mut self, order: Order) {
        self.total_volume = self.total_volume + order.quantity();
        self.orders.push(order);
    }

    /// Remove the first order equal to `order`
    pub fn remove_order(&mut self, order: &Order) -> Option<Order> {
        let index = self.orders.iter().position(|resting| resting == order)?;
        Some(self.take(index))
    }

    /// Remove the order with identity `id`
    pub fn remove_order_by_id(&mut self, id: &OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|resting| resting.id() == *id)?;
        Some(self.take(index))
    }

    /// Remove an order owned by `owner` with exactly `quantity`
    ///
    /// When several orders match, which one is removed is unspecified.
    pub fn remove_order_by_attributes(&mut self, owner: &str, quantity: Quantity) -> Option<Order> {
        let index = self
            .orders
            .iter()
            .position(|resting| resting.owner() == owner && resting.quantity() == quantity)?;
        Some(self.take(index))
    }

    fn take(&mut self, index: usize) -> Order {
        let order = self.orders.remove(index);
        self.total_volume = self.total_volume - order.quantity();
        order
    }
}

impl PartialEq for PriceLevel {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl Eq for PriceLevel {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn px(s: &str) -> Price {
        s.parse().unwrap()
    }

    fn qty(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    fn vol(s: &str) -> Volume {
        s.parse().unwrap()
    }

    fn create_order(price: &str, quantity: &str, owner: &str) -> Order {
        Order::new(Side::Buy, owner, qty(quantity), px(price))
    }

    #[test]
    fn test_price_level_new() {
        let level = PriceLevel::new(px("13.4"));

        assert_eq!(level.price(), px("13.4"));
        assert_eq!(level.total_volume(), Volume::ZERO);
        assert_eq!(level.order_count(), 0);
        assert!(level.is_empty());
    }

    #[test]
    fn test_add_orders_accumulates_volume() {
        let mut level = PriceLevel::new(px("13.4"));

        level.add_order(create_order("13.4", "23.5", "user 1"));
        level.add_order(create_order("13.4", "26.7", "user 2"));

        assert_eq!(level.price(), px("13.4"));
        assert_eq!(level.order_count(), 2);
        assert_eq!(level.total_volume(), vol("50.2"));
        assert_eq!(level.to_pair(), PriceVolumePair::new(px("13.4"), vol("50.2")));
    }

    #[test]
    fn test_volume_stays_exact_past_u64() {
        let mut level = PriceLevel::new(px("1"));
        let first = create_order("1", "100000000000", "u1");
        level.add_order(first.clone());
        level.add_order(create_order("1", "100000000000", "u2"));

        assert_eq!(level.total_volume(), vol("200000000000"));

        level.remove_order(&first).unwrap();
        assert_eq!(level.total_volume(), vol("100000000000"));
        assert_eq!(level.to_pair().volume().to_string(), "100000000000");
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut level = PriceLevel::new(px("10"));
        let first = create_order("10", "1", "a");
        let second = create_order("10", "2", "b");
        let third = create_order("10", "3", "c");

        level.add_order(first.clone());
        level.add_order(second.clone());
        level.add_order(third.clone());

        let owners: Vec<&str> = level.orders().map(Order::owner).collect();
        assert_eq!(owners, ["a", "b", "c"]);

        level.remove_order(&second).unwrap();
        let owners: Vec<&str> = level.orders().map(Order::owner).collect();
        assert_eq!(owners, ["a", "c"]);
    }

    #[test]
    fn test_add_does_not_validate_price() {
        let mut level = PriceLevel::new(px("10"));
        level.add_order(create_order("11", "1", "a"));

        assert_eq!(level.order_count(), 1);
        assert_eq!(level.price(), px("10"));
    }

    #[test]
    fn test_remove_missing_id_leaves_level_intact() {
        let mut level = PriceLevel::new(px("13.4"));
        level.add_order(create_order("13.4", "23.5", "user 1"));
        level.add_order(create_order("13.4", "26.7", "user 2"));

        assert!(level.remove_order_by_id(&OrderId::new()).is_none());

        assert_eq!(level.price(), px("13.4"));
        assert_eq!(level.order_count(), 2);
        assert_eq!(level.total_volume(), vol("50.2"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut level = PriceLevel::new(px("9.87"));
        let a = create_order("9.87", "10.21", "u3");
        let b = create_order("9.87", "11.45", "u3");
        level.add_order(a.clone());
        level.add_order(b.clone());

        let removed = level.remove_order_by_id(&a.id()).unwrap();

        assert_eq!(removed, a);
        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_volume(), vol("11.45"));
        assert!(level.remove_order_by_id(&a.id()).is_none());
    }

    #[test]
    fn test_remove_by_reference_requires_every_field() {
        let mut level = PriceLevel::new(px("10"));
        let order = create_order("10", "5", "u1");
        level.add_order(order.clone());

        let lookalike = Order::with_id(order.id(), Side::Sell, "u1", qty("5"), px("10"));
        assert!(level.remove_order(&lookalike).is_none());
        assert_eq!(level.order_count(), 1);

        assert_eq!(level.remove_order(&order), Some(order));
        assert!(level.is_empty());
        assert_eq!(level.total_volume(), Volume::ZERO);
    }

    #[test]
    fn test_remove_by_attributes() {
        let mut level = PriceLevel::new(px("10"));
        level.add_order(create_order("10", "23.4", "user 1"));
        level.add_order(create_order("10", "0.7", "user 2"));

        assert!(level.remove_order_by_attributes("user 1", qty("0.7")).is_none());
        assert!(level.remove_order_by_attributes("user 3", qty("23.4")).is_none());
        assert_eq!(level.order_count(), 2);

        let removed = level.remove_order_by_attributes("user 1", qty("23.4")).unwrap();
        assert_eq!(removed.owner(), "user 1");
        assert_eq!(level.total_volume(), vol("0.7"));
    }

    #[test]
    fn test_remove_by_attributes_takes_one_of_several_matches() {
        let mut level = PriceLevel::new(px("10"));
        level.add_order(create_order("10", "1", "dup"));
        level.add_order(create_order("10", "1", "dup"));

        assert!(level.remove_order_by_attributes("dup", qty("1")).is_some());
        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_volume(), vol("1"));
    }

    #[test]
    fn test_levels_compare_by_price_only() {
        let mut a = PriceLevel::new(px("10"));
        let b = PriceLevel::new(px("10"));
        a.add_order(create_order("10", "1", "x"));

        assert_eq!(a, b);
        assert_ne!(a, PriceLevel::new(px("10.00000001")));
    }
}
