//! Property tests: side books against a plain model of resting orders.
//!
//! After every operation the book must report, for each distinct resting
//! price, exactly the sum of the quantities resting there, ordered strictly
//! by the side's comparator, and nothing else.

use std::collections::BTreeMap;

use order_dashboard::{
    Dashboard, Order, OrderId, Price, PriceVolumePair, Quantity, Side, SideBook, Volume,
};
use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::TestCaseError;

/// 0.25 price increments
const TICK: i64 = 25_000_000;

/// 0.01 quantity lots
const LOT: u64 = 1_000_000;

#[derive(Debug, Clone)]
enum Op {
    Add { tick: i64, quantity: u64, owner: u8 },
    RemoveById(Index),
    RemoveByReference(Index),
    RemoveByAttributes { tick: i64, quantity: u64, owner: u8 },
    RemoveMissing,
}

/// Mostly small lots, sometimes quantities within a factor of four of
/// `u64::MAX`, so level totals pass the `u64` range.
fn quantity_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        4 => (1u64..40).prop_map(|lots| lots * LOT),
        1 => (u64::MAX / 4)..=(u64::MAX / 2),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-8i64..8, quantity_strategy(), 0u8..3)
            .prop_map(|(tick, quantity, owner)| Op::Add { tick, quantity, owner }),
        2 => any::<Index>().prop_map(Op::RemoveById),
        1 => any::<Index>().prop_map(Op::RemoveByReference),
        2 => (-8i64..8, quantity_strategy(), 0u8..3)
            .prop_map(|(tick, quantity, owner)| Op::RemoveByAttributes { tick, quantity, owner }),
        1 => Just(Op::RemoveMissing),
    ]
}

fn owner(id: u8) -> String {
    format!("owner-{id}")
}

fn price(tick: i64) -> Price {
    Price::from_fixed(tick * TICK)
}

fn quantity(lots: u64) -> Quantity {
    Quantity::from_raw(lots * LOT)
}

/// Expected depth for `side` computed from scratch
fn expected_pairs(side: Side, resting: &[Order]) -> Vec<PriceVolumePair> {
    let mut by_price: BTreeMap<Price, Volume> = BTreeMap::new();
    for order in resting.iter().filter(|order| order.side() == side) {
        let volume = by_price.entry(order.price()).or_default();
        *volume = *volume + order.quantity();
    }

    let pairs = by_price.into_iter().map(PriceVolumePair::from);
    match side {
        Side::Sell => pairs.collect(),
        Side::Buy => pairs.rev().collect(),
    }
}

fn check_book(book: &SideBook, resting: &[Order]) -> Result<(), TestCaseError> {
    let pairs = book.price_volume_pairs();

    prop_assert_eq!(&pairs, &expected_pairs(book.side(), resting));
    prop_assert_eq!(book.order_count(), resting.len());
    prop_assert_eq!(book.level_count(), pairs.len());

    for window in pairs.windows(2) {
        match book.side() {
            Side::Buy => prop_assert!(window[0].price() > window[1].price()),
            Side::Sell => prop_assert!(window[0].price() < window[1].price()),
        }
    }
    for level in book.levels() {
        prop_assert!(!level.is_empty());
        let sum: Volume = level.orders().map(Order::quantity).sum();
        prop_assert_eq!(level.total_volume(), sum);
    }
    Ok(())
}

fn apply(book: &mut SideBook, resting: &mut Vec<Order>, op: Op) -> Result<(), TestCaseError> {
    let side = book.side();
    match op {
        Op::Add { tick, quantity, owner: who } => {
            let order = Order::new(side, owner(who), Quantity::from_raw(quantity), price(tick));
            book.add(order.clone());
            resting.push(order);
        }
        Op::RemoveById(index) => {
            if resting.is_empty() {
                return Ok(());
            }
            let target = resting.remove(index.index(resting.len()));
            prop_assert_eq!(book.remove_order_by_id(&target.id()), Some(target));
        }
        Op::RemoveByReference(index) => {
            if resting.is_empty() {
                return Ok(());
            }
            let target = resting.remove(index.index(resting.len()));
            prop_assert_eq!(book.remove_order(&target), Some(target));
        }
        Op::RemoveByAttributes { tick, quantity, owner: who } => {
            let (who, price, quantity) = (owner(who), price(tick), Quantity::from_raw(quantity));
            let matches = |order: &Order| {
                order.owner() == who && order.price() == price && order.quantity() == quantity
            };
            let expect_hit = resting.iter().any(|order| matches(order));

            let removed = book.remove_order_by_attributes(&who, price, quantity);
            prop_assert_eq!(removed.is_some(), expect_hit);
            if let Some(removed) = removed {
                prop_assert!(matches(&removed));
                resting.retain(|order| order.id() != removed.id());
            }
        }
        Op::RemoveMissing => {
            let before = book.price_volume_pairs();
            prop_assert!(book.remove_order_by_id(&OrderId::new()).is_none());
            prop_assert_eq!(book.price_volume_pairs(), before);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn side_book_tracks_model(
        sell in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 1..120),
    ) {
        let side = if sell { Side::Sell } else { Side::Buy };
        let mut book = SideBook::for_side(side);
        let mut resting = Vec::new();

        for op in ops {
            apply(&mut book, &mut resting, op)?;
            check_book(&book, &resting)?;
        }
    }

    #[test]
    fn aggregation_ignores_insertion_order(
        lots in prop::collection::vec(1u64..1_000, 1..30),
        seed in any::<u64>(),
    ) {
        let orders: Vec<Order> = lots
            .iter()
            .map(|&lots| Order::new(Side::Buy, "u", quantity(lots), price(4)))
            .collect();

        // Deterministic shuffle by sorting on a keyed hash of the position.
        let mut shuffled = orders.clone();
        shuffled.sort_by_key(|order| {
            let position = orders.iter().position(|o| o.id() == order.id()).unwrap_or(0) as u64;
            position.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ seed
        });

        let mut forward = SideBook::for_side(Side::Buy);
        let mut reordered = SideBook::for_side(Side::Buy);
        for order in orders {
            forward.add(order);
        }
        for order in shuffled {
            reordered.add(order);
        }

        let total: Volume = lots.iter().map(|&lots| quantity(lots)).sum();
        prop_assert_eq!(forward.price_volume_pairs(), vec![PriceVolumePair::new(price(4), total)]);
        prop_assert_eq!(forward.price_volume_pairs(), reordered.price_volume_pairs());
    }

    #[test]
    fn dashboard_keeps_sides_apart(
        orders in prop::collection::vec((any::<bool>(), -8i64..8, quantity_strategy()), 1..80),
    ) {
        let mut dashboard = Dashboard::new();
        let mut resting = Vec::new();
        for (sell, tick, raw) in orders {
            let side = if sell { Side::Sell } else { Side::Buy };
            let order = Order::new(side, "u", Quantity::from_raw(raw), price(tick));
            dashboard.add_order(order.clone());
            resting.push(order);
        }

        for side in [Side::Buy, Side::Sell] {
            prop_assert_eq!(dashboard.price_volume_pairs(side), expected_pairs(side, &resting));
        }

        // Every order is reachable by id alone, whichever side it rests on.
        for order in &resting {
            prop_assert!(dashboard.remove_order_by_id(&order.id()));
        }
        prop_assert!(dashboard.is_empty());
    }
}
