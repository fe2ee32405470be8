//! Order Dashboard - demo binary
//!
//! Loads a small two-sided book and prints its depth. Set `RUST_LOG=debug`
//! to see price levels being created and evicted.

use order_dashboard::{BookError, Dashboard, Order, Side};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BookError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut dashboard = Dashboard::new();

    let orders = [
        (Side::Buy, "user", "23.4", "12.4"),
        (Side::Buy, "user 2", "23.4", "13.1"),
        (Side::Buy, "user 3", "10.21", "9.87"),
        (Side::Buy, "user 3", "11.45", "9.87"),
        (Side::Sell, "user 4", "2.67", "14.56"),
        (Side::Sell, "user 4", "11.6", "14.56"),
        (Side::Sell, "user 5", "5", "15.2"),
    ];

    let mut ids = Vec::with_capacity(orders.len());
    for (side, owner, quantity, price) in orders {
        let order = Order::parse(side, owner, quantity, price)?;
        ids.push(order.id());
        dashboard.add_order(order);
    }
    info!(orders = dashboard.order_count(), "book loaded");

    print_depth(&dashboard);

    // Cancel the 13.1 bid; its level disappears.
    let removed = dashboard.remove_order_by_id(&ids[1]);
    info!(removed, best_bid = ?dashboard.best_bid().map(|p| p.to_string()), "cancelled by id");

    print_depth(&dashboard);
    println!("Depth root: {}", dashboard.depth_root_hex()?);

    Ok(())
}

fn print_depth(dashboard: &Dashboard) {
    for side in [Side::Sell, Side::Buy] {
        println!("{side}");
        for pair in dashboard.price_volume_pairs(side) {
            println!("  {:>10} @ {:<10}", pair.volume().to_string(), pair.price().to_string());
        }
    }
    println!();
}
