//! # Order Dashboard
//!
//! Live per-side aggregation of resting orders by price.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, Price, Quantity, Volume)
//! - **OrderBook**: Price levels and side books
//! - **Dashboard**: Routes orders to the bid or offer book
//!
//! ## Design Principles
//!
//! 1. **Book-keeping only**: No matching, no trades
//! 2. **No Floating Point**: Prices are exact decimals, sizes are fixed-point (10^8 scaling)
//! 3. **Exact price levels**: One level per exact price, evicted when empty
//! 4. **Synchronous Execution**: Single-threaded, no I/O

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, Price, Quantity
pub mod types;

/// Order book: price levels and side books
pub mod orderbook;

/// Dashboard: per-side routing and depth queries
pub mod dashboard;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use dashboard::Dashboard;
pub use error::{BookError, Result};
pub use orderbook::{PriceLevel, SideBook};
pub use types::{FixedPointError, Order, OrderId, Price, PriceVolumePair, Quantity, Side, Volume};
