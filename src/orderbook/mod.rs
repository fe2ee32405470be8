//! Order book module: price levels and side books.
//!
//! ## Architecture
//!
//! - **Price levels**: all orders at one exact price, insertion order,
//!   aggregate volume kept incrementally
//! - **Side books**: levels for one side, sorted best-first by a comparator
//!
//! ## Components
//!
//! - [`PriceLevel`]: Collection of orders at a single price point
//! - [`SideBook`]: Ordered levels for one side of the market
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add order at existing price | O(L) |
//! | Add order at new price | O(L) |
//! | Remove by id / reference | O(N) |
//! | Remove by (owner, price, quantity) | O(L + n) |
//! | Price/volume snapshot | O(L) |
//!
//! L = levels on the side, N = orders on the side, n = orders at the level.

pub mod level;
pub mod side_book;

pub use level::PriceLevel;
pub use side_book::{ascending, descending, LevelComparator, SideBook};
