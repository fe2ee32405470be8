//! Core data types for the dashboard
//!
//! ## Types
//!
//! - [`Order`]: An immutable resting order
//! - [`OrderId`]: Globally unique order identity
//! - [`Side`]: Buy or Sell
//! - [`Price`]: Exact signed decimal price
//! - [`Quantity`], [`Volume`]: Fixed-point sizes (scaled by 10^8)
//! - [`PriceVolumePair`]: Aggregate volume at one price
//!
//! ## Fixed-Point Arithmetic
//!
//! Quantities are stored as `u64` scaled by 10^8, level volumes as `u128`
//! on the same scale. Example: 9.87 is stored as 987_000_000u64

mod depth;
mod order;
pub mod price;

pub use depth::PriceVolumePair;
pub use order::{Order, OrderId, Side};
pub use price::{FixedPointError, Price, Quantity, Volume};
