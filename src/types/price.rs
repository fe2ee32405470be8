//! Price, quantity and volume value types.
//!
//! ## Overview
//!
//! - [`Price`] is an exact signed decimal. Two prices are the same price
//!   level exactly when they are numerically equal; nothing is rounded, so
//!   `0.1 + 0.2` and `0.3` are different levels, as are `1.000000001` and
//!   `1.000000002`. Negative prices are ordinary values.
//! - [`Quantity`] is a non-negative `u64` scaled by 10^8.
//! - [`Volume`] is a level total, a `u128` on the same scale. No sum of
//!   `u64` quantities that fits in memory can overflow it, so a level's
//!   volume is always the exact sum of its orders (10.21 + 11.45 is 21.66,
//!   not 21.660000000000004).
//!
//! ## Scale Factor
//!
//! `SCALE` is 10^8 (100,000,000), giving quantities 8 decimal places.
//! Quantity inputs with more precision are rounded half away from zero at
//! the 8th place.
//!
//! ## Examples
//!
//! ```
//! use order_dashboard::types::price::{to_fixed, from_fixed, Price};
//!
//! let raw = to_fixed("9.87").unwrap();
//! assert_eq!(raw, 987_000_000);
//! assert_eq!(from_fixed(raw), "9.87000000");
//!
//! let price: Price = "12.4".parse().unwrap();
//! assert_eq!(price, Price::from_f64(12.4).unwrap());
//! assert_eq!(price.to_string(), "12.4");
//! assert!("-3.5".parse::<Price>().unwrap() < Price::ZERO);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: u64 = 100_000_000;

/// Number of decimal places carried by [`SCALE`]
pub const DECIMALS: u32 = 8;

/// Largest whole quantity that can be represented
///
/// u64::MAX / SCALE ≈ 184,467,440,737
pub const MAX_VALUE: u64 = u64::MAX / SCALE;

/// Rejected input for a price, quantity or volume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedPointError {
    #[error("invalid decimal literal `{0}`")]
    Parse(String),

    #[error("negative value {0} is not allowed")]
    Negative(String),

    #[error("value is not a finite number")]
    NonFinite,

    #[error("value {0} exceeds the representable range")]
    OutOfRange(String),
}

// ============================================================================
// Conversion Functions
// ============================================================================

fn parse_decimal(s: &str) -> Result<Decimal, FixedPointError> {
    Decimal::from_str(s.trim()).map_err(|_| FixedPointError::Parse(s.to_string()))
}

/// Convert an `f64` to the decimal its shortest round-trip text denotes
///
/// Distinct floats stay distinct: `0.1 + 0.2` becomes
/// `0.30000000000000004`, while `12.4` becomes exactly `12.4`.
pub fn f64_to_decimal(value: f64) -> Result<Decimal, FixedPointError> {
    if !value.is_finite() {
        return Err(FixedPointError::NonFinite);
    }
    let text = value.to_string();
    Decimal::from_str(&text).map_err(|_| FixedPointError::OutOfRange(text))
}

/// Scale a non-negative decimal by 10^8, rounding at the 8th place
fn scale_decimal(d: Decimal) -> Result<Decimal, FixedPointError> {
    if d.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if d.is_sign_negative() {
        return Err(FixedPointError::Negative(d.to_string()));
    }
    d.checked_mul(Decimal::from(SCALE))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| FixedPointError::OutOfRange(d.to_string()))
}

/// Convert a decimal string to fixed-point u64
///
/// # Example
///
/// ```
/// use order_dashboard::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Ok(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Ok(1));
/// assert!(to_fixed("-1").is_err());
/// ```
pub fn to_fixed(s: &str) -> Result<u64, FixedPointError> {
    decimal_to_fixed(parse_decimal(s)?)
}

/// Convert a Decimal to fixed-point u64
///
/// Negative values and values above `u64::MAX / SCALE` are rejected.
pub fn decimal_to_fixed(d: Decimal) -> Result<u64, FixedPointError> {
    scale_decimal(d)?
        .to_u64()
        .ok_or_else(|| FixedPointError::OutOfRange(d.to_string()))
}

/// Convert an `f64` to fixed-point u64
pub fn f64_to_fixed(value: f64) -> Result<u64, FixedPointError> {
    decimal_to_fixed(f64_to_decimal(value)?)
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(value), DECIMALS)
}

/// Convert fixed-point u64 to a string with 8 decimal places
///
/// ```
/// use order_dashboard::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Convert fixed-point u64 to a string with trailing zeros trimmed
///
/// ```
/// use order_dashboard::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(2_166_000_000), "21.66");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    trimmed(u128::from(value))
}

/// Render a scaled `u128` without conversion limits
fn trimmed(value: u128) -> String {
    let scale = u128::from(SCALE);
    let (whole, frac) = (value / scale, value % scale);
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:08}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

// ============================================================================
// Price
// ============================================================================

/// Limit price of an order: an exact, signed decimal.
///
/// Values are kept normalized (`1.50` is stored as `1.5`, `-0` as `0`), so
/// derived equality and hashing agree with numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        if value.is_zero() {
            Self::ZERO
        } else {
            Self(value.normalize())
        }
    }

    /// Price from a value scaled by 10^8, e.g. `from_fixed(1_240_000_000)` is 12.4
    pub fn from_fixed(raw: i64) -> Self {
        Self::new(Decimal::new(raw, DECIMALS))
    }

    pub fn from_f64(value: f64) -> Result<Self, FixedPointError> {
        f64_to_decimal(value).map(Self::new)
    }

    pub fn to_decimal(self) -> Decimal {
        self.0
    }

    /// Lossy conversion for display and interop
    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.0.is_sign_negative()
    }

    /// `self - other`, `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self::new)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl FromStr for Price {
    type Err = FixedPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self::new)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// Size of one order, fixed-point scaled by 10^8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Self = Self(0);

    /// Largest representable quantity
    pub const MAX: Self = Self(u64::MAX);

    /// Wrap an already scaled value
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The scaled integer
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub fn from_decimal(value: Decimal) -> Result<Self, FixedPointError> {
        decimal_to_fixed(value).map(Self)
    }

    pub fn from_f64(value: f64) -> Result<Self, FixedPointError> {
        f64_to_fixed(value).map(Self)
    }

    pub fn to_decimal(self) -> Decimal {
        fixed_to_decimal(self.0)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Quantity {
    type Err = FixedPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_fixed(s).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&from_fixed_trimmed(self.0))
    }
}

// ============================================================================
// Volume
// ============================================================================

/// Aggregate quantity at a price level, fixed-point scaled by 10^8.
///
/// Adding a [`Quantity`] widens it to `u128`; reaching `u128::MAX` would
/// take more than 2^64 maximal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Volume(u128);

impl Volume {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }
}

impl From<Quantity> for Volume {
    fn from(quantity: Quantity) -> Self {
        Self(u128::from(quantity.0))
    }
}

impl Add<Quantity> for Volume {
    type Output = Self;

    fn add(self, quantity: Quantity) -> Self {
        Self(self.0 + u128::from(quantity.0))
    }
}

impl Add for Volume {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Only a quantity that is part of the volume may be taken out of it.
impl Sub<Quantity> for Volume {
    type Output = Self;

    fn sub(self, quantity: Quantity) -> Self {
        let quantity = u128::from(quantity.0);
        debug_assert!(quantity <= self.0, "volume underflow");
        Self(self.0 - quantity)
    }
}

impl Sum<Quantity> for Volume {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, quantity| total + quantity)
    }
}

impl Sum for Volume {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, volume| total + volume)
    }
}

impl FromStr for Volume {
    type Err = FixedPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = parse_decimal(s)?;
        let mut scaled = scale_decimal(decimal)?;
        scaled.rescale(0);
        u128::try_from(scaled.mantissa())
            .map(Self)
            .map_err(|_| FixedPointError::OutOfRange(decimal.to_string()))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&trimmed(self.0))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
