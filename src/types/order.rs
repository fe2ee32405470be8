//! Order types for the dashboard.
//!
//! An [`Order`] is an immutable value: its identity is assigned when it is
//! constructed and nothing about it changes while it rests in a book. It
//! leaves the book only through one of the removal operations.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::BookError;
use crate::types::price::{Price, Quantity};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Selects both the book an order is routed to and that book's sort
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid), best price is the highest
    #[default]
    Buy,
    /// Sell order (offer), best price is the lowest
    Sell,
}

impl Side {
    /// Display name, `"BUY"` or `"SELL"`
    pub const fn name(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// OrderId
// ============================================================================

/// Globally unique order identity (random UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| BookError::InvalidOrderId {
                input: s.to_string(),
                source,
            })
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// Two orders are the same order when identity, side, owner, quantity and
/// price all match; that is the derived `PartialEq`.
///
/// ## Example
///
/// ```
/// use order_dashboard::types::{Order, Side};
///
/// let order = Order::parse(Side::Sell, "user", "23.4", "12.4").unwrap();
///
/// assert_eq!(order.side(), Side::Sell);
/// assert_eq!(order.owner(), "user");
/// assert_eq!(order.price().to_string(), "12.4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    side: Side,
    owner: String,
    quantity: Quantity,
    price: Price,
}

impl Order {
    /// Create an order with a freshly generated identity
    pub fn new(side: Side, owner: impl Into<String>, quantity: Quantity, price: Price) -> Self {
        Self::with_id(OrderId::new(), side, owner, quantity, price)
    }

    /// Create an order with a caller-supplied identity
    ///
    /// The caller keeps identities unique; books assume at most one resting
    /// order per identity.
    pub fn with_id(
        id: OrderId,
        side: Side,
        owner: impl Into<String>,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        Self {
            id,
            side,
            owner: owner.into(),
            quantity,
            price,
        }
    }

    /// Create an order from decimal strings
    pub fn parse(
        side: Side,
        owner: impl Into<String>,
        quantity: &str,
        price: &str,
    ) -> Result<Self, BookError> {
        let quantity = quantity.parse::<Quantity>()?;
        let price = price.parse::<Price>()?;
        Ok(Self::new(side, owner, quantity, price))
    }

    /// Create an order from floating-point inputs
    pub fn from_f64(
        side: Side,
        owner: impl Into<String>,
        quantity: f64,
        price: f64,
    ) -> Result<Self, BookError> {
        let quantity = Quantity::from_f64(quantity)?;
        let price = Price::from_f64(price)?;
        Ok(Self::new(side, owner, quantity, price))
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
