//! Read-only depth projections returned to callers.

use crate::types::price::{Price, Volume};

/// Aggregate volume resting at one price.
///
/// A snapshot value: it does not follow later changes to the book it was
/// taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PriceVolumePair {
    price: Price,
    volume: Volume,
}

impl PriceVolumePair {
    pub fn new(price: Price, volume: Volume) -> Self {
        Self { price, volume }
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    #[inline]
    pub fn volume(&self) -> Volume {
        self.volume
    }
}

impl From<(Price, Volume)> for PriceVolumePair {
    fn from((price, volume): (Price, Volume)) -> Self {
        Self::new(price, volume)
    }
}
