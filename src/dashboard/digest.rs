//! Deterministic fingerprint of visible depth.
//!
//! ## Encoding
//!
//! Each level is encoded as an SSZ container (34 bytes, little-endian) and
//! fed to SHA-256 in canonical order, bids before offers:
//!
//! | Field | Type | Content |
//! |-------|------|---------|
//! | `side` | u8 | 0 = BUY, 1 = SELL |
//! | `price_lo`, `price_hi` | u64, u64 | normalized decimal mantissa, two's complement i128 |
//! | `price_scale` | u8 | decimal places of the mantissa |
//! | `volume_lo`, `volume_hi` | u64, u64 | scaled u128 volume |
//!
//! Only what [`price_volume_pairs`](crate::orderbook::SideBook::price_volume_pairs)
//! shows goes into the hash, so order identities and owners do not affect
//! the root.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::BookError;
use crate::orderbook::SideBook;
use crate::types::{PriceVolumePair, Side};

/// SSZ record for one price level
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
struct LevelRecord {
    side: u8,
    price_lo: u64,
    price_hi: u64,
    price_scale: u8,
    volume_lo: u64,
    volume_hi: u64,
}

impl LevelRecord {
    fn new(side: Side, pair: &PriceVolumePair) -> Self {
        let price = pair.price().to_decimal();
        let (price_lo, price_hi) = split(price.mantissa() as u128);
        let (volume_lo, volume_hi) = split(pair.volume().raw());
        Self {
            side: side.to_u8(),
            price_lo,
            price_hi,
            // At most 28
            price_scale: price.scale() as u8,
            volume_lo,
            volume_hi,
        }
    }

    fn encode(&self) -> crate::error::Result<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|err| BookError::Encoding(format!("{err:?}")))
    }
}

fn split(value: u128) -> (u64, u64) {
    (value as u64, (value >> 64) as u64)
}

/// SHA-256 over the SSZ-encoded levels of `books`, in the order given
pub fn depth_root<'a, I>(books: I) -> crate::error::Result<[u8; 32]>
where
    I: IntoIterator<Item = &'a SideBook>,
{
    let mut hasher = Sha256::new();
    for book in books {
        for pair in book.price_volume_pairs() {
            hasher.update(LevelRecord::new(book.side(), &pair).encode()?);
        }
    }

    let mut root = [0u8; 32];
    root.copy_from_slice(&hasher.finalize());
    Ok(root)
}

// ============================================================================
// Unit Tests
// ============================================================================
