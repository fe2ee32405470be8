//! Error types for the dashboard.
//!
//! Only input that cannot become a value is an error. A removal that finds
//! nothing is an ordinary `false` / `None`, never a [`BookError`].

use thiserror::Error;

use crate::types::price::FixedPointError;

/// Crate-wide error
#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid value: {0}")]
    Value(#[from] FixedPointError),

    #[error("invalid order id `{input}`")]
    InvalidOrderId {
        input: String,
        #[source]
        source: uuid::Error,
    },

    #[error("depth encoding failed: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
