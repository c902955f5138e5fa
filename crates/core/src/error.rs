//! Store error model.

use thiserror::Error;

use crate::id::BeanBagId;

/// Result type used across the store.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is a deterministic validation failure detected before any
/// state is touched. Exactly one kind is reported per failed call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Quantity to add or sell was below 1 (or would overflow the counter).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Intake month outside 1..=12.
    #[error("invalid month: {0}")]
    InvalidMonth(u8),

    /// Malformed identifier, or a replacement identifier already on file.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    /// Manufacturer, name or information differ from the record on file.
    #[error("bean bag {0} is on file with different details")]
    RecordMismatch(BeanBagId),

    /// Price below 1.
    #[error("invalid price: {0}")]
    InvalidPrice(i64),

    /// Well-formed identifier that is not in the relevant collection.
    #[error("unknown identifier: {0:?}")]
    UnknownId(String),

    /// Stock on file for the identifier is exactly zero.
    #[error("bean bag {0} is out of stock")]
    OutOfStock(BeanBagId),

    /// Some stock exists, but less than requested.
    #[error("insufficient stock for {id} (requested: {requested}, available: {available})")]
    InsufficientStock {
        id: BeanBagId,
        requested: i64,
        available: i64,
    },

    /// The sale would otherwise succeed but no price has been set.
    #[error("no price set for bean bag {0}")]
    PriceNotSet(BeanBagId),
}

impl StoreError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    pub fn unknown_id(id: impl Into<String>) -> Self {
        Self::UnknownId(id.into())
    }

    pub fn insufficient_stock(id: BeanBagId, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            id,
            requested,
            available,
        }
    }
}
