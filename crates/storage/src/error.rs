use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Receipt field that the points computation reads as a number, date or time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    Total,
    /// Zero-based position of the item in the receipt
    ItemPrice(usize),
    PurchaseDate,
    PurchaseTime,
}

impl fmt::Display for ReceiptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => write!(f, "total"),
            Self::ItemPrice(_) => write!(f, "item price"),
            Self::PurchaseDate => write!(f, "purchase date"),
            Self::PurchaseTime => write!(f, "purchase time"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} format: {value:?}")]
pub struct ParseError {
    pub field: ReceiptField,
    pub value: String,
}

impl ParseError {
    pub fn new(field: ReceiptField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
