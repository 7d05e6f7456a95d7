use crate::domain::catalog::Item;
use crate::domain::money::Cents;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Insufficient funds: balance {balance}, price {price}")]
    InsufficientFunds { balance: Cents, price: Cents },
    #[error("Insufficient change available: {remaining} could not be dispensed")]
    InsufficientChange { remaining: Cents },
    #[error("{0} is sold out")]
    SoldOut(Item),
    #[error("No stock left for {0}")]
    Depleted(String),
    #[error("Overflow: {0} exceeds the representable maximum")]
    Overflow(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;

impl VendingError {
    /// Short machine-readable label for the kind of failure.
    pub fn kind(&self) -> &'static str {
        match self {
            VendingError::InvalidState(_) => "invalid_state",
            VendingError::InsufficientFunds { .. } => "insufficient_funds",
            VendingError::InsufficientChange { .. } => "insufficient_change",
            VendingError::SoldOut(_) => "sold_out",
            VendingError::Depleted(_) => "depleted",
            VendingError::Overflow(_) => "overflow",
            VendingError::ValidationError(_) => "invalid_input",
            VendingError::CsvError(_) => "csv_error",
            VendingError::IoError(_) => "io_error",
        }
    }
}
