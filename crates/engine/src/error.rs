//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`], [`InvalidMethod`] and [`MissingField`] thrown when a
//!   new transaction is rejected before touching the store.
//! - [`Overflow`] thrown when the ledger sum does not fit the money type.
//! - [`Database`] thrown when the store cannot be reached or fails a query.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidMethod`]: EngineError::InvalidMethod
//!  [`MissingField`]: EngineError::MissingField
//!  [`Overflow`]: EngineError::Overflow
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid method: {0}")]
    InvalidMethod(String),
    #[error("Amount and method are required")]
    MissingField,
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// `true` for errors the caller can fix by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidMethod(_) | Self::MissingField
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidMethod(a), Self::InvalidMethod(b)) => a == b,
            (Self::MissingField, Self::MissingField) => true,
            (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
