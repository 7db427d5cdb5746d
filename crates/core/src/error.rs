//! Domain error model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business failure. Operations that return
/// one of these leave the store and the affected account untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An account with the given key is already registered.
    #[error("account with key '{0}' already exists")]
    DuplicateKey(String),

    /// No account is registered under the given key (or it was deleted).
    #[error("account not found")]
    NotFound,

    /// A withdrawal asked for more than the current balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// A date-filtered statement matched no operations.
    #[error("no operations recorded on {0}")]
    NoOperationsForDate(NaiveDate),

    /// A value failed validation (blank key, negative amount, malformed date).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DomainError::duplicate_key("111");
        assert_eq!(err.to_string(), "account with key '111' already exists");

        let err = DomainError::insufficient_funds(Decimal::from(1000), Decimal::from(70));
        assert_eq!(err.to_string(), "insufficient funds: requested 1000, available 70");

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            DomainError::NoOperationsForDate(date).to_string(),
            "no operations recorded on 2024-03-01"
        );
    }
}
