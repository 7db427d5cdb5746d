//! Read views derived from an operation log.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tally_core::{DomainError, DomainResult};

use crate::operation::Operation;

/// Net balance of a log: credits add, debits subtract, starting from zero.
///
/// The fold is checked. A running total outside the `Decimal` range is
/// reported as `InvalidInput` rather than panicking.
pub fn balance(operations: &[Operation]) -> DomainResult<Decimal> {
    operations
        .iter()
        .try_fold(Decimal::ZERO, |acc, op| acc.checked_add(op.signed_amount()))
        .ok_or_else(|| DomainError::invalid_input("balance is outside the representable range"))
}

/// Operations recorded on `date` (UTC calendar day), in log order.
///
/// An empty match is an error, so an account without operations never
/// satisfies a date filter.
pub fn operations_on(operations: &[Operation], date: NaiveDate) -> DomainResult<Vec<Operation>> {
    let matched: Vec<Operation> = operations
        .iter()
        .filter(|op| op.created_on() == date)
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(DomainError::NoOperationsForDate(date));
    }
    Ok(matched)
}
