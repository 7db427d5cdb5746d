//! Ledger module (per-account append-only operation log).
//!
//! Pure domain logic only: no IO, no HTTP, no locking. Callers decide how an
//! `Account` is shared; this crate only guarantees that every failed command
//! leaves the account untouched.

pub mod account;
pub mod ledger;
pub mod operation;

pub use account::{Account, AccountSummary};
pub use ledger::{balance, operations_on};
pub use operation::{Operation, OperationKind};
