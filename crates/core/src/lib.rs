//! `tally-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the `Amount` value object and the error taxonomy shared by the
//! ledger, the account store and the HTTP transport.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, AccountKey, OperationId};
pub use value_object::{Amount, ValueObject};
