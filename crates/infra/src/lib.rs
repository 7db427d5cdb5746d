//! Infrastructure layer: account storage and shared access to accounts.

pub mod account_store;

pub use account_store::{AccountHandle, AccountStore, InMemoryAccountStore};
