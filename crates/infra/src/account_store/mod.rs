//! Account store boundary.
//!
//! The store is the only authority on key uniqueness and key → account
//! resolution. Accounts are handed out as `AccountHandle`s, which serialise
//! mutation per account while letting reads run concurrently.

pub mod handle;
pub mod in_memory;
pub mod r#trait;

pub use handle::AccountHandle;
pub use in_memory::InMemoryAccountStore;
pub use r#trait::AccountStore;
