use std::sync::Arc;

use tally_core::{AccountKey, DomainResult};
use tally_ledger::AccountSummary;

use super::handle::AccountHandle;

/// Store of accounts keyed by their caller-supplied `AccountKey`.
pub trait AccountStore: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with `DuplicateKey` if the key is taken. The uniqueness check and
    /// the insert happen atomically.
    fn create(&self, key: AccountKey, name: String) -> DomainResult<AccountHandle>;

    /// Resolve a key to its account, or `NotFound`.
    fn find_by_key(&self, key: &AccountKey) -> DomainResult<AccountHandle>;

    /// Remove the account behind `account` and return the remaining accounts.
    ///
    /// Fails with `NotFound` if that account was already removed, including
    /// when its key has since been reused by a newer account.
    fn delete(&self, account: &AccountHandle) -> DomainResult<Vec<AccountSummary>>;

    /// Snapshot of every account, ordered by key.
    fn list(&self) -> DomainResult<Vec<AccountSummary>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn create(&self, key: AccountKey, name: String) -> DomainResult<AccountHandle> {
        (**self).create(key, name)
    }

    fn find_by_key(&self, key: &AccountKey) -> DomainResult<AccountHandle> {
        (**self).find_by_key(key)
    }

    fn delete(&self, account: &AccountHandle) -> DomainResult<Vec<AccountSummary>> {
        (**self).delete(account)
    }

    fn list(&self) -> DomainResult<Vec<AccountSummary>> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
