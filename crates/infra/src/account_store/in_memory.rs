use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use tally_core::{AccountKey, DomainError, DomainResult};
use tally_ledger::{Account, AccountSummary};

use super::handle::AccountHandle;
use super::r#trait::AccountStore;

/// In-memory account store. State lives for the lifetime of the instance.
///
/// Lock order is always store first, then account.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<AccountKey, AccountHandle>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn summaries<'a>(
        accounts: impl Iterator<Item = &'a AccountHandle>,
    ) -> DomainResult<Vec<AccountSummary>> {
        let mut items = accounts
            .map(AccountHandle::summary)
            .collect::<DomainResult<Vec<_>>>()?;
        items.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(items)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, key: AccountKey, name: String) -> DomainResult<AccountHandle> {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);

        match accounts.entry(key) {
            Entry::Occupied(e) => Err(DomainError::duplicate_key(e.key().as_str())),
            Entry::Vacant(e) => {
                let handle = AccountHandle::new(Account::open(e.key().clone(), name));
                Ok(e.insert(handle).clone())
            }
        }
    }

    fn find_by_key(&self, key: &AccountKey) -> DomainResult<AccountHandle> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        accounts.get(key).cloned().ok_or(DomainError::NotFound)
    }

    fn delete(&self, account: &AccountHandle) -> DomainResult<Vec<AccountSummary>> {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);

        // Match on id too: the key may already belong to a newer account.
        let owned = accounts
            .get(account.key())
            .is_some_and(|current| current.id() == account.id());
        if !owned {
            return Err(DomainError::NotFound);
        }

        // Build the remaining view first, so a failure removes nothing.
        let remaining =
            Self::summaries(accounts.values().filter(|h| h.key() != account.key()))?;
        accounts.remove(account.key());
        Ok(remaining)
    }

    fn list(&self) -> DomainResult<Vec<AccountSummary>> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Self::summaries(accounts.values())
    }

    fn len(&self) -> usize {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;
    use tally_core::Amount;

    fn key(raw: &str) -> AccountKey {
        AccountKey::new(raw).unwrap()
    }

    #[test]
    fn create_then_find_returns_same_account() {
        let store = InMemoryAccountStore::new();
        let created = store.create(key("111"), "Alice".into()).unwrap();

        let found = store.find_by_key(&key("111")).unwrap();
        assert_eq!(found.id(), created.id());
        assert_eq!(found.name(), "Alice");
        assert_eq!(found.balance().unwrap(), Decimal::ZERO);
        assert!(found.statement().is_empty());
    }

    #[test]
    fn duplicate_key_is_rejected_and_first_account_kept() {
        let store = InMemoryAccountStore::new();
        let first = store.create(key("111"), "Alice".into()).unwrap();

        let err = store.create(key("111"), "Mallory".into()).unwrap_err();
        assert_eq!(err, DomainError::duplicate_key("111"));

        assert_eq!(store.len(), 1);
        let found = store.find_by_key(&key("111")).unwrap();
        assert_eq!(found.id(), first.id());
        assert_eq!(found.name(), "Alice");
    }

    #[test]
    fn unknown_key_is_not_found() {
        let store = InMemoryAccountStore::new();
        assert_eq!(store.find_by_key(&key("404")).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn mutations_through_a_handle_are_visible_to_later_lookups() {
        let store = InMemoryAccountStore::new();
        let handle = store.create(key("111"), "Alice".into()).unwrap();

        handle.rename("Alice Smith");
        handle.deposit(Some("salary".into()), Amount::from(100)).unwrap();

        let found = store.find_by_key(&key("111")).unwrap();
        assert_eq!(found.name(), "Alice Smith");
        assert_eq!(found.balance().unwrap(), Decimal::from(100));
    }

    #[test]
    fn delete_removes_by_key_and_returns_remaining() {
        let store = InMemoryAccountStore::new();
        store.create(key("111"), "Alice".into()).unwrap();
        let bob = store.create(key("222"), "Bob".into()).unwrap();
        store.create(key("333"), "Carol".into()).unwrap();

        let remaining = store.delete(&bob).unwrap();

        let keys: Vec<&str> = remaining.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["111", "333"]);
        assert_eq!(store.find_by_key(&key("222")).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn double_delete_is_not_found() {
        let store = InMemoryAccountStore::new();
        let handle = store.create(key("111"), "Alice".into()).unwrap();

        store.delete(&handle).unwrap();
        assert_eq!(store.delete(&handle).unwrap_err(), DomainError::NotFound);
        assert!(store.is_empty());
    }

    #[test]
    fn stale_handle_cannot_delete_recreated_account() {
        let store = InMemoryAccountStore::new();
        let old = store.create(key("111"), "Alice".into()).unwrap();
        store.delete(&old).unwrap();
        let new = store.create(key("111"), "Alice again".into()).unwrap();

        assert_eq!(store.delete(&old).unwrap_err(), DomainError::NotFound);
        assert_eq!(store.find_by_key(&key("111")).unwrap().id(), new.id());
    }

    #[test]
    fn concurrent_creates_with_same_key_admit_exactly_one() {
        let store = Arc::new(InMemoryAccountStore::new());

        let results: Vec<DomainResult<AccountHandle>> = thread::scope(|s| {
            let workers: Vec<_> = (0..32)
                .map(|i| {
                    let store = Arc::clone(&store);
                    s.spawn(move || store.create(key("111"), format!("user-{i}")))
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        let created = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(DomainError::DuplicateKey(_))))
            .count();

        assert_eq!(created, 1);
        assert_eq!(duplicates, 31);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn arc_store_delegates() {
        let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
        store.create(key("111"), "Alice".into()).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert!(!store.is_empty());
    }
}
