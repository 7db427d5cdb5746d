use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tally_core::{AccountId, AccountKey, Amount, DomainResult, Entity};
use tally_ledger::{Account, AccountSummary, Operation};

/// Shared, lock-protected reference to a stored account.
///
/// Mutations (rename, deposit, withdraw) take the account's write lock, so a
/// withdrawal's balance check and its append form one critical section. Reads
/// take the read lock and never observe a half-applied append.
///
/// Ledger commands validate before they write, so a poisoned lock still holds
/// a consistent account and is recovered rather than propagated.
#[derive(Debug, Clone)]
pub struct AccountHandle {
    id: AccountId,
    key: AccountKey,
    inner: Arc<RwLock<Account>>,
}

impl AccountHandle {
    pub(crate) fn new(account: Account) -> Self {
        Self {
            id: *account.id(),
            key: account.key().clone(),
            inner: Arc::new(RwLock::new(account)),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn key(&self) -> &AccountKey {
        &self.key
    }

    pub fn name(&self) -> String {
        self.read().name().to_string()
    }

    pub fn rename(&self, name: impl Into<String>) {
        self.write().rename(name);
    }

    pub fn balance(&self) -> DomainResult<Decimal> {
        self.read().balance()
    }

    pub fn deposit(&self, description: Option<String>, amount: Amount) -> DomainResult<Operation> {
        self.write().deposit(description, amount).cloned()
    }

    pub fn withdraw(&self, amount: Amount) -> DomainResult<Operation> {
        self.write().withdraw(amount).cloned()
    }

    pub fn statement(&self) -> Vec<Operation> {
        self.read().statement().to_vec()
    }

    pub fn statement_on(&self, date: NaiveDate) -> DomainResult<Vec<Operation>> {
        self.read().statement_on(date)
    }

    pub fn summary(&self) -> DomainResult<AccountSummary> {
        self.read().summary()
    }

    fn read(&self) -> RwLockReadGuard<'_, Account> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Account> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tally_core::DomainError;

    fn handle() -> AccountHandle {
        AccountHandle::new(Account::open(AccountKey::new("111").unwrap(), "Alice"))
    }

    #[test]
    fn clones_share_the_same_account() {
        let a = handle();
        let b = a.clone();

        a.deposit(Some("salary".into()), Amount::from(100)).unwrap();
        b.rename("Alice B");

        assert_eq!(b.balance().unwrap(), Decimal::from(100));
        assert_eq!(a.name(), "Alice B");
        assert_eq!(a.statement().len(), 1);
    }

    #[test]
    fn rejected_deposit_leaves_the_account_readable() {
        let account = handle();
        account.deposit(None, Amount::new(Decimal::MAX).unwrap()).unwrap();

        let err = account.deposit(None, Amount::from(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert_eq!(account.balance().unwrap(), Decimal::MAX);
        assert_eq!(account.summary().unwrap().balance, Decimal::MAX);
        assert_eq!(account.statement().len(), 1);
        account.withdraw(Amount::from(1)).unwrap();
    }

    #[test]
    fn concurrent_withdrawals_never_overdraw() {
        let account = handle();
        account.deposit(None, Amount::from(100)).unwrap();

        let successes: usize = thread::scope(|s| {
            let workers: Vec<_> = (0..16)
                .map(|_| {
                    let account = account.clone();
                    s.spawn(move || account.withdraw(Amount::from(10)).is_ok())
                })
                .collect();
            workers
                .into_iter()
                .map(|w| usize::from(w.join().unwrap()))
                .sum()
        });

        assert_eq!(successes, 10);
        assert_eq!(account.balance().unwrap(), Decimal::ZERO);
        assert_eq!(account.statement().len(), 11);
    }
}
