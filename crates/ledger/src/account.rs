use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use tally_core::{AccountId, AccountKey, Amount, DomainError, DomainResult, Entity};

use crate::ledger;
use crate::operation::Operation;

/// A registered account and its operation log.
///
/// `id` and `key` never change after construction. The log only grows, and
/// only through `deposit*` / `withdraw*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    key: AccountKey,
    name: String,
    operations: Vec<Operation>,
}

/// Read-only view of an account with its derived balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub key: AccountKey,
    pub name: String,
    pub balance: Decimal,
}

impl Account {
    /// Fresh account with an empty log.
    pub fn open(key: AccountKey, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            key,
            name: name.into(),
            operations: Vec::new(),
        }
    }

    pub fn key(&self) -> &AccountKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn balance(&self) -> DomainResult<Decimal> {
        ledger::balance(&self.operations)
    }

    /// Full log, insertion order.
    pub fn statement(&self) -> &[Operation] {
        &self.operations
    }

    pub fn statement_on(&self, date: NaiveDate) -> DomainResult<Vec<Operation>> {
        ledger::operations_on(&self.operations, date)
    }

    pub fn summary(&self) -> DomainResult<AccountSummary> {
        Ok(AccountSummary {
            id: self.id,
            key: self.key.clone(),
            name: self.name.clone(),
            balance: self.balance()?,
        })
    }

    pub fn deposit(
        &mut self,
        description: Option<String>,
        amount: Amount,
    ) -> DomainResult<&Operation> {
        self.deposit_at(description, amount, Utc::now())
    }

    /// Append a credit.
    ///
    /// There is no funds check, but a credit that would carry the balance past
    /// `Decimal::MAX` is rejected with `InvalidInput` and nothing is appended.
    pub fn deposit_at(
        &mut self,
        description: Option<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<&Operation> {
        if self.balance()?.checked_add(amount.value()).is_none() {
            return Err(DomainError::invalid_input(format!(
                "deposit of {amount} would overflow the balance"
            )));
        }
        Ok(self.push(Operation::credit(description, amount, at)))
    }

    pub fn withdraw(&mut self, amount: Amount) -> DomainResult<&Operation> {
        self.withdraw_at(amount, Utc::now())
    }

    /// Append a debit, provided the current balance covers `amount`.
    pub fn withdraw_at(&mut self, amount: Amount, at: DateTime<Utc>) -> DomainResult<&Operation> {
        let available = self.balance()?;
        if amount.value() > available {
            return Err(DomainError::insufficient_funds(amount.value(), available));
        }
        Ok(self.push(Operation::debit(amount, at)))
    }

    fn push(&mut self, op: Operation) -> &Operation {
        self.operations.push(op);
        &self.operations[self.operations.len() - 1]
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
