use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use tally_core::{Amount, Entity, OperationId};

/// Direction of a ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Credit,
    Debit,
}

/// One entry of an account's log (immutable once appended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    id: OperationId,
    #[serde(rename = "type")]
    kind: OperationKind,
    amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Operation {
    pub(crate) fn credit(description: Option<String>, amount: Amount, at: DateTime<Utc>) -> Self {
        Self {
            id: OperationId::new(),
            kind: OperationKind::Credit,
            amount,
            description,
            created_at: at,
        }
    }

    pub(crate) fn debit(amount: Amount, at: DateTime<Utc>) -> Self {
        Self {
            id: OperationId::new(),
            kind: OperationKind::Debit,
            amount,
            description: None,
            created_at: at,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Calendar day (UTC) the operation was recorded on.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Contribution of this operation to the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationKind::Credit => self.amount.value(),
            OperationKind::Debit => -self.amount.value(),
        }
    }
}

impl Entity for Operation {
    type Id = OperationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
