use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use tally_core::{AccountKey, Amount, DomainError, DomainResult};
use tally_ledger::AccountSummary;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
}

// -------------------------
// Boundary validation
// -------------------------

impl CreateAccountRequest {
    pub fn key(&self) -> DomainResult<AccountKey> {
        AccountKey::new(&self.cpf)
    }
}

impl DepositRequest {
    pub fn amount(&self) -> DomainResult<Amount> {
        Amount::new(self.amount)
    }
}

impl WithdrawRequest {
    pub fn amount(&self) -> DomainResult<Amount> {
        Amount::new(self.amount)
    }
}

impl StatementDateQuery {
    pub fn date(&self) -> DomainResult<NaiveDate> {
        parse_date(&self.date)
    }
}

pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        DomainError::invalid_input(format!("date must be YYYY-MM-DD (got {raw:?}): {e}"))
    })
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn account_to_json(summary: AccountSummary) -> serde_json::Value {
    serde_json::json!({
        "id": summary.id.to_string(),
        "name": summary.name,
        "cpf": summary.key.as_str(),
        "amount": summary.balance,
    })
}

pub fn balance_to_json(balance: Decimal) -> serde_json::Value {
    serde_json::json!({ "amount": balance })
}
