use axum::{
    routing::{get, post},
    Router,
};

pub mod account;
pub mod ledger;
pub mod system;

/// Router for all account-scoped endpoints (the caller's `cpf` header must
/// resolve to an account).
pub fn router() -> Router {
    Router::new()
        .route(
            "/account",
            get(account::get_account)
                .put(account::rename_account)
                .delete(account::delete_account),
        )
        .route("/balance", get(ledger::get_balance))
        .route("/deposit", post(ledger::deposit))
        .route("/withdraw", post(ledger::withdraw))
        .route("/statement", get(ledger::get_statement))
        .route("/statement/date", get(ledger::get_statement_by_date))
}
