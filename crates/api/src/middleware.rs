use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use tally_core::AccountKey;

use crate::app::{errors, services::AppServices};
use crate::context::AccountContext;

/// Header carrying the caller-supplied account key.
pub const ACCOUNT_KEY_HEADER: &str = "cpf";

/// Resolve the `cpf` header to an account before any account-scoped handler
/// runs. Requests that cannot be resolved never reach the ledger.
pub async fn resolve_account(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let key = match extract_account_key(req.headers()) {
        Ok(key) => key,
        Err(resp) => return resp,
    };

    let account = match services.accounts().find_by_key(&key) {
        Ok(account) => account,
        Err(e) => {
            tracing::debug!(error = %e, "account resolution failed");
            return errors::domain_error_to_response(e);
        }
    };

    req.extensions_mut().insert(AccountContext::new(account));

    next.run(req).await
}

fn extract_account_key(headers: &HeaderMap) -> Result<AccountKey, Response> {
    let header = headers.get(ACCOUNT_KEY_HEADER).ok_or_else(|| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_account_key",
            "the cpf header is required",
        )
    })?;

    let raw = header.to_str().map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_account_key",
            "the cpf header must be visible ASCII",
        )
    })?;

    AccountKey::new(raw).map_err(errors::domain_error_to_response)
}
