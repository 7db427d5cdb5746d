use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors, services::AppServices};
use crate::context::AccountContext;

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(r) => return errors::json_rejection(r),
    };
    let key = match body.key() {
        Ok(k) => k,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let account = match services.accounts().create(key, body.name) {
        Ok(a) => a,
        Err(e) => {
            tracing::warn!(error = %e, "account creation rejected");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(account_id = %account.id(), "account created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "account created",
            "id": account.id().to_string(),
        })),
    )
        .into_response()
}

pub async fn get_account(
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match ctx.account().summary() {
        Ok(summary) => (StatusCode::OK, Json(dto::account_to_json(summary))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn rename_account(
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::RenameAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(r) => return errors::json_rejection(r),
    };
    ctx.account().rename(body.name.clone());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("name updated to: {}", body.name),
        })),
    )
        .into_response()
}

pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    let remaining = match services.accounts().delete(ctx.account()) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(account_id = %ctx.account().id(), "account deleted");

    let items = remaining
        .into_iter()
        .map(dto::account_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
