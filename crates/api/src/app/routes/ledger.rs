use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::context::AccountContext;

pub async fn get_balance(Extension(ctx): Extension<AccountContext>) -> axum::response::Response {
    match ctx.account().balance() {
        Ok(balance) => (StatusCode::OK, Json(dto::balance_to_json(balance))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn deposit(
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(r) => return errors::json_rejection(r),
    };
    let amount = match body.amount() {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match ctx.account().deposit(body.description, amount) {
        Ok(op) => (StatusCode::CREATED, Json(op)).into_response(),
        Err(e) => {
            tracing::debug!(account_id = %ctx.account().id(), error = %e, "deposit rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn withdraw(
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(r) => return errors::json_rejection(r),
    };
    let amount = match body.amount() {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match ctx.account().withdraw(amount) {
        Ok(op) => (StatusCode::CREATED, Json(op)).into_response(),
        Err(e) => {
            tracing::debug!(account_id = %ctx.account().id(), error = %e, "withdrawal rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn get_statement(Extension(ctx): Extension<AccountContext>) -> axum::response::Response {
    (StatusCode::OK, Json(ctx.account().statement())).into_response()
}

pub async fn get_statement_by_date(
    Extension(ctx): Extension<AccountContext>,
    query: Result<Query<dto::StatementDateQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(r) => return errors::query_rejection(r),
    };
    let date = match query.date() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match ctx.account().statement_on(date) {
        Ok(ops) => (StatusCode::OK, Json(ops)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
