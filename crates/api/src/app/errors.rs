use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tally_core::DomainError;

/// Translate a ledger/store failure into an HTTP error response.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::DuplicateKey(_) => StatusCode::CONFLICT,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::InsufficientFunds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NoOperationsForDate(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    };
    json_error(status, error_code(&err), err.to_string())
}

pub fn error_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::DuplicateKey(_) => "duplicate_key",
        DomainError::NotFound => "account_not_found",
        DomainError::InsufficientFunds { .. } => "insufficient_funds",
        DomainError::NoOperationsForDate(_) => "no_operations_for_date",
        DomainError::InvalidInput(_) => "validation_error",
    }
}

/// Malformed, mistyped or missing JSON body. Keeps axum's status (400, 415 or
/// 422) but uses the common error shape.
pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

/// Missing or undecodable query string.
pub fn query_rejection(rejection: QueryRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_query", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (DomainError::duplicate_key("1"), StatusCode::CONFLICT),
            (DomainError::NotFound, StatusCode::NOT_FOUND),
            (
                DomainError::insufficient_funds(Decimal::ONE, Decimal::ZERO),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::NoOperationsForDate(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
                StatusCode::NOT_FOUND,
            ),
            (DomainError::invalid_input("bad"), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }

    #[test]
    fn codes_are_distinct_per_error_kind() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let codes = [
            error_code(&DomainError::duplicate_key("1")),
            error_code(&DomainError::NotFound),
            error_code(&DomainError::insufficient_funds(Decimal::ONE, Decimal::ZERO)),
            error_code(&DomainError::NoOperationsForDate(date)),
            error_code(&DomainError::invalid_input("bad")),
        ];
        assert_eq!(codes[3], "no_operations_for_date");
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
