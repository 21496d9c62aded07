pub mod posts;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::error;

use snsfetch_accounts::{AccountError, ErrorClass};
use snsfetch_common::HealthCheck;

use crate::AppState;

// --- Query structs ---

#[derive(Deserialize)]
pub struct AccountQuery {
    sns: String,
    account_id: String,
}

// --- Helpers ---

/// `{"detail": ...}` error body.
pub(crate) fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({"detail": message.into()})),
    )
        .into_response()
}

fn account_error_response(err: &AccountError) -> Response {
    match (err, err.class()) {
        (AccountError::NotFound(_), _) => detail(StatusCode::NOT_FOUND, err.public_message()),
        (_, ErrorClass::Client) => detail(StatusCode::BAD_REQUEST, err.public_message()),
        (_, ErrorClass::Server) => {
            error!(error = %err, "account lookup failed on the server side");
            detail(StatusCode::INTERNAL_SERVER_ERROR, err.public_message())
        }
    }
}

// --- Handlers ---

pub async fn api_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "SNS Fetcher API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn api_health() -> impl IntoResponse {
    Json(HealthCheck {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn api_account(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AccountQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return detail(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.resolver.resolve(&params.sns, &params.account_id).await {
        Ok(info) => Json(info).into_response(),
        Err(e) => account_error_response(&e),
    }
}
