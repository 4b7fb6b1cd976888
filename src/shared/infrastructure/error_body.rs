use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::provider_error::ProviderError;

/// Failure body of the provider relay routes: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn provider_error_response(provider: &str, error: ProviderError) -> Response {
    tracing::error!(provider, error = %error, "provider call failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, error.message)
}
