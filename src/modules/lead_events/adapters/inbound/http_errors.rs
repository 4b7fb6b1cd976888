use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::lead_events::core::errors::ApplicationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn application_error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(e) => message_response(StatusCode::BAD_REQUEST, e.to_string()),
        ApplicationError::NotFound { id } => {
            tracing::debug!(id, "lead event not found");
            message_response(StatusCode::NOT_FOUND, error.to_string())
        }
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "lead event handling failed");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}
