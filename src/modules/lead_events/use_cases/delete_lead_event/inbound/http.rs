use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::lead_events::adapters::inbound::http_errors::{
    application_error_response, message_response,
};
use crate::modules::lead_events::core::errors::EVENT_NOT_FOUND_MESSAGE;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteLeadEventResponse {
    pub success: bool,
    pub message: String,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    // A non-numeric id can never match a stored record.
    let Ok(id) = id.parse::<u64>() else {
        return message_response(StatusCode::NOT_FOUND, EVENT_NOT_FOUND_MESSAGE);
    };

    match state.delete_lead_event.handle(id).await {
        Ok(_) => Json(DeleteLeadEventResponse {
            success: true,
            message: "Event deleted.".into(),
        })
        .into_response(),
        Err(e) => application_error_response(e),
    }
}
