use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::lead_events::adapters::inbound::http_errors::application_error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_lead_events.handle().await {
        Ok(events) => Json(events).into_response(),
        Err(e) => application_error_response(e),
    }
}
