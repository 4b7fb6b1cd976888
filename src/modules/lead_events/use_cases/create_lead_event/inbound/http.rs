use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::lead_events::adapters::inbound::http_errors::{
    application_error_response, message_response,
};
use crate::modules::lead_events::use_cases::create_lead_event::command::CreateLeadEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateLeadEventBody {
    pub lead_name: Option<String>,
    pub event_type: Option<String>,
    pub date_time: Option<String>,
    pub reminder_sent: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateLeadEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return message_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let command = CreateLeadEvent {
        lead_name: body.lead_name,
        event_type: body.event_type,
        date_time: body.date_time,
        reminder_sent: body.reminder_sent,
    };

    match state.create_lead_event.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => application_error_response(e),
    }
}
