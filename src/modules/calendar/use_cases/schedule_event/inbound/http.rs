use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::error_body::{error_response, provider_error_response};
use crate::shared::infrastructure::request_fields::forwarded_text;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventBody {
    pub summary: Option<serde_json::Value>,
    pub start_time: Option<serde_json::Value>,
    pub end_time: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct ScheduleEventResponse {
    pub success: bool,
    pub link: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ScheduleEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let summary = forwarded_text(body.summary);
    let start_time = forwarded_text(body.start_time);
    let end_time = forwarded_text(body.end_time);

    match state
        .calendar
        .create_event(&summary, &start_time, &end_time)
        .await
    {
        Ok(created) => {
            tracing::info!(link = %created.event_link, "calendar event created");
            Json(ScheduleEventResponse {
                success: true,
                link: created.event_link,
            })
            .into_response()
        }
        Err(e) => provider_error_response("calendar", e),
    }
}
