use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::error_body::{error_response, provider_error_response};
use crate::shared::infrastructure::request_fields::forwarded_text;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SendSmsBody {
    pub to: Option<serde_json::Value>,
    pub message: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct SendSmsResponse {
    pub success: bool,
    pub sid: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SendSmsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let to = forwarded_text(body.to);
    let message = forwarded_text(body.message);

    match state.messaging.send_message(&to, &message).await {
        Ok(sent) => {
            tracing::info!(sid = %sent.provider_message_id, "sms sent");
            Json(SendSmsResponse {
                success: true,
                sid: sent.provider_message_id,
            })
            .into_response()
        }
        Err(e) => provider_error_response("messaging", e),
    }
}
