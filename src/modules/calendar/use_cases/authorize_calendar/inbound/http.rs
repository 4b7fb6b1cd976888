use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shared::infrastructure::error_body::provider_error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct AuthorizationUrlResponse {
    pub url: String,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.calendar.authorization_url() {
        Ok(url) => Json(AuthorizationUrlResponse { url }).into_response(),
        Err(e) => provider_error_response("calendar", e),
    }
}
