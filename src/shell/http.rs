use axum::{
    Extension, Json, Router,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::calendar::use_cases::authorize_calendar::inbound::http as authorize_http;
use crate::modules::calendar::use_cases::schedule_event::inbound::http as schedule_http;
use crate::modules::lead_events::use_cases::create_lead_event::inbound::http as create_http;
use crate::modules::lead_events::use_cases::delete_lead_event::inbound::http as delete_http;
use crate::modules::lead_events::use_cases::list_lead_events::inbound::http as list_http;
use crate::modules::messaging::use_cases::send_sms::inbound::http as send_sms_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/send-sms", post(send_sms_http::handle))
        .route("/schedule-event", post(schedule_http::handle))
        .route("/auth/google", get(authorize_http::handle))
        .route("/events", post(create_http::handle).get(list_http::handle))
        .route("/events/{id}", delete(delete_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .route("/health", get(health))
        .layer(Extension(schema(state.clone())))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
