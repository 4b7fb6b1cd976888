use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::lead_events::adapters::outbound::lead_event_store::in_memory::InMemoryLeadEventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::gateways::{FakeCalendarGateway, FakeMessagingGateway};
use crate::tests::fixtures::state::make_state_with;

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn state(messaging: FakeMessagingGateway, calendar: FakeCalendarGateway) -> AppState {
    make_state_with(
        InMemoryLeadEventStore::new(),
        Arc::new(messaging),
        Arc::new(calendar),
    )
}

#[rstest]
#[tokio::test]
async fn it_should_forward_the_sms_and_return_the_sid() {
    let messaging = Arc::new(FakeMessagingGateway::succeeding("SM42"));
    let state = make_state_with(
        InMemoryLeadEventStore::new(),
        messaging.clone(),
        Arc::new(FakeCalendarGateway::succeeding("https://calendar.test/event")),
    );

    let (status, body) = send(
        state,
        post_json("/send-sms", json!({ "to": "+15551234567", "message": "hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "sid": "SM42" }));
    assert_eq!(
        *messaging.sent.lock().await,
        vec![("+15551234567".to_string(), "hello".to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_relay_the_sms_provider_error_verbatim() {
    let state = state(
        FakeMessagingGateway::failing("The 'To' number is not a valid phone number."),
        FakeCalendarGateway::succeeding("https://calendar.test/event"),
    );

    let (status, body) = send(
        state,
        post_json("/send-sms", json!({ "to": "abc", "message": "hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "The 'To' number is not a valid phone number." })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_schedule_the_event_and_return_the_link() {
    let calendar = Arc::new(FakeCalendarGateway::succeeding(
        "https://calendar.google.com/event?eid=1",
    ));
    let state = make_state_with(
        InMemoryLeadEventStore::new(),
        Arc::new(FakeMessagingGateway::succeeding("SM42")),
        calendar.clone(),
    );

    let (status, body) = send(
        state,
        post_json(
            "/schedule-event",
            json!({
                "summary": "Call Alice",
                "startTime": "2024-01-01T10:00:00",
                "endTime": "2024-01-01T10:30:00"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "link": "https://calendar.google.com/event?eid=1" })
    );
    assert_eq!(
        *calendar.created.lock().await,
        vec![(
            "Call Alice".to_string(),
            "2024-01-01T10:00:00".to_string(),
            "2024-01-01T10:30:00".to_string()
        )]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_relay_the_calendar_provider_error_verbatim() {
    let state = state(
        FakeMessagingGateway::succeeding("SM42"),
        FakeCalendarGateway::failing("Invalid start time."),
    );

    let (status, body) = send(
        state,
        post_json(
            "/schedule-event",
            json!({ "summary": "Call", "startTime": "x", "endTime": "y" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Invalid start time." }));
}

#[rstest]
#[tokio::test]
async fn it_should_return_400_on_a_malformed_sms_body() {
    let state = state(
        FakeMessagingGateway::succeeding("SM42"),
        FakeCalendarGateway::succeeding("https://calendar.test/event"),
    );
    let request = Request::post("/send-sms")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(state, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[rstest]
#[tokio::test]
async fn it_should_return_the_calendar_consent_url() {
    let state = state(
        FakeMessagingGateway::succeeding("SM42"),
        FakeCalendarGateway::succeeding("https://calendar.test/event"),
    );

    let (status, body) = send(
        state,
        Request::get("/auth/google").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["url"]
            .as_str()
            .unwrap()
            .starts_with("https://accounts.google.com/")
    );
}

#[rstest]
#[tokio::test]
async fn it_should_report_healthy() {
    let state = state(
        FakeMessagingGateway::succeeding("SM42"),
        FakeCalendarGateway::succeeding("https://calendar.test/event"),
    );

    let (status, body) = send(state, Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[rstest]
#[case(json!({ "to": 15551234567u64, "message": "hi" }), "15551234567", "hi")]
#[case(json!({ "to": null, "message": "hi" }), "", "hi")]
#[case(json!({ "message": "hi" }), "", "hi")]
#[case(json!({}), "", "")]
#[tokio::test]
async fn it_should_forward_sms_fields_without_type_checking_them(
    #[case] request_body: Value,
    #[case] expected_to: &str,
    #[case] expected_message: &str,
) {
    let messaging = Arc::new(FakeMessagingGateway::succeeding("SM42"));
    let state = make_state_with(
        InMemoryLeadEventStore::new(),
        messaging.clone(),
        Arc::new(FakeCalendarGateway::succeeding("https://calendar.test/event")),
    );

    let (status, body) = send(state, post_json("/send-sms", request_body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "sid": "SM42" }));
    assert_eq!(
        *messaging.sent.lock().await,
        vec![(expected_to.to_string(), expected_message.to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_forward_missing_or_non_string_calendar_fields_as_text() {
    let calendar = Arc::new(FakeCalendarGateway::succeeding(
        "https://calendar.google.com/event?eid=1",
    ));
    let state = make_state_with(
        InMemoryLeadEventStore::new(),
        Arc::new(FakeMessagingGateway::succeeding("SM42")),
        calendar.clone(),
    );

    let (status, _) = send(
        state,
        post_json("/schedule-event", json!({ "summary": 42, "endTime": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        *calendar.created.lock().await,
        vec![("42".to_string(), String::new(), String::new())]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_return_400_on_a_malformed_schedule_event_body() {
    let calendar = Arc::new(FakeCalendarGateway::succeeding(
        "https://calendar.test/event",
    ));
    let state = make_state_with(
        InMemoryLeadEventStore::new(),
        Arc::new(FakeMessagingGateway::succeeding("SM42")),
        calendar.clone(),
    );
    let request = Request::post("/schedule-event")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(state, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(calendar.created.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_return_500_when_the_calendar_client_is_not_configured() {
    let state = state(
        FakeMessagingGateway::succeeding("SM42"),
        FakeCalendarGateway::failing("calendar OAuth client is not configured"),
    );

    let (status, body) = send(
        state,
        Request::get("/auth/google").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "calendar OAuth client is not configured" })
    );
}
