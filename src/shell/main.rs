use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use lead_relay::modules::calendar::adapters::outbound::google_calendar::GoogleCalendarGateway;
use lead_relay::modules::messaging::adapters::outbound::twilio::TwilioMessagingGateway;
use lead_relay::modules::lead_events::adapters::outbound::lead_event_store::in_memory::InMemoryLeadEventStore;
use lead_relay::shell::config::AppConfig;
use lead_relay::shell::http::router;
use lead_relay::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment still applies.
    let dotenv = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = AppConfig::from_env()?;
    if !config.twilio.is_configured() {
        tracing::warn!(
            "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN or TWILIO_PHONE_NUMBER not set; /send-sms will fail"
        );
    }
    if !config.google_calendar.is_authorized() {
        tracing::warn!(
            "GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET or GOOGLE_REFRESH_TOKEN not set; /schedule-event will fail"
        );
    }

    // In-memory store for now
    let store = Arc::new(InMemoryLeadEventStore::new());
    let messaging = Arc::new(TwilioMessagingGateway::new(config.twilio.clone()));
    let calendar = Arc::new(GoogleCalendarGateway::new(config.google_calendar.clone()));

    let app = router(AppState::new(store, messaging, calendar));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
