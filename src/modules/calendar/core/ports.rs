use async_trait::async_trait;

use crate::shared::core::provider_error::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCalendarEvent {
    pub event_link: String,
}

/// Outbound calendar capability, always targeting the primary calendar in a
/// single configured time zone.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    async fn create_event(
        &self,
        summary: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<CreatedCalendarEvent, ProviderError>;

    /// OAuth consent URL an operator visits to grant calendar access.
    fn authorization_url(&self) -> Result<String, ProviderError>;
}
