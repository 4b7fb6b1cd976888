use async_trait::async_trait;

use crate::shared::core::provider_error::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub provider_message_id: String,
}

/// Outbound SMS capability.
///
/// Implementations forward `to` and `body` as given and surface the provider's
/// failure text unchanged. No retries.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send_message(&self, to: &str, body: &str) -> Result<SentMessage, ProviderError>;
}
