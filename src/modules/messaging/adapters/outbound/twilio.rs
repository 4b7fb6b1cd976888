use reqwest::Client;
use serde::Deserialize;

use crate::modules::messaging::core::ports::{MessagingGateway, SentMessage};
use crate::shared::core::provider_error::ProviderError;

pub const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub api_base_url: String,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            api_base_url: DEFAULT_TWILIO_API_BASE_URL.to_string(),
        }
    }
}

impl TwilioConfig {
    /// Account SID, auth token and sender number, when all three are set.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        match (
            self.account_sid.as_deref(),
            self.auth_token.as_deref(),
            self.from_number.as_deref(),
        ) {
            (Some(sid), Some(token), Some(from)) => Some((sid, token, from)),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Deserialize)]
struct TwilioErrorBody {
    message: String,
}

/// Sends SMS through the Twilio Messages REST resource.
#[derive(Clone)]
pub struct TwilioMessagingGateway {
    client: Client,
    config: TwilioConfig,
}

impl TwilioMessagingGateway {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn credentials(&self) -> Result<(&str, &str, &str), ProviderError> {
        self.config
            .credentials()
            .ok_or_else(|| ProviderError::new("messaging provider is not configured"))
    }
}

#[async_trait::async_trait]
impl MessagingGateway for TwilioMessagingGateway {
    async fn send_message(&self, to: &str, body: &str) -> Result<SentMessage, ProviderError> {
        let (account_sid, auth_token, from) = self.credentials()?;
        let url = format!(
            "{}/2010-04-01/Accounts/{account_sid}/Messages.json",
            self.config.api_base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<TwilioErrorBody>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(ProviderError::new(message));
        }

        let resource: MessageResource = serde_json::from_str(&text)
            .map_err(|e| ProviderError::new(format!("unreadable provider response: {e}")))?;
        Ok(SentMessage {
            provider_message_id: resource.sid,
        })
    }
}
