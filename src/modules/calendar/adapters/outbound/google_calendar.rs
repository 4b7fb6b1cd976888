//! Google Calendar v3 adapter.
//!
//! Every call exchanges the configured OAuth refresh token for a short-lived
//! access token, then inserts the event into the `primary` calendar.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::modules::calendar::core::ports::{CalendarGateway, CreatedCalendarEvent};
use crate::shared::core::provider_error::ProviderError;

pub const DEFAULT_CALENDAR_API_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_OAUTH_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_TIME_ZONE: &str = "America/Denver";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.events";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCalendarConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub refresh_token: Option<String>,
    pub time_zone: String,
    pub api_base_url: String,
    pub token_url: String,
}

impl Default for GoogleCalendarConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            refresh_token: None,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            api_base_url: DEFAULT_CALENDAR_API_BASE_URL.to_string(),
            token_url: DEFAULT_OAUTH_TOKEN_URL.to_string(),
        }
    }
}

impl GoogleCalendarConfig {
    /// Client id, client secret and refresh token, when all three are set.
    pub fn refresh_credentials(&self) -> Option<(&str, &str, &str)> {
        match (
            self.client_id.as_deref(),
            self.client_secret.as_deref(),
            self.refresh_token.as_deref(),
        ) {
            (Some(id), Some(secret), Some(token)) => Some((id, secret, token)),
            _ => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.refresh_credentials().is_some()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDateTime<'a> {
    date_time: &'a str,
    time_zone: &'a str,
}

#[derive(Serialize)]
struct EventResource<'a> {
    summary: &'a str,
    start: EventDateTime<'a>,
    end: EventDateTime<'a>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertedEvent {
    html_link: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenErrorBody {
    error: String,
    error_description: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct GoogleCalendarGateway {
    client: Client,
    config: GoogleCalendarConfig,
}

impl GoogleCalendarGateway {
    pub fn new(config: GoogleCalendarConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn access_token(&self) -> Result<String, ProviderError> {
        let Some((client_id, client_secret, refresh_token)) = self.config.refresh_credentials()
        else {
            return Err(ProviderError::new("calendar provider is not authorized"));
        };

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<TokenErrorBody>(&text)
                .map(|e| e.error_description.unwrap_or(e.error))
                .unwrap_or(text);
            return Err(ProviderError::new(message));
        }

        serde_json::from_str::<TokenResponse>(&text)
            .map(|t| t.access_token)
            .map_err(|e| ProviderError::new(format!("unreadable token response: {e}")))
    }
}

#[async_trait::async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    async fn create_event(
        &self,
        summary: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<CreatedCalendarEvent, ProviderError> {
        let access_token = self.access_token().await?;
        let time_zone = self.config.time_zone.as_str();
        let resource = EventResource {
            summary,
            start: EventDateTime {
                date_time: start_time,
                time_zone,
            },
            end: EventDateTime {
                date_time: end_time,
                time_zone,
            },
        };
        let url = format!(
            "{}/calendar/v3/calendars/primary/events",
            self.config.api_base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&resource)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ProviderError::new(message));
        }

        let inserted: InsertedEvent = serde_json::from_str(&text)
            .map_err(|e| ProviderError::new(format!("unreadable provider response: {e}")))?;
        Ok(CreatedCalendarEvent {
            event_link: inserted.html_link,
        })
    }

    fn authorization_url(&self) -> Result<String, ProviderError> {
        let (Some(client_id), Some(redirect_uri)) = (
            self.config.client_id.as_deref(),
            self.config.redirect_uri.as_deref(),
        ) else {
            return Err(ProviderError::new(
                "calendar OAuth client is not configured",
            ));
        };

        let url = Url::parse_with_params(
            DEFAULT_OAUTH_AUTHORIZE_URL,
            &[
                ("client_id", client_id),
                ("redirect_uri", redirect_uri),
                ("response_type", "code"),
                ("scope", CALENDAR_SCOPE),
                ("access_type", "offline"),
                ("prompt", "consent"),
            ],
        )
        .map_err(|e| ProviderError::new(e.to_string()))?;
        Ok(url.into())
    }
}
