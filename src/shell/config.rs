use thiserror::Error;

use crate::modules::calendar::adapters::outbound::google_calendar::{
    DEFAULT_CALENDAR_API_BASE_URL, DEFAULT_OAUTH_TOKEN_URL, DEFAULT_TIME_ZONE,
    GoogleCalendarConfig,
};
use crate::modules::messaging::adapters::outbound::twilio::{
    DEFAULT_TWILIO_API_BASE_URL, TwilioConfig,
};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub twilio: TwilioConfig,
    pub google_calendar: GoogleCalendarConfig,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort {
                    reason: e.to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            twilio: TwilioConfig {
                account_sid: var("TWILIO_ACCOUNT_SID"),
                auth_token: var("TWILIO_AUTH_TOKEN"),
                from_number: var("TWILIO_PHONE_NUMBER"),
                api_base_url: var_or("TWILIO_API_BASE_URL", DEFAULT_TWILIO_API_BASE_URL),
            },
            google_calendar: GoogleCalendarConfig {
                client_id: var("GOOGLE_CLIENT_ID"),
                client_secret: var("GOOGLE_CLIENT_SECRET"),
                redirect_uri: var("GOOGLE_REDIRECT_URI"),
                refresh_token: var("GOOGLE_REFRESH_TOKEN"),
                time_zone: var_or("CALENDAR_TIME_ZONE", DEFAULT_TIME_ZONE),
                api_base_url: var_or(
                    "GOOGLE_CALENDAR_API_BASE_URL",
                    DEFAULT_CALENDAR_API_BASE_URL,
                ),
                token_url: var_or("GOOGLE_OAUTH_TOKEN_URL", DEFAULT_OAUTH_TOKEN_URL),
            },
        })
    }
}
