use thiserror::Error;

/// Failure reported by (or while reaching) a third-party provider.
///
/// The message is the upstream text and is relayed to callers verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}
