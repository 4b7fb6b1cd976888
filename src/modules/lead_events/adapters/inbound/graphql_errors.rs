use crate::modules::lead_events::adapters::inbound::http_errors::INTERNAL_ERROR_MESSAGE;
use crate::modules::lead_events::core::errors::ApplicationError;

pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "lead event handling failed");
            async_graphql::Error::new(INTERNAL_ERROR_MESSAGE)
        }
        other => async_graphql::Error::new(other.to_string()),
    }
}
