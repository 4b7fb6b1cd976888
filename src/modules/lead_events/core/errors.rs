use thiserror::Error;

use crate::modules::lead_events::adapters::outbound::lead_event_store::LeadEventStoreError;

pub const EVENT_NOT_FOUND_MESSAGE: &str = "Event not found.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("lead_name, event_type, and date_time are required.")]
    MissingRequiredFields,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] DecideError),

    #[error("{message}", message = EVENT_NOT_FOUND_MESSAGE)]
    NotFound { id: u64 },

    #[error(transparent)]
    Store(#[from] LeadEventStoreError),
}
