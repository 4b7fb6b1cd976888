use crate::modules::lead_events::core::errors::ApplicationError;
use crate::modules::lead_events::core::lead_event::LeadEvent;
use crate::modules::lead_events::adapters::outbound::lead_event_store::LeadEventStore;
use std::sync::Arc;

pub struct DeleteLeadEventHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteLeadEventHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: u64) -> Result<LeadEvent, ApplicationError> {
        match self.store.delete(id).await? {
            Some(event) => {
                tracing::info!(id, "lead event deleted");
                Ok(event)
            }
            None => Err(ApplicationError::NotFound { id }),
        }
    }
}
