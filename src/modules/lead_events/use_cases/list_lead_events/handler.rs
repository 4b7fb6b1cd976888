use crate::modules::lead_events::core::errors::ApplicationError;
use crate::modules::lead_events::core::lead_event::LeadEvent;
use crate::modules::lead_events::adapters::outbound::lead_event_store::LeadEventStore;
use std::sync::Arc;

pub struct ListLeadEventsHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListLeadEventsHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<LeadEvent>, ApplicationError> {
        Ok(self.store.list().await?)
    }
}
