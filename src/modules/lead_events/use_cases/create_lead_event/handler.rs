use crate::modules::lead_events::core::errors::ApplicationError;
use crate::modules::lead_events::core::lead_event::{LeadEvent, decide_new_lead_event};
use crate::modules::lead_events::use_cases::create_lead_event::command::CreateLeadEvent;
use crate::modules::lead_events::adapters::outbound::lead_event_store::LeadEventStore;
use std::sync::Arc;

pub struct CreateLeadEventHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateLeadEventHandler<TStore>
where
    TStore: LeadEventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateLeadEvent) -> Result<LeadEvent, ApplicationError> {
        let new_event = decide_new_lead_event(
            command.lead_name,
            command.event_type,
            command.date_time,
            command.reminder_sent,
        )?;
        let event = self.store.append(new_event).await?;
        tracing::info!(id = event.id, event_type = %event.event_type, "lead event created");
        Ok(event)
    }
}
