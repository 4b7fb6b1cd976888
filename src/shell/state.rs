use crate::modules::calendar::core::ports::CalendarGateway;
use crate::modules::lead_events::use_cases::create_lead_event::handler::CreateLeadEventHandler;
use crate::modules::lead_events::use_cases::delete_lead_event::handler::DeleteLeadEventHandler;
use crate::modules::lead_events::use_cases::list_lead_events::handler::ListLeadEventsHandler;
use crate::modules::messaging::core::ports::MessagingGateway;
use crate::modules::lead_events::adapters::outbound::lead_event_store::in_memory::InMemoryLeadEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_lead_event: Arc<CreateLeadEventHandler<InMemoryLeadEventStore>>,
    pub list_lead_events: Arc<ListLeadEventsHandler<InMemoryLeadEventStore>>,
    pub delete_lead_event: Arc<DeleteLeadEventHandler<InMemoryLeadEventStore>>,
    pub messaging: Arc<dyn MessagingGateway>,
    pub calendar: Arc<dyn CalendarGateway>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryLeadEventStore>,
        messaging: Arc<dyn MessagingGateway>,
        calendar: Arc<dyn CalendarGateway>,
    ) -> Self {
        Self {
            create_lead_event: Arc::new(CreateLeadEventHandler::new(store.clone())),
            list_lead_events: Arc::new(ListLeadEventsHandler::new(store.clone())),
            delete_lead_event: Arc::new(DeleteLeadEventHandler::new(store)),
            messaging,
            calendar,
        }
    }
}
