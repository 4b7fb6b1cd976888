use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::lead_events::adapters::inbound::graphql_errors::graphql_error;
use crate::modules::lead_events::core::lead_event::LeadEvent;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLeadEvent {
    pub id: u64,
    pub lead_name: String,
    pub event_type: String,
    pub date_time: String,
    pub reminder_sent: Option<bool>,
}

impl From<LeadEvent> for GqlLeadEvent {
    fn from(e: LeadEvent) -> Self {
        Self {
            id: e.id,
            lead_name: e.lead_name,
            event_type: e.event_type,
            date_time: e.date_time,
            reminder_sent: e.reminder_sent,
        }
    }
}

#[derive(Default)]
pub struct LeadEventsQuery;

#[Object]
impl LeadEventsQuery {
    async fn lead_events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlLeadEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .list_lead_events
            .handle()
            .await
            .map_err(graphql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
