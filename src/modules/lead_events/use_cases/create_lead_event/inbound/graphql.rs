use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::lead_events::adapters::inbound::graphql_errors::graphql_error;
use crate::modules::lead_events::use_cases::create_lead_event::command::CreateLeadEvent;
use crate::modules::lead_events::use_cases::list_lead_events::inbound::graphql::GqlLeadEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateLeadEventMutation;

#[Object]
impl CreateLeadEventMutation {
    async fn create_lead_event(
        &self,
        context: &Context<'_>,
        lead_name: Option<String>,
        event_type: Option<String>,
        date_time: Option<String>,
        reminder_sent: Option<bool>,
    ) -> GqlResult<GqlLeadEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateLeadEvent {
            lead_name,
            event_type,
            date_time,
            reminder_sent,
        };
        let event = state
            .create_lead_event
            .handle(command)
            .await
            .map_err(graphql_error)?;
        Ok(event.into())
    }
}
