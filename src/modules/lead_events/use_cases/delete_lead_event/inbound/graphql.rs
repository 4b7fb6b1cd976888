use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::lead_events::adapters::inbound::graphql_errors::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteLeadEventMutation;

#[Object]
impl DeleteLeadEventMutation {
    async fn delete_lead_event(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_lead_event
            .handle(id)
            .await
            .map_err(graphql_error)?;
        Ok(true)
    }
}
