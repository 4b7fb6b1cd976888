use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::lead_events::use_cases::create_lead_event::inbound::graphql::CreateLeadEventMutation;
use crate::modules::lead_events::use_cases::delete_lead_event::inbound::graphql::DeleteLeadEventMutation;
use crate::modules::lead_events::use_cases::list_lead_events::inbound::graphql::LeadEventsQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(LeadEventsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateLeadEventMutation, DeleteLeadEventMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
