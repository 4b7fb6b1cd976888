// Composition root for the relay.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the lead event store and the provider gateways.
// - Wire them into use case handlers through AppState.
// - Expose the HTTP router (REST routes and the GraphQL endpoint).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
