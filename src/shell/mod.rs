// Composition root for the shift tracker.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the configured document store.
// - Wire the store into use case handlers and expose them over REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
