use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::shifts::use_cases::get_current_shift::inbound::graphql::CurrentShiftQuery;
use crate::modules::shifts::use_cases::list_shift_history::inbound::graphql::ShiftHistoryQuery;
use crate::modules::shifts::use_cases::start_event::inbound::graphql::StartEventMutation;
use crate::modules::shifts::use_cases::start_shift::inbound::graphql::StartShiftMutation;
use crate::modules::shifts::use_cases::stop_event::inbound::graphql::StopEventMutation;
use crate::modules::shifts::use_cases::stop_shift::inbound::graphql::StopShiftMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(CurrentShiftQuery, ShiftHistoryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    StartShiftMutation,
    StopShiftMutation,
    StartEventMutation,
    StopEventMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
