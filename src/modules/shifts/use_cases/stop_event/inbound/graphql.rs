use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shifts::adapters::inbound::graphql::{GqlEvent, GqlEventType, to_gql_error};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::modules::shifts::use_cases::stop_event::command::StopEvent;
use crate::shared::core::time::now;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StopEventMutation;

#[Object]
impl StopEventMutation {
    async fn stop_event(
        &self,
        context: &Context<'_>,
        driver_id: Option<String>,
        event_type: GqlEventType,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = StopEvent {
            driver_id: driver_id_or_default(driver_id),
            event_type: event_type.into(),
            ended_at: now(),
        };
        let event = state
            .stop_event
            .handle(command)
            .await
            .map_err(to_gql_error)?;
        Ok(event.into())
    }
}
