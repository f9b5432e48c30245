use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::shifts::adapters::inbound::graphql::{GqlShift, to_gql_error};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::shared::core::time::{now, parse_timestamp};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartShiftMutation;

#[Object]
impl StartShiftMutation {
    /// Returns the already active shift unchanged when there is one.
    async fn start_shift(
        &self,
        context: &Context<'_>,
        driver_id: Option<String>,
        timestamp: Option<String>,
    ) -> GqlResult<GqlShift> {
        let state = context.data_unchecked::<AppState>();
        let command = StartShift {
            shift_id: Uuid::now_v7().to_string(),
            driver_id: driver_id_or_default(driver_id),
            started_at: parse_timestamp(timestamp.as_deref(), now()),
        };
        let decision = state
            .start_shift
            .handle(command)
            .await
            .map_err(to_gql_error)?;
        Ok(decision.shift().clone().into())
    }
}
