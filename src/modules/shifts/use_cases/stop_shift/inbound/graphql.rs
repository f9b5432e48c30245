use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shifts::adapters::inbound::graphql::{GqlShift, to_gql_error};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::modules::shifts::use_cases::stop_shift::command::StopShift;
use crate::modules::shifts::use_cases::stop_shift::decide::StopShiftDecision;
use crate::shared::core::time::{now, parse_timestamp};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StopShiftMutation;

#[Object]
impl StopShiftMutation {
    /// Null when the driver had no active shift.
    async fn stop_shift(
        &self,
        context: &Context<'_>,
        driver_id: Option<String>,
        timestamp: Option<String>,
    ) -> GqlResult<Option<GqlShift>> {
        let state = context.data_unchecked::<AppState>();
        let command = StopShift {
            driver_id: driver_id_or_default(driver_id),
            ended_at: parse_timestamp(timestamp.as_deref(), now()),
        };
        match state.stop_shift.handle(command).await.map_err(to_gql_error)? {
            StopShiftDecision::Stopped(shift) => Ok(Some(shift.into())),
            StopShiftDecision::NothingToStop => Ok(None),
        }
    }
}
