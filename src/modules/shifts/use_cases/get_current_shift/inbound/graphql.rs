use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shifts::adapters::inbound::graphql::{GqlShift, to_gql_error};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CurrentShiftQuery;

#[Object]
impl CurrentShiftQuery {
    /// The driver's active shift, or null when off duty.
    async fn current_shift(
        &self,
        context: &Context<'_>,
        driver_id: Option<String>,
    ) -> GqlResult<Option<GqlShift>> {
        let state = context.data_unchecked::<AppState>();
        let shift = state
            .get_current_shift
            .handle(&driver_id_or_default(driver_id))
            .await
            .map_err(to_gql_error)?;
        Ok(shift.map(Into::into))
    }
}
