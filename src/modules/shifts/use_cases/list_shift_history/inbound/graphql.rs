use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::shifts::adapters::inbound::graphql::{GqlShift, to_gql_error};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::modules::shifts::use_cases::list_shift_history::query::ListShiftHistory;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ShiftHistoryQuery;

#[Object]
impl ShiftHistoryQuery {
    /// Finished shifts, most recent first.
    async fn shifts(
        &self,
        context: &Context<'_>,
        driver_id: Option<String>,
        limit: Option<i32>,
    ) -> GqlResult<Vec<GqlShift>> {
        let state = context.data_unchecked::<AppState>();
        let query = ListShiftHistory::new(
            driver_id_or_default(driver_id),
            limit.map(|l| l.max(0) as usize),
        );
        let items = state
            .list_shift_history
            .handle(query)
            .await
            .map_err(to_gql_error)?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
