use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::shifts::adapters::inbound::http::ShiftListResponse;
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::modules::shifts::use_cases::list_shift_history::query::ListShiftHistory;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShiftsParams {
    pub driver_id: Option<String>,
    pub limit: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListShiftsParams>,
) -> Response {
    let query = ListShiftHistory::new(driver_id_or_default(params.driver_id), params.limit);
    match state.list_shift_history.handle(query).await {
        Ok(items) => Json(ShiftListResponse::ok(items)).into_response(),
        Err(error) => error.into_response(),
    }
}
