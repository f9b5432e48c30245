use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::shifts::adapters::inbound::http::{DriverParams, ShiftResponse};
use crate::modules::shifts::core::shift::driver_id_or_default;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Query(params): Query<DriverParams>) -> Response {
    let driver_id = driver_id_or_default(params.driver_id);
    match state.get_current_shift.handle(&driver_id).await {
        Ok(shift) => Json(ShiftResponse::ok(shift)).into_response(),
        Err(error) => error.into_response(),
    }
}
