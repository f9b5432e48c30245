use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::shifts::adapters::inbound::http::{DriverJson, ShiftResponse};
use crate::modules::shifts::use_cases::stop_shift::command::StopShift;
use crate::modules::shifts::use_cases::stop_shift::decide::StopShiftDecision;
use crate::shared::core::time::{now, parse_timestamp};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    let command = StopShift {
        driver_id: body.driver_id(),
        ended_at: parse_timestamp(body.timestamp(), now()),
    };

    match state.stop_shift.handle(command).await {
        Ok(StopShiftDecision::Stopped(shift)) => Json(ShiftResponse::ok(Some(shift))).into_response(),
        Ok(StopShiftDecision::NothingToStop) => {
            Json(ShiftResponse::ok(None).with_message("no active shift to stop")).into_response()
        }
        Err(error) => error.into_response(),
    }
}
