use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::shifts::adapters::inbound::http::{DriverJson, ShiftResponse};
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::modules::shifts::use_cases::start_shift::decide::StartShiftDecision;
use crate::shared::core::time::{now, parse_timestamp};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    let command = StartShift {
        shift_id: Uuid::now_v7().to_string(),
        driver_id: body.driver_id(),
        started_at: parse_timestamp(body.timestamp(), now()),
    };

    match state.start_shift.handle(command).await {
        Ok(StartShiftDecision::Started(shift)) => {
            (StatusCode::CREATED, Json(ShiftResponse::ok(Some(shift)))).into_response()
        }
        Ok(StartShiftDecision::AlreadyActive(shift)) => {
            (StatusCode::OK, Json(ShiftResponse::ok(Some(shift)))).into_response()
        }
        Err(error) => error.into_response(),
    }
}
