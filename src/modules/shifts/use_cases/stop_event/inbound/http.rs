use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::shifts::adapters::inbound::http::{DriverBody, DriverJson, EventResponse};
use crate::modules::shifts::core::event::EventType;
use crate::modules::shifts::use_cases::stop_event::command::StopEvent;
use crate::shared::core::time::now;
use crate::shell::state::AppState;

pub async fn stop_drive(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    handle(state, EventType::Drive, body).await
}

pub async fn stop_break(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    handle(state, EventType::Break, body).await
}

async fn handle(state: AppState, event_type: EventType, body: DriverBody) -> Response {
    let command = StopEvent {
        driver_id: body.driver_id(),
        event_type,
        ended_at: now(),
    };

    match state.stop_event.handle(command).await {
        Ok(event) => Json(EventResponse::ok(event)).into_response(),
        Err(error) => error.into_response(),
    }
}
