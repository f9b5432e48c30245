use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::shifts::adapters::inbound::http::{DriverBody, DriverJson, EventResponse};
use crate::modules::shifts::core::event::EventType;
use crate::modules::shifts::use_cases::start_event::command::StartEvent;
use crate::shared::core::time::now;
use crate::shell::state::AppState;

pub async fn start_drive(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    handle(state, EventType::Drive, body).await
}

pub async fn start_break(
    State(state): State<AppState>,
    DriverJson(body): DriverJson,
) -> Response {
    handle(state, EventType::Break, body).await
}

async fn handle(state: AppState, event_type: EventType, body: DriverBody) -> Response {
    let command = StartEvent {
        driver_id: body.driver_id(),
        event_type,
        started_at: now(),
    };

    match state.start_event.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(EventResponse::ok(event))).into_response(),
        Err(error) => error.into_response(),
    }
}
