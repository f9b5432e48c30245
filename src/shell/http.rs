use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::shifts::use_cases::get_current_shift::inbound::http as get_current_http;
use crate::modules::shifts::use_cases::list_shift_history::inbound::http as list_history_http;
use crate::modules::shifts::use_cases::start_event::inbound::http as start_event_http;
use crate::modules::shifts::use_cases::start_shift::inbound::http as start_shift_http;
use crate::modules::shifts::use_cases::stop_event::inbound::http as stop_event_http;
use crate::modules::shifts::use_cases::stop_shift::inbound::http as stop_shift_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const SERVICE_NAME: &str = "shift-tracker";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/shift/current", get(get_current_http::handle))
        .route("/shift/start", post(start_shift_http::handle))
        .route("/shift/stop", post(stop_shift_http::handle))
        .route("/drive/start", post(start_event_http::start_drive))
        .route("/drive/stop", post(stop_event_http::stop_drive))
        .route("/break/start", post(start_event_http::start_break))
        .route("/break/stop", post(stop_event_http::stop_break))
        .route("/shifts", get(list_history_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "Shift tracker backend is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}
