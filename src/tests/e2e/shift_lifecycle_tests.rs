// Whole-day driver scenarios through the full router, against both store backends.

use axum::{Router, http::StatusCode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::shared::infrastructure::document_store::sqlite::SqliteDocumentStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::{get, make_test_state, post_json, send};

#[fixture]
fn app() -> Router {
    let (_, state) = make_test_state();
    router(state)
}

fn sqlite_app() -> Router {
    let store = SqliteDocumentStore::open_in_memory().unwrap();
    router(AppState::new(Arc::new(store)))
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app.clone(), post_json(uri, body)).await
}

#[rstest]
#[tokio::test]
async fn a_fresh_driver_has_no_current_shift_and_no_history(app: Router) {
    let (status, body) = send(app.clone(), get("/shift/current?driverId=demo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "shift": null}));

    let (_, body) = send(app, get("/shifts?driverId=demo")).await;
    assert_eq!(body["items"], json!([]));
}

#[rstest]
#[tokio::test]
async fn an_eight_hour_shift_lasts_28800_seconds(app: Router) {
    let driver = json!({"driverId": "d-8h"});
    let (status, _) = post(
        &app,
        "/shift/start",
        json!({"driverId": "d-8h", "timestamp": "2025-01-01T08:00:00Z"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, current) = send(app.clone(), get("/shift/current?driverId=d-8h")).await;
    assert_eq!(current["shift"]["status"], "active");

    let (status, body) = post(
        &app,
        "/shift/stop",
        json!({"driverId": "d-8h", "timestamp": "2025-01-01T16:00:00Z"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shift"]["durationSeconds"], 28_800);

    let (_, current) = send(app.clone(), get("/shift/current?driverId=d-8h")).await;
    assert_eq!(current["shift"], Value::Null);

    let (status, body) = post(&app, "/shift/stop", driver).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shift"], Value::Null);
}

#[rstest]
#[tokio::test]
async fn starting_twice_keeps_the_first_shift(app: Router) {
    let (_, first) = post(&app, "/shift/start", json!({"driverId": "d-1"})).await;
    let (status, second) = post(&app, "/shift/start", json!({"driverId": "d-1"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["shift"]["id"], second["shift"]["id"]);
}

#[rstest]
#[tokio::test]
async fn a_break_cannot_start_while_driving(app: Router) {
    let driver = json!({"driverId": "d-1"});
    post(&app, "/shift/start", driver.clone()).await;
    post(&app, "/drive/start", driver.clone()).await;

    let (status, body) = post(&app, "/break/start", driver.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "event_already_running");
    assert_eq!(body["currentEvent"]["type"], "drive");

    let (status, body) = post(&app, "/drive/stop", driver.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["type"], "drive");
    assert!(body["event"]["durationSeconds"].is_i64());

    let (status, _) = post(&app, "/break/start", driver).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn the_shift_cannot_end_during_a_break(app: Router) {
    let driver = json!({"driverId": "d-1"});
    post(&app, "/shift/start", driver.clone()).await;
    post(&app, "/break/start", driver.clone()).await;

    let (status, body) = post(&app, "/shift/stop", driver.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "shift_has_open_event");

    let (status, body) = post(&app, "/drive/stop", driver.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "event_type_mismatch");

    let (_, current) = send(app.clone(), get("/shift/current?driverId=d-1")).await;
    assert_eq!(current["shift"]["status"], "active");
    assert_eq!(current["shift"]["events"][0]["endedAt"], Value::Null);
}

async fn run_a_full_day(app: Router) {
    let driver = json!({"driverId": "d-day"});
    post(&app, "/shift/start", driver.clone()).await;
    for uri in ["/drive/start", "/drive/stop", "/break/start", "/break/stop"] {
        let (status, body) = post(&app, uri, driver.clone()).await;
        assert!(status.is_success(), "{uri}: {body}");
    }
    let (status, _) = post(&app, "/shift/stop", driver).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, get("/shifts?driverId=d-day&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"], "finished");
    let events = items[0]["events"].as_array().unwrap();
    assert_eq!(events[0]["type"], "drive");
    assert_eq!(events[1]["type"], "break");
    assert!(events.iter().all(|e| e["durationSeconds"].is_i64()));
}

#[rstest]
#[tokio::test]
async fn a_full_day_is_recorded_in_memory(app: Router) {
    run_a_full_day(app).await;
}

#[tokio::test]
async fn a_full_day_is_recorded_in_sqlite() {
    run_a_full_day(sqlite_app()).await;
}

#[tokio::test]
async fn history_is_newest_first_per_driver() {
    let app = sqlite_app();
    for (driver, day) in [("d-1", "01"), ("d-1", "03"), ("d-2", "02"), ("d-1", "02")] {
        post(
            &app,
            "/shift/start",
            json!({"driverId": driver, "timestamp": format!("2025-01-{day}T08:00:00Z")}),
        )
        .await;
        post(
            &app,
            "/shift/stop",
            json!({"driverId": driver, "timestamp": format!("2025-01-{day}T09:00:00Z")}),
        )
        .await;
    }

    let (_, body) = send(app.clone(), get("/shifts?driverId=d-1")).await;
    let started: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["startedAt"].as_str())
        .collect();
    assert_eq!(
        started,
        vec![
            "2025-01-03T08:00:00Z",
            "2025-01-02T08:00:00Z",
            "2025-01-01T08:00:00Z"
        ]
    );

    let (_, body) = send(app, get("/shifts?driverId=d-1&limit=2")).await;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
}
