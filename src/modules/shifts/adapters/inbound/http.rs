// Shared HTTP shapes for the shift routes.
//
// Responsibilities
// - Request bodies and query strings common to several routes.
// - The `{status: "ok", ...}` success envelopes.
// - Mapping application errors to 4xx/5xx responses with a stable `error` code.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::shifts::core::errors::DecideError;
use crate::modules::shifts::core::event::Event;
use crate::modules::shifts::core::shift::{Shift, driver_id_or_default};
use crate::modules::shifts::use_cases::errors::ApplicationError;

const OK: &str = "ok";
const ERROR: &str = "error";

/// Body of every POST route. `timestamp` stays loosely typed so that a malformed
/// value falls back to the server clock instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverBody {
    pub driver_id: Option<String>,
    pub timestamp: Option<Value>,
}

impl DriverBody {
    pub fn driver_id(&self) -> String {
        driver_id_or_default(self.driver_id.clone())
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_ref().and_then(Value::as_str)
    }
}

/// Extracts a `DriverBody`. An empty body, with or without a content type, reads as
/// `DriverBody::default()`; a body that is present but not valid JSON is a 422.
#[derive(Debug)]
pub struct DriverJson(pub DriverBody);

impl<S> FromRequest<S> for DriverJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(DriverBody::default()));
        }
        Json::<DriverBody>::from_bytes(&bytes)
            .map(|Json(body)| Self(body))
            .map_err(invalid_body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverParams {
    pub driver_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    pub status: &'static str,
    pub shift: Option<Shift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ShiftResponse {
    pub fn ok(shift: Option<Shift>) -> Self {
        Self {
            status: OK,
            shift,
            message: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub status: &'static str,
    pub event: Event,
}

impl EventResponse {
    pub fn ok(event: Event) -> Self {
        Self { status: OK, event }
    }
}

#[derive(Debug, Serialize)]
pub struct ShiftListResponse {
    pub status: &'static str,
    pub items: Vec<Shift>,
}

impl ShiftListResponse {
    pub fn ok(items: Vec<Shift>) -> Self {
        Self { status: OK, items }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_event: Option<Event>,
}

pub fn decide_error_status(error: &DecideError) -> StatusCode {
    match error {
        DecideError::InvalidInterval => StatusCode::BAD_REQUEST,
        DecideError::NoActiveShift
        | DecideError::ShiftHasOpenEvent { .. }
        | DecideError::EventAlreadyRunning { .. }
        | DecideError::NoActiveEvent { .. }
        | DecideError::EventTypeMismatch { .. } => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApplicationError::Domain(reason) => (
                decide_error_status(&reason),
                ErrorResponse {
                    status: ERROR,
                    error: reason.code(),
                    message: reason.to_string(),
                    current_event: reason.running_event().cloned(),
                },
            ),
            ApplicationError::Store(cause) => {
                tracing::error!(error = %cause, "document store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        status: ERROR,
                        error: "internal_error",
                        message: "internal server error".to_string(),
                        current_event: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            status: ERROR,
            error: "invalid_body",
            message: rejection.body_text(),
            current_event: None,
        }),
    )
        .into_response()
}
