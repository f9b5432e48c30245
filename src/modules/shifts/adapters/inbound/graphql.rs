use async_graphql::{Enum, ErrorExtensions, SimpleObject};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::shifts::core::event::{Event, EventType};
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::use_cases::errors::ApplicationError;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GqlEventType {
    Drive,
    Break,
}

impl From<GqlEventType> for EventType {
    fn from(value: GqlEventType) -> Self {
        match value {
            GqlEventType::Drive => EventType::Drive,
            GqlEventType::Break => EventType::Break,
        }
    }
}

impl From<EventType> for GqlEventType {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Drive => GqlEventType::Drive,
            EventType::Break => GqlEventType::Break,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    #[graphql(name = "type")]
    pub event_type: GqlEventType,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub duration_seconds: Option<i64>,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            event_type: e.event_type.into(),
            started_at: format_timestamp(e.started_at),
            ended_at: e.ended_at.map(format_timestamp),
            duration_seconds: e.duration_seconds,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlShift {
    pub id: String,
    pub driver_id: String,
    pub status: String,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub duration_seconds: Option<i64>,
    pub events: Vec<GqlEvent>,
}

impl From<Shift> for GqlShift {
    fn from(s: Shift) -> Self {
        Self {
            id: s.id,
            driver_id: s.driver_id,
            status: s.status.as_str().to_string(),
            started_at: format_timestamp(s.started_at),
            ended_at: s.ended_at.map(format_timestamp),
            duration_seconds: s.duration_seconds,
            events: s.events.into_iter().map(Into::into).collect(),
        }
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Carries the same `code` the REST routes put in their `error` field.
pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Domain(reason) => {
            let code = reason.code();
            async_graphql::Error::new(reason.to_string()).extend_with(|_, e| e.set("code", code))
        }
        ApplicationError::Store(cause) => {
            tracing::error!(error = %cause, "document store failure");
            async_graphql::Error::new("internal server error")
                .extend_with(|_, e| e.set("code", "internal_error"))
        }
    }
}
