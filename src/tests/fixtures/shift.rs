// Shared test fixtures for shifts and their intervals.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use chrono::{DateTime, Utc};

use crate::modules::shifts::core::event::{Event, EventType};
use crate::modules::shifts::core::shift::{Shift, ShiftStatus};
use crate::shared::core::time::duration_seconds;

pub const SHIFT_ID: &str = "shift-fixed-0001";
pub const DRIVER_ID: &str = "driver-fixed-0001";
pub const SHIFT_START: &str = "2025-01-01T08:00:00Z";

/// Parse a fixed RFC 3339 timestamp.
pub fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("fixture timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

pub struct ShiftBuilder {
    inner: Shift,
}

impl Default for ShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftBuilder {
    pub fn new() -> Self {
        Self {
            inner: Shift::start(SHIFT_ID.to_string(), DRIVER_ID.to_string(), at(SHIFT_START)),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn driver_id(mut self, v: impl Into<String>) -> Self {
        self.inner.driver_id = v.into();
        self
    }

    pub fn started_at(mut self, v: &str) -> Self {
        self.inner.started_at = at(v);
        self
    }

    pub fn status(mut self, v: ShiftStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn finished_at(mut self, v: &str) -> Self {
        let ended_at = at(v);
        self.inner.status = ShiftStatus::Finished;
        self.inner.ended_at = Some(ended_at);
        self.inner.duration_seconds = Some(duration_seconds(self.inner.started_at, ended_at));
        self
    }

    pub fn open_event(mut self, event_type: EventType, started_at: &str) -> Self {
        self.inner
            .events
            .push(Event::start(event_type, at(started_at)));
        self
    }

    pub fn closed_event(mut self, event_type: EventType, started_at: &str, ended_at: &str) -> Self {
        let (started_at, ended_at) = (at(started_at), at(ended_at));
        self.inner.events.push(Event {
            event_type,
            started_at,
            ended_at: Some(ended_at),
            duration_seconds: Some(duration_seconds(started_at, ended_at)),
        });
        self
    }

    pub fn build(self) -> Shift {
        self.inner
    }
}

#[cfg(test)]
mod shift_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ShiftBuilder::default().build();
        assert_eq!(built.id, SHIFT_ID);
        assert_eq!(built.driver_id, DRIVER_ID);
        assert_eq!(built.started_at, at(SHIFT_START));
        assert!(built.is_active());
        assert!(built.events.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_finish_computes_the_duration() {
        let built = ShiftBuilder::new()
            .id("s-9")
            .driver_id("d-9")
            .started_at("2025-02-01T06:00:00Z")
            .closed_event(EventType::Drive, "2025-02-01T06:00:00Z", "2025-02-01T06:30:00Z")
            .finished_at("2025-02-01T07:00:00Z")
            .build();
        assert_eq!(built.id, "s-9");
        assert_eq!(built.driver_id, "d-9");
        assert_eq!(built.status, ShiftStatus::Finished);
        assert_eq!(built.duration_seconds, Some(3_600));
        assert_eq!(built.events[0].duration_seconds, Some(1_800));
    }
}
