// Reasons a requested transition is refused. Pure data; the inbound adapters decide how
// each one is presented to clients.

use crate::modules::shifts::core::event::{Event, EventType};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no active shift")]
    NoActiveShift,

    #[error("cannot stop the shift while a {} interval is running", .running.event_type)]
    ShiftHasOpenEvent { running: Event },

    #[error("cannot start a new interval while a {} interval is running", .running.event_type)]
    EventAlreadyRunning { running: Event },

    #[error("no {expected} interval is running")]
    NoActiveEvent { expected: EventType },

    #[error("cannot stop {expected}: a {running} interval is running")]
    EventTypeMismatch {
        expected: EventType,
        running: EventType,
    },

    #[error("end time must not be before start time")]
    InvalidInterval,
}

impl DecideError {
    pub fn code(&self) -> &'static str {
        match self {
            DecideError::NoActiveShift => "no_active_shift",
            DecideError::ShiftHasOpenEvent { .. } => "shift_has_open_event",
            DecideError::EventAlreadyRunning { .. } => "event_already_running",
            DecideError::NoActiveEvent { .. } => "no_active_event",
            DecideError::EventTypeMismatch { .. } => "event_type_mismatch",
            DecideError::InvalidInterval => "invalid_interval",
        }
    }

    /// The interval blocking the transition, when there is one.
    pub fn running_event(&self) -> Option<&Event> {
        match self {
            DecideError::ShiftHasOpenEvent { running }
            | DecideError::EventAlreadyRunning { running } => Some(running),
            _ => None,
        }
    }
}
