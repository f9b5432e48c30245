use chrono::{DateTime, Utc};

use crate::modules::shifts::core::event::EventType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEvent {
    pub driver_id: String,
    pub event_type: EventType,
    pub ended_at: DateTime<Utc>,
}
