use chrono::{DateTime, Utc};

use crate::modules::shifts::core::event::EventType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartEvent {
    pub driver_id: String,
    pub event_type: EventType,
    pub started_at: DateTime<Utc>,
}
