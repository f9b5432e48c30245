use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::event::Event;

/// Driver used when a request does not name one.
pub const DEFAULT_DRIVER_ID: &str = "demo";

pub fn driver_id_or_default(driver_id: Option<String>) -> String {
    driver_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_DRIVER_ID.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Active,
    Finished,
}

impl ShiftStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftStatus::Active => "active",
            ShiftStatus::Finished => "finished",
        }
    }
}

/// A driver's work shift. `ended_at` and `duration_seconds` are set together, exactly
/// once, when the shift finishes. `events` is in chronological order and at most the
/// last one is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub driver_id: String,
    pub status: ShiftStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Shift {
    pub fn start(id: String, driver_id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            driver_id,
            status: ShiftStatus::Active,
            started_at,
            ended_at: None,
            duration_seconds: None,
            events: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ShiftStatus::Active
    }

    pub fn open_event(&self) -> Option<&Event> {
        self.events.iter().find(|event| event.is_open())
    }

    pub fn open_event_mut(&mut self) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.is_open())
    }
}
