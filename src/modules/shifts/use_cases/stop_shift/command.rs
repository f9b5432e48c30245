use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopShift {
    pub driver_id: String,
    pub ended_at: DateTime<Utc>,
}
