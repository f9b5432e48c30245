use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartShift {
    pub shift_id: String,
    pub driver_id: String,
    pub started_at: DateTime<Utc>,
}
