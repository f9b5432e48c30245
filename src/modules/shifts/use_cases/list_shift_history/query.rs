pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListShiftHistory {
    pub driver_id: String,
    pub limit: usize,
}

impl ListShiftHistory {
    /// A missing limit uses the default; any value is clamped to `1..=MAX_LIMIT`.
    pub fn new(driver_id: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            driver_id: driver_id.into(),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}
