use crate::modules::shifts::core::shift::Shift;

/// What a driver's current pointer says before a transition is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftState {
    None,
    Active(Shift),
}

impl ShiftState {
    /// A pointer left behind on a finished shift counts as no active shift.
    pub fn from_current(current: Option<Shift>) -> Self {
        match current {
            Some(shift) if shift.is_active() => ShiftState::Active(shift),
            _ => ShiftState::None,
        }
    }

    pub fn into_active(self) -> Option<Shift> {
        match self {
            ShiftState::Active(shift) => Some(shift),
            ShiftState::None => None,
        }
    }
}
