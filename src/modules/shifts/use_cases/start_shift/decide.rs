// Starting is idempotent: a driver who already has an active shift gets it back
// unchanged instead of an error.

use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartShiftDecision {
    AlreadyActive(Shift),
    Started(Shift),
}

impl StartShiftDecision {
    pub fn shift(&self) -> &Shift {
        match self {
            StartShiftDecision::AlreadyActive(shift) | StartShiftDecision::Started(shift) => shift,
        }
    }
}

pub fn decide_start_shift(state: &ShiftState, command: StartShift) -> StartShiftDecision {
    match state {
        ShiftState::Active(existing) => StartShiftDecision::AlreadyActive(existing.clone()),
        ShiftState::None => StartShiftDecision::Started(Shift::start(
            command.shift_id,
            command.driver_id,
            command.started_at,
        )),
    }
}
