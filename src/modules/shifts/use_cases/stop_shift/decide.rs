// Pure decision function for ending a shift.
//
// Rules
// - Nothing active: nothing to stop, which is not an error.
// - An open drive or break blocks the stop; it would otherwise never be closed.
// - The end may not precede the start.

use crate::modules::shifts::core::errors::DecideError;
use crate::modules::shifts::core::shift::{Shift, ShiftStatus};
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::stop_shift::command::StopShift;
use crate::shared::core::time::duration_seconds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopShiftDecision {
    NothingToStop,
    Stopped(Shift),
}

pub fn decide_stop_shift(
    state: &ShiftState,
    command: StopShift,
) -> Result<StopShiftDecision, DecideError> {
    let ShiftState::Active(shift) = state else {
        return Ok(StopShiftDecision::NothingToStop);
    };
    if let Some(running) = shift.open_event() {
        return Err(DecideError::ShiftHasOpenEvent {
            running: running.clone(),
        });
    }
    let duration = duration_seconds(shift.started_at, command.ended_at);
    if duration < 0 {
        return Err(DecideError::InvalidInterval);
    }

    let mut stopped = shift.clone();
    stopped.status = ShiftStatus::Finished;
    stopped.ended_at = Some(command.ended_at);
    stopped.duration_seconds = Some(duration);
    Ok(StopShiftDecision::Stopped(stopped))
}
