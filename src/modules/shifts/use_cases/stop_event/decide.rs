// Pure decision function for closing a drive or break interval.
//
// Stopping one type never closes the other: "stop drive" while on a break is refused.

use crate::modules::shifts::core::errors::DecideError;
use crate::modules::shifts::core::event::Event;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::stop_event::command::StopEvent;
use crate::shared::core::time::duration_seconds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStopped {
    pub shift: Shift,
    pub event: Event,
}

pub fn decide_stop_event(
    state: &ShiftState,
    command: StopEvent,
) -> Result<EventStopped, DecideError> {
    let ShiftState::Active(shift) = state else {
        return Err(DecideError::NoActiveShift);
    };
    let mut shift = shift.clone();
    let Some(running) = shift.open_event_mut() else {
        return Err(DecideError::NoActiveEvent {
            expected: command.event_type,
        });
    };
    if running.event_type != command.event_type {
        return Err(DecideError::EventTypeMismatch {
            expected: command.event_type,
            running: running.event_type,
        });
    }
    let duration = duration_seconds(running.started_at, command.ended_at);
    if duration < 0 {
        return Err(DecideError::InvalidInterval);
    }

    running.ended_at = Some(command.ended_at);
    running.duration_seconds = Some(duration);
    let event = running.clone();
    Ok(EventStopped { shift, event })
}
