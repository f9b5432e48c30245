// Pure decision function for opening a drive or break interval.
//
// Responsibilities
// - Require an active shift.
// - Refuse while any interval is open, whatever its type.
// - Append the new interval at the end of the shift's events.

use crate::modules::shifts::core::errors::DecideError;
use crate::modules::shifts::core::event::Event;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::start_event::command::StartEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStarted {
    pub shift: Shift,
    pub event: Event,
}

pub fn decide_start_event(
    state: &ShiftState,
    command: StartEvent,
) -> Result<EventStarted, DecideError> {
    let ShiftState::Active(shift) = state else {
        return Err(DecideError::NoActiveShift);
    };
    if let Some(running) = shift.open_event() {
        return Err(DecideError::EventAlreadyRunning {
            running: running.clone(),
        });
    }

    let event = Event::start(command.event_type, command.started_at);
    let mut shift = shift.clone();
    shift.events.push(event.clone());
    Ok(EventStarted { shift, event })
}
