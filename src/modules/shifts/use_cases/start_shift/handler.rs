use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::modules::shifts::use_cases::start_shift::decide::{
    StartShiftDecision, decide_start_shift,
};
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

pub struct StartShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> StartShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, command: StartShift) -> Result<StartShiftDecision, ApplicationError> {
        let state = self.repository.load_state(&command.driver_id).await?;
        let decision = decide_start_shift(&state, command);
        match &decision {
            StartShiftDecision::Started(shift) => {
                self.repository.save_active(shift).await?;
                tracing::info!(
                    driver_id = %shift.driver_id,
                    shift_id = %shift.id,
                    started_at = %shift.started_at,
                    "shift started"
                );
            }
            StartShiftDecision::AlreadyActive(shift) => {
                tracing::debug!(
                    driver_id = %shift.driver_id,
                    shift_id = %shift.id,
                    "shift already active, returning it"
                );
            }
        }
        Ok(decision)
    }
}
