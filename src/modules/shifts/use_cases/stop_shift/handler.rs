use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::stop_shift::command::StopShift;
use crate::modules::shifts::use_cases::stop_shift::decide::{StopShiftDecision, decide_stop_shift};
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

pub struct StopShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> StopShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, command: StopShift) -> Result<StopShiftDecision, ApplicationError> {
        let driver_id = command.driver_id.clone();
        let state = self.repository.load_state(&driver_id).await?;
        let decision = decide_stop_shift(&state, command).inspect_err(|reason| {
            tracing::warn!(driver_id = %driver_id, %reason, "shift stop refused");
        })?;
        match &decision {
            StopShiftDecision::Stopped(shift) => {
                self.repository.retire(shift).await?;
                tracing::info!(
                    driver_id = %shift.driver_id,
                    shift_id = %shift.id,
                    duration_seconds = shift.duration_seconds,
                    "shift stopped"
                );
            }
            StopShiftDecision::NothingToStop => {
                tracing::debug!(driver_id = %driver_id, "no active shift to stop");
            }
        }
        Ok(decision)
    }
}
