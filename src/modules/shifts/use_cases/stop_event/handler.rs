use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::event::Event;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::stop_event::command::StopEvent;
use crate::modules::shifts::use_cases::stop_event::decide::decide_stop_event;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

pub struct StopEventHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> StopEventHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, command: StopEvent) -> Result<Event, ApplicationError> {
        let driver_id = command.driver_id.clone();
        let event_type = command.event_type;
        let state = self.repository.load_state(&driver_id).await?;
        let stopped = decide_stop_event(&state, command).inspect_err(|reason| {
            tracing::warn!(driver_id = %driver_id, %event_type, %reason, "interval stop refused");
        })?;
        self.repository.save_active(&stopped.shift).await?;
        tracing::info!(
            driver_id = %driver_id,
            shift_id = %stopped.shift.id,
            %event_type,
            duration_seconds = stopped.event.duration_seconds,
            "interval stopped"
        );
        Ok(stopped.event)
    }
}
