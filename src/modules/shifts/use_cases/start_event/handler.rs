use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::event::Event;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::start_event::command::StartEvent;
use crate::modules::shifts::use_cases::start_event::decide::decide_start_event;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

pub struct StartEventHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> StartEventHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, command: StartEvent) -> Result<Event, ApplicationError> {
        let driver_id = command.driver_id.clone();
        let event_type = command.event_type;
        let state = self.repository.load_state(&driver_id).await?;
        let started = decide_start_event(&state, command).inspect_err(|reason| {
            tracing::warn!(driver_id = %driver_id, %event_type, %reason, "interval start refused");
        })?;
        self.repository.save_active(&started.shift).await?;
        tracing::info!(
            driver_id = %driver_id,
            shift_id = %started.shift.id,
            %event_type,
            "interval started"
        );
        Ok(started.event)
    }
}
