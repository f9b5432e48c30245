use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

/// Read-only: the driver's active shift, or `None` when there is none.
pub struct GetCurrentShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> GetCurrentShiftHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, driver_id: &str) -> Result<Option<Shift>, ApplicationError> {
        Ok(self.repository.load_state(driver_id).await?.into_active())
    }
}
