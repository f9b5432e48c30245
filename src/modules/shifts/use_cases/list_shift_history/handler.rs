use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::list_shift_history::query::ListShiftHistory;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

pub struct ListShiftHistoryHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    repository: ShiftRepository<TStore>,
}

impl<TStore> ListShiftHistoryHandler<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            repository: ShiftRepository::new(store),
        }
    }

    pub async fn handle(&self, query: ListShiftHistory) -> Result<Vec<Shift>, ApplicationError> {
        Ok(self
            .repository
            .finished_history(&query.driver_id, query.limit)
            .await?)
    }
}
