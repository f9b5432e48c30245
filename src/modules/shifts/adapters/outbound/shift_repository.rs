// Maps shifts onto the document store.
//
// Layout
// - `current_shifts/<driverId>`: the driver's current pointer, a full copy of the active shift.
// - `shifts/<shiftId>`: history, one document per shift, never deleted.
//
// Every write goes to both keys so a reader of either sees the same events.

use crate::modules::shifts::core::shift::{Shift, ShiftStatus};
use crate::modules::shifts::core::state::ShiftState;
use crate::shared::infrastructure::document_store::{
    Direction, DocumentStore, DocumentStoreError, Query,
};
use serde_json::{Value, json};
use std::sync::Arc;

pub const CURRENT_SHIFTS: &str = "current_shifts";
pub const SHIFTS: &str = "shifts";

pub struct ShiftRepository<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> Clone for ShiftRepository<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<TStore> ShiftRepository<TStore>
where
    TStore: DocumentStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn load_state(&self, driver_id: &str) -> Result<ShiftState, DocumentStoreError> {
        let current = self
            .store
            .get_document(CURRENT_SHIFTS, driver_id)
            .await?
            .map(decode)
            .transpose()?;
        Ok(ShiftState::from_current(current))
    }

    /// Write an active shift to the current pointer and its history document.
    pub async fn save_active(&self, shift: &Shift) -> Result<(), DocumentStoreError> {
        let document = encode(shift)?;
        self.store
            .set_document(CURRENT_SHIFTS, &shift.driver_id, document.clone(), false)
            .await?;
        self.store
            .set_document(SHIFTS, &shift.id, document, false)
            .await
    }

    /// Merge the closing fields into history, then clear the driver's current pointer.
    ///
    /// The two writes are not atomic. If the delete fails, history already says finished
    /// while the pointer is still active; stopping again re-merges the same patch and
    /// retries the delete.
    pub async fn retire(&self, shift: &Shift) -> Result<(), DocumentStoreError> {
        let patch = json!({
            "status": shift.status,
            "endedAt": shift.ended_at,
            "durationSeconds": shift.duration_seconds,
            "events": shift.events,
        });
        self.store.set_document(SHIFTS, &shift.id, patch, true).await?;
        self.store
            .delete_document(CURRENT_SHIFTS, &shift.driver_id)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    driver_id = %shift.driver_id,
                    shift_id = %shift.id,
                    %error,
                    "shift finished in history but current pointer not cleared"
                );
            })
    }

    pub async fn load(&self, shift_id: &str) -> Result<Option<Shift>, DocumentStoreError> {
        self.store
            .get_document(SHIFTS, shift_id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Most recent finished shifts first.
    pub async fn finished_history(
        &self,
        driver_id: &str,
        limit: usize,
    ) -> Result<Vec<Shift>, DocumentStoreError> {
        let query = Query::new()
            .where_eq("driverId", driver_id)
            .where_eq("status", ShiftStatus::Finished.as_str())
            .order_by("startedAt", Direction::Descending)
            .limit(limit);
        self.store
            .query_collection(SHIFTS, &query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }
}

fn encode(shift: &Shift) -> Result<Value, DocumentStoreError> {
    serde_json::to_value(shift).map_err(|e| DocumentStoreError::Serialization(e.to_string()))
}

fn decode(document: Value) -> Result<Shift, DocumentStoreError> {
    serde_json::from_value(document).map_err(|e| DocumentStoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod shift_repository_tests {
    use super::*;
    use crate::modules::shifts::core::event::EventType;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
    use crate::tests::fixtures::shift::{DRIVER_ID, SHIFT_ID, ShiftBuilder};
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Arc<InMemoryDocumentStore>, ShiftRepository<InMemoryDocumentStore>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryDocumentStore::new());
        let repository = ShiftRepository::new(store.clone());
        (store, repository)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_the_blank_state_for_an_unknown_driver(before_each: BeforeEachReturn) {
        let (_, repository) = before_each;
        let state = repository.load_state("nobody").await.unwrap();
        assert_eq!(state, ShiftState::None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_save_an_active_shift_under_both_keys(before_each: BeforeEachReturn) {
        let (store, repository) = before_each;
        let shift = ShiftBuilder::new()
            .open_event(EventType::Drive, "2025-01-01T08:05:00Z")
            .build();
        repository.save_active(&shift).await.unwrap();

        assert_eq!(
            repository.load_state(DRIVER_ID).await.unwrap(),
            ShiftState::Active(shift.clone())
        );
        assert_eq!(repository.load(SHIFT_ID).await.unwrap(), Some(shift));
        assert!(
            store
                .get_document(CURRENT_SHIFTS, DRIVER_ID)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_retire_a_finished_shift(before_each: BeforeEachReturn) {
        let (store, repository) = before_each;
        let active = ShiftBuilder::new().build();
        repository.save_active(&active).await.unwrap();

        let finished = ShiftBuilder::new().finished_at("2025-01-01T16:00:00Z").build();
        repository.retire(&finished).await.unwrap();

        assert_eq!(repository.load_state(DRIVER_ID).await.unwrap(), ShiftState::None);
        assert_eq!(
            store.get_document(CURRENT_SHIFTS, DRIVER_ID).await.unwrap(),
            None
        );
        assert_eq!(repository.load(SHIFT_ID).await.unwrap(), Some(finished));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_only_finished_shifts_of_the_driver_newest_first(
        before_each: BeforeEachReturn,
    ) {
        let (_, repository) = before_each;
        let shifts = [
            ShiftBuilder::new()
                .id("s-1")
                .started_at("2025-01-01T08:00:00Z")
                .finished_at("2025-01-01T16:00:00Z")
                .build(),
            ShiftBuilder::new()
                .id("s-2")
                .started_at("2025-01-02T08:00:00Z")
                .finished_at("2025-01-02T12:00:00Z")
                .build(),
            ShiftBuilder::new()
                .id("s-3")
                .driver_id("someone-else")
                .started_at("2025-01-03T08:00:00Z")
                .finished_at("2025-01-03T12:00:00Z")
                .build(),
            ShiftBuilder::new()
                .id("s-4")
                .started_at("2025-01-04T08:00:00Z")
                .build(),
        ];
        for shift in &shifts {
            repository.save_active(shift).await.unwrap();
        }

        let history = repository.finished_history(DRIVER_ID, 10).await.unwrap();
        let ids: Vec<&str> = history.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s-2", "s-1"]);

        let limited = repository.finished_history(DRIVER_ID, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "s-2");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_undecodable_documents(before_each: BeforeEachReturn) {
        let (store, repository) = before_each;
        store
            .set_document(CURRENT_SHIFTS, DRIVER_ID, json!({"id": 42}), false)
            .await
            .unwrap();
        let result = repository.load_state(DRIVER_ID).await;
        assert!(matches!(result, Err(DocumentStoreError::Serialization(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_converge_when_retire_is_repeated_after_a_partial_write(
        before_each: BeforeEachReturn,
    ) {
        let (store, repository) = before_each;
        let active = ShiftBuilder::new()
            .closed_event(EventType::Drive, "2025-01-01T08:00:00Z", "2025-01-01T09:00:00Z")
            .build();
        repository.save_active(&active).await.unwrap();
        let finished = ShiftBuilder::new()
            .closed_event(EventType::Drive, "2025-01-01T08:00:00Z", "2025-01-01T09:00:00Z")
            .finished_at("2025-01-01T16:00:00Z")
            .build();

        // History merged, pointer delete lost.
        repository.retire(&finished).await.unwrap();
        repository.save_active(&active).await.unwrap();
        store
            .set_document(SHIFTS, SHIFT_ID, serde_json::to_value(&finished).unwrap(), false)
            .await
            .unwrap();

        repository.retire(&finished).await.unwrap();
        assert_eq!(repository.load_state(DRIVER_ID).await.unwrap(), ShiftState::None);
        assert_eq!(repository.load(SHIFT_ID).await.unwrap(), Some(finished.clone()));
        assert_eq!(
            repository.finished_history(DRIVER_ID, 10).await.unwrap(),
            vec![finished]
        );
    }
}
