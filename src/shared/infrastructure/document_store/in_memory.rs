// In memory implementation of the DocumentStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep documents per collection behind an async RwLock.
// - Offer test hooks to simulate an unreachable backend and slow writes.

use crate::shared::infrastructure::document_store::{
    DocumentStore, DocumentStoreError, Query, merge_documents,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<String, HashMap<String, Value>>>,
    offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_write_ms(&self, delay_ms: u64) {
        self.delay_write_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), DocumentStoreError> {
        if self.offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let delay_ms = self.delay_write_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .get(collection)
            .and_then(|documents| documents.get(key))
            .cloned())
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        document: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.inner.write().await;
        let documents = guard.entry(collection.to_string()).or_default();
        let document = if merge {
            merge_documents(collection, key, documents.remove(key), document)?
        } else {
            document
        };
        documents.insert(key.to_string(), document);
        Ok(())
    }

    async fn delete_document(&self, collection: &str, key: &str) -> Result<(), DocumentStoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.inner.write().await;
        if let Some(documents) = guard.get_mut(collection) {
            documents.remove(key);
        }
        Ok(())
    }

    async fn query_collection(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<Value>, DocumentStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let documents = guard
            .get(collection)
            .map(|documents| documents.values().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        Ok(query.apply(documents))
    }
}
