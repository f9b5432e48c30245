// Document store port: the persistence collaborator behind every use case.
//
// Purpose
// - Describe a keyed JSON document store (get, set with optional merge, delete, query)
//   without tying the core to a particular database.
//
// Boundaries
// - Adapters live next to this file. The core only sees the trait.
// - No optimistic concurrency: writes are unconditional, last write wins.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document {collection}/{key} cannot be merged: both sides must be JSON objects")]
    NotAnObject { collection: String, key: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Equality filters combined with AND, an optional ordering field and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Run the query over already decoded documents. Adapters without native query
    /// support share this so both backends agree on ordering rules.
    pub fn apply(&self, documents: impl IntoIterator<Item = Value>) -> Vec<Value> {
        let mut matching: Vec<Value> = documents
            .into_iter()
            .filter(|document| {
                self.filters
                    .iter()
                    .all(|(field, expected)| document.get(field) == Some(expected))
            })
            .collect();

        if let Some((field, direction)) = &self.order_by {
            matching.sort_by(|a, b| {
                let ordering = compare_fields(a.get(field), b.get(field));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            matching.truncate(limit);
        }
        matching
    }
}

// Missing fields sort first. Numbers compare numerically, strings lexicographically.
fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), Some(_)) => Ordering::Less,
        (Some(_), None | Some(Value::Null)) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}

/// Shallow merge of `update` into `existing`: top level fields of `update` replace the
/// ones already stored, everything else is kept.
pub fn merge_documents(
    collection: &str,
    key: &str,
    existing: Option<Value>,
    update: Value,
) -> Result<Value, DocumentStoreError> {
    let not_an_object = || DocumentStoreError::NotAnObject {
        collection: collection.to_string(),
        key: key.to_string(),
    };
    let Value::Object(update) = update else {
        return Err(not_an_object());
    };
    let mut merged = match existing {
        None => Map::new(),
        Some(Value::Object(existing)) => existing,
        Some(_) => return Err(not_an_object()),
    };
    merged.extend(update);
    Ok(Value::Object(merged))
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError>;

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        document: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError>;

    async fn delete_document(&self, collection: &str, key: &str) -> Result<(), DocumentStoreError>;

    async fn query_collection(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<Value>, DocumentStoreError>;
}

pub mod in_memory;
pub mod sqlite;
