// SQLite implementation of the DocumentStore port.
//
// Purpose
// - Keep documents on disk so the service survives restarts and several processes can
//   share one database file.
//
// Schema
// - One `documents` table keyed by (collection, key); `body` holds the JSON text.
// - Filtering and ordering run on decoded documents through `Query::apply`, so results
//   match the in memory adapter exactly.
//
// Thread safety
// - `rusqlite::Connection` is `Send` but not `Sync`; access is serialised by a mutex and
//   every statement runs on the blocking pool, never on a runtime worker.

use crate::shared::infrastructure::document_store::{
    DocumentStore, DocumentStoreError, Query, merge_documents,
};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub struct SqliteDocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl From<rusqlite::Error> for DocumentStoreError {
    fn from(error: rusqlite::Error) -> Self {
        DocumentStoreError::Backend(format!("sqlite error: {error}"))
    }
}

impl SqliteDocumentStore {
    /// Opens a database at the given path, creating file and schema if necessary.
    pub fn open(path: &Path) -> Result<Self, DocumentStoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DocumentStoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DocumentStoreError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                key TEXT NOT NULL,
                body TEXT NOT NULL,
                PRIMARY KEY (collection, key)
            );
            ",
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_connection<T, F>(&self, work: F) -> Result<T, DocumentStoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, DocumentStoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|_| DocumentStoreError::Backend("sqlite connection poisoned".into()))?;
            work(&mut conn)
        })
        .await
        .map_err(|e| DocumentStoreError::Backend(format!("sqlite task failed: {e}")))?
    }
}

fn read_document(
    conn: &Connection,
    collection: &str,
    key: &str,
) -> Result<Option<Value>, DocumentStoreError> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM documents WHERE collection = ?1 AND key = ?2",
            params![collection, key],
            |row| row.get(0),
        )
        .optional()?;
    body.map(|body| decode(&body)).transpose()
}

fn decode(body: &str) -> Result<Value, DocumentStoreError> {
    serde_json::from_str(body).map_err(|e| DocumentStoreError::Serialization(e.to_string()))
}

fn write_document(
    conn: &mut Connection,
    collection: &str,
    key: &str,
    document: Value,
    merge: bool,
) -> Result<(), DocumentStoreError> {
    let tx = conn.transaction()?;
    let document = if merge {
        merge_documents(collection, key, read_document(&tx, collection, key)?, document)?
    } else {
        document
    };
    let body = serde_json::to_string(&document)
        .map_err(|e| DocumentStoreError::Serialization(e.to_string()))?;
    tx.execute(
        "
        INSERT INTO documents (collection, key, body) VALUES (?1, ?2, ?3)
        ON CONFLICT (collection, key) DO UPDATE SET body = excluded.body
        ",
        params![collection, key, body],
    )?;
    tx.commit()?;
    Ok(())
}

fn read_collection(conn: &Connection, collection: &str) -> Result<Vec<Value>, DocumentStoreError> {
    let mut stmt = conn.prepare("SELECT body FROM documents WHERE collection = ?1 ORDER BY key")?;
    let bodies = stmt
        .query_map(params![collection], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    bodies.iter().map(|body| decode(body)).collect()
}

#[async_trait::async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        let (collection, key) = (collection.to_string(), key.to_string());
        self.with_connection(move |conn| read_document(conn, &collection, &key))
            .await
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        document: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError> {
        let (collection, key) = (collection.to_string(), key.to_string());
        self.with_connection(move |conn| write_document(conn, &collection, &key, document, merge))
            .await
    }

    async fn delete_document(&self, collection: &str, key: &str) -> Result<(), DocumentStoreError> {
        let (collection, key) = (collection.to_string(), key.to_string());
        self.with_connection(move |conn| {
            conn.execute(
                "DELETE FROM documents WHERE collection = ?1 AND key = ?2",
                params![collection, key],
            )?;
            Ok(())
        })
        .await
    }

    async fn query_collection(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<Value>, DocumentStoreError> {
        let (collection, query) = (collection.to_string(), query.clone());
        self.with_connection(move |conn| Ok(query.apply(read_collection(conn, &collection)?)))
            .await
    }
}
