use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use shift_tracker::shared::infrastructure::document_store::DocumentStore;
use shift_tracker::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use shift_tracker::shared::infrastructure::document_store::sqlite::SqliteDocumentStore;
use shift_tracker::shell::config::{Config, StoreBackend};
use shift_tracker::shell::http::router;
use shift_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match &config.store {
        StoreBackend::Memory => {
            tracing::info!("using in-memory document store");
            Arc::new(InMemoryDocumentStore::new())
        }
        StoreBackend::Sqlite(path) => {
            tracing::info!(path = %path.display(), "using sqlite document store");
            Arc::new(
                SqliteDocumentStore::open(path)
                    .with_context(|| format!("opening {}", path.display()))?,
            )
        }
    };

    let app = router(AppState::new(store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Shift tracker listening on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
