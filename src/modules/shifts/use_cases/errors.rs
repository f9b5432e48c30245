use thiserror::Error;

use crate::modules::shifts::core::errors::DecideError;
use crate::shared::infrastructure::document_store::DocumentStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] DocumentStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}
