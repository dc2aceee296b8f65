use std::error::Error as StdError;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: invalid {field}")]
    Validation { field: &'static str },

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// A failure reported by a repository implementation.
///
/// The concrete driver error is kept boxed so callers that know the backend
/// (e.g. the HTTP layer classifying `sqlx` constraint violations) can
/// recover it with [`StorageError::downcast_ref`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(Box<dyn StdError + Send + Sync + 'static>);

impl StorageError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self(source.into())
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}
