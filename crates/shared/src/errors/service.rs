use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// The row is either absent or soft-deleted; callers asking through an
    /// availability-filtered lookup cannot tell the two apart.
    #[error("Product with id #{id} not found or not available")]
    NotVisible { id: i32 },

    /// The row is absent outright (raw lookup, no availability filter).
    #[error("Product with id #{id} not found")]
    NotFound { id: i32 },

    /// Batch existence check failed; carries exactly the absent ids.
    #[error("Some products do not exist: {ids:?}")]
    MissingProducts { ids: Vec<i32> },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}
