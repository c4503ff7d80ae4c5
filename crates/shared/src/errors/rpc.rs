use crate::errors::{repository::RepositoryError, service::ServiceError};
use serde::{Deserialize, Serialize};

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL: u16 = 500;

/// Error body sent back over the message transport instead of a raw
/// internal error. `status` is the machine-usable class, `message` is for
/// humans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub status: u16,
    pub message: String,
}

impl RpcErrorBody {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: STATUS_INTERNAL,
            message: "Internal server error".to_string(),
        }
    }
}

impl From<&ServiceError> for RpcErrorBody {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::NotVisible { .. }
            | ServiceError::MissingProducts { .. }
            | ServiceError::Validation(_) => Self::bad_request(err.to_string()),

            ServiceError::NotFound { .. } => Self::not_found(err.to_string()),

            ServiceError::Repo(RepositoryError::NotFound) => Self::not_found("Not found"),

            // Store and internal failures cross the boundary as an opaque 500.
            ServiceError::Repo(_) | ServiceError::Internal(_) => Self::internal(),
        }
    }
}
