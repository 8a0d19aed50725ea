//! Store errors and their JSON-shaped payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::ArticleId;

pub const DEFAULT_ERROR_MESSAGE: &str = "Error 400 | Bad request";

/// Errors returned by [`super::ArticleApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Listing failed; safe to retry.
    #[error("{message}")]
    TransientLoad { message: String },

    /// Deleting failed; safe to retry.
    #[error("{message} (article {id})")]
    TransientDelete { id: ArticleId, message: String },

    /// The delete target does not exist.
    #[error("{message} (article {id} not found)")]
    NotFound { id: ArticleId, message: String },
}

impl ApiError {
    pub fn transient_load() -> Self {
        Self::TransientLoad {
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn transient_delete(id: ArticleId) -> Self {
        Self::TransientDelete {
            id,
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn not_found(id: ArticleId) -> Self {
        Self::NotFound {
            id,
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// The article this error refers to, if any.
    pub fn article_id(&self) -> Option<ArticleId> {
        match self {
            ApiError::TransientLoad { .. } => None,
            ApiError::TransientDelete { id, .. } | ApiError::NotFound { id, .. } => Some(*id),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::TransientLoad { message }
            | ApiError::TransientDelete { message, .. }
            | ApiError::NotFound { message, .. } => message,
        }
    }

    /// Convert to the payload stored in state.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            id: self.article_id(),
            message: self.message().to_string(),
        }
    }
}

/// Error as surfaced to the view: `{"id"?: number, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    pub message: String,
}

impl ErrorPayload {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<&ApiError> for ErrorPayload {
    fn from(err: &ApiError) -> Self {
        err.payload()
    }
}
