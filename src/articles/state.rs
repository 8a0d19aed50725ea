use serde::Serialize;

use crate::api::{Article, ArticleId, ErrorPayload};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticlesStatus {
    #[default]
    Loading,
    Success,
    Error,
    ErrorDeleting,
}

impl ArticlesStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticlesStatus::Loading => "loading",
            ArticlesStatus::Success => "success",
            ArticlesStatus::Error => "error",
            ArticlesStatus::ErrorDeleting => "error-deleting",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error | Self::ErrorDeleting)
    }
}

impl std::fmt::Display for ArticlesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the article list.
///
/// `error` is only authoritative while `status` is an error status; after a
/// later success it keeps the last payload but should not be shown.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ArticlesState {
    pub records: Vec<Article>,
    pub status: ArticlesStatus,
    pub error: Option<ErrorPayload>,
}

impl UiState for ArticlesState {}

impl ArticlesState {
    /// The error to display, if the current status is an error status.
    pub fn visible_error(&self) -> Option<&ErrorPayload> {
        if self.status.is_error() {
            self.error.as_ref()
        } else {
            None
        }
    }

    /// Id of the article whose delete failed, while that failure is shown.
    pub fn failed_delete_id(&self) -> Option<ArticleId> {
        match self.status {
            ArticlesStatus::ErrorDeleting => self.error.as_ref().and_then(|e| e.id),
            _ => None,
        }
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.records.iter().any(|a| a.id == id)
    }
}
