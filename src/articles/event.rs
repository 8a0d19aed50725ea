use crate::api::{Article, ArticleId, ErrorPayload};
use crate::ui::mvi::Intent;

/// Everything [`super::ArticlesReducer`] folds, in queue order.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticlesEvent {
    /// A list call was issued (initial load or reset).
    LoadRequested,
    LoadSucceeded(Vec<Article>),
    LoadFailed(ErrorPayload),
    /// Failed operations are about to be re-issued.
    RetryRequested,
    ResetRequested,
    /// A delete call was issued. Does not change state by itself.
    DeleteRequested(ArticleId),
    DeleteSucceeded(Article),
    DeleteFailed(ErrorPayload),
}

impl Intent for ArticlesEvent {}

impl ArticlesEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ArticlesEvent::LoadRequested => "load_requested",
            ArticlesEvent::LoadSucceeded(_) => "load_succeeded",
            ArticlesEvent::LoadFailed(_) => "load_failed",
            ArticlesEvent::RetryRequested => "retry_requested",
            ArticlesEvent::ResetRequested => "reset_requested",
            ArticlesEvent::DeleteRequested(_) => "delete_requested",
            ArticlesEvent::DeleteSucceeded(_) => "delete_succeeded",
            ArticlesEvent::DeleteFailed(_) => "delete_failed",
        }
    }
}
