//! Remote article store.
//!
//! [`ArticleApi`] is the in-process stand-in for an HTTP endpoint. The
//! [`MockArticleApi`] implementation serves a fixed fixture with simulated
//! latency and random transient failures.

mod error;
mod model;
mod stub;

pub use error::{ApiError, ErrorPayload, DEFAULT_ERROR_MESSAGE};
pub use model::{default_fixture, Article, ArticleId};
pub use stub::{MockArticleApi, StubSettings};

use std::future::Future;

/// Operations the synchronizer needs from the remote store.
///
/// Both calls resolve asynchronously and never mutate the store.
pub trait ArticleApi: Send + Sync + 'static {
    /// Fetch every article.
    fn list(&self) -> impl Future<Output = Result<Vec<Article>, ApiError>> + Send;

    /// Delete an article by id, returning the deleted record.
    fn delete_by_id(&self, id: ArticleId)
        -> impl Future<Output = Result<Article, ApiError>> + Send;
}
