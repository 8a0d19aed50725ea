//! In-memory store with simulated latency and random failures.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::error::ApiError;
use super::model::{default_fixture, Article, ArticleId};
use super::ArticleApi;

/// Latency and failure knobs for [`MockArticleApi`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubSettings {
    pub latency: Duration,
    /// Probability in `0.0..=1.0` that a call fails after the latency.
    pub failure_rate: f64,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            failure_rate: 0.2,
        }
    }
}

/// Remote store stub.
///
/// The article list is never modified: a successful delete only returns the
/// record, removal is reflected in synchronizer state.
#[derive(Debug, Clone)]
pub struct MockArticleApi {
    articles: Arc<[Article]>,
    settings: StubSettings,
}

impl MockArticleApi {
    pub fn new(articles: Vec<Article>, settings: StubSettings) -> Self {
        Self {
            articles: articles.into(),
            settings,
        }
    }

    pub fn with_fixture(settings: StubSettings) -> Self {
        Self::new(default_fixture(), settings)
    }

    pub fn settings(&self) -> StubSettings {
        self.settings
    }

    fn roll_failure(&self) -> bool {
        rand::random::<f64>() < self.settings.failure_rate
    }
}

impl Default for MockArticleApi {
    fn default() -> Self {
        Self::with_fixture(StubSettings::default())
    }
}

impl ArticleApi for MockArticleApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Article>, ApiError>> + Send {
        let articles = self.articles.to_vec();
        let latency = self.settings.latency;
        let fail = self.roll_failure();
        async move {
            tokio::time::sleep(latency).await;
            if fail {
                tracing::debug!("stub list failed");
                return Err(ApiError::transient_load());
            }
            Ok(articles)
        }
    }

    fn delete_by_id(
        &self,
        id: ArticleId,
    ) -> impl Future<Output = Result<Article, ApiError>> + Send {
        let found = self.articles.iter().find(|a| a.id == id).cloned();
        let latency = self.settings.latency;
        let fail = self.roll_failure();
        async move {
            // Missing ids fail without waiting.
            let Some(article) = found else {
                tracing::debug!(id, "stub delete target missing");
                return Err(ApiError::not_found(id));
            };
            tokio::time::sleep(latency).await;
            if fail {
                tracing::debug!(id, "stub delete failed");
                return Err(ApiError::transient_delete(id));
            }
            Ok(article)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reliable() -> MockArticleApi {
        MockArticleApi::with_fixture(StubSettings {
            latency: Duration::from_millis(500),
            failure_rate: 0.0,
        })
    }

    fn broken() -> MockArticleApi {
        MockArticleApi::with_fixture(StubSettings {
            latency: Duration::from_millis(500),
            failure_rate: 1.0,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn list_waits_for_latency() {
        let api = reliable();
        let started = tokio::time::Instant::now();
        let articles = api.list().await.unwrap();
        assert_eq!(articles.len(), 10);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn list_fails_with_transient_error() {
        let err = broken().list().await.unwrap_err();
        assert_eq!(err, ApiError::transient_load());
    }

    #[tokio::test(start_paused = true)]
    async fn delete_returns_record_without_removing_it() {
        let api = reliable();
        let deleted = api.delete_by_id(3).await.unwrap();
        assert_eq!(deleted.id, 3);
        assert_eq!(api.list().await.unwrap().len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_missing_id_fails_immediately() {
        let api = reliable();
        let started = tokio::time::Instant::now();
        let err = api.delete_by_id(999).await.unwrap_err();
        assert_eq!(err, ApiError::not_found(999));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_failure_carries_id() {
        let err = broken().delete_by_id(2).await.unwrap_err();
        assert_eq!(err.article_id(), Some(2));
        assert!(matches!(err, ApiError::TransientDelete { .. }));
    }
}
