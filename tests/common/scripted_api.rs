//! Store double with scripted outcomes for driving the synchronizer.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use article_board::api::{default_fixture, ApiError, Article, ArticleApi, ArticleId};
use parking_lot::Mutex;

/// How one call resolves. Calls past the end of a script succeed at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Outcome {
    pub delay: Duration,
    pub fail: bool,
}

impl Outcome {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn fail() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: true,
        }
    }

    pub fn after(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

pub struct ScriptedApi {
    articles: Vec<Article>,
    list_script: Mutex<VecDeque<Outcome>>,
    delete_script: Mutex<VecDeque<Outcome>>,
    list_calls: AtomicUsize,
    delete_calls: Mutex<Vec<ArticleId>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::with_articles(default_fixture())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            list_script: Mutex::new(VecDeque::new()),
            delete_script: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn lists(self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.list_script.lock().extend(outcomes);
        self
    }

    pub fn deletes(self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.delete_script.lock().extend(outcomes);
        self
    }

    /// The next `n` list calls fail.
    pub fn fail_lists(self, n: usize) -> Self {
        self.lists(std::iter::repeat(Outcome::fail()).take(n))
    }

    /// The next `n` delete calls on existing ids fail.
    pub fn fail_deletes(self, n: usize) -> Self {
        self.deletes(std::iter::repeat(Outcome::fail()).take(n))
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> Vec<ArticleId> {
        self.delete_calls.lock().clone()
    }
}

impl ArticleApi for ScriptedApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Article>, ApiError>> + Send {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.list_script.lock().pop_front().unwrap_or_default();
        let articles = self.articles.clone();
        async move {
            if !outcome.delay.is_zero() {
                tokio::time::sleep(outcome.delay).await;
            }
            if outcome.fail {
                Err(ApiError::transient_load())
            } else {
                Ok(articles)
            }
        }
    }

    fn delete_by_id(
        &self,
        id: ArticleId,
    ) -> impl Future<Output = Result<Article, ApiError>> + Send {
        self.delete_calls.lock().push(id);
        let found = self.articles.iter().find(|a| a.id == id).cloned();
        let outcome = if found.is_some() {
            self.delete_script.lock().pop_front().unwrap_or_default()
        } else {
            Outcome::ok()
        };
        async move {
            let Some(article) = found else {
                return Err(ApiError::not_found(id));
            };
            if !outcome.delay.is_zero() {
                tokio::time::sleep(outcome.delay).await;
            }
            if outcome.fail {
                Err(ApiError::transient_delete(id))
            } else {
                Ok(article)
            }
        }
    }
}
