use tokio::sync::{mpsc, watch};

use crate::api::{Article, ArticleId, ErrorPayload};
use crate::articles::state::{ArticlesState, ArticlesStatus};
use crate::articles::synchronizer::{Message, UserIntent};

/// Cloneable access to one synchronizer session.
///
/// Intents go onto the session queue; reads come from the last published
/// snapshot. Sending after the synchronizer stopped is a no-op returning
/// `false`.
#[derive(Clone)]
pub struct ArticlesHandle {
    tx: mpsc::UnboundedSender<Message>,
    state: watch::Receiver<ArticlesState>,
    settled: watch::Receiver<u64>,
}

impl ArticlesHandle {
    pub(crate) fn new(
        tx: mpsc::UnboundedSender<Message>,
        state: watch::Receiver<ArticlesState>,
        settled: watch::Receiver<u64>,
    ) -> Self {
        Self { tx, state, settled }
    }

    pub fn delete(&self, id: ArticleId) -> bool {
        self.send(UserIntent::Delete(id))
    }

    pub fn retry(&self) -> bool {
        self.send(UserIntent::Retry)
    }

    pub fn reset(&self) -> bool {
        self.send(UserIntent::Reset)
    }

    fn send(&self, intent: UserIntent) -> bool {
        tracing::info!(?intent, "intent");
        self.tx.send(Message::Intent(intent)).is_ok()
    }

    pub fn snapshot(&self) -> ArticlesState {
        self.state.borrow().clone()
    }

    pub fn records(&self) -> Vec<Article> {
        self.state.borrow().records.clone()
    }

    pub fn status(&self) -> ArticlesStatus {
        self.state.borrow().status
    }

    pub fn error(&self) -> Option<ErrorPayload> {
        self.state.borrow().error.clone()
    }

    /// Number of tracked delete calls that have resolved, successfully or
    /// not. Superseded deletes are not counted.
    pub fn deletes_settled(&self) -> u64 {
        *self.settled.borrow()
    }

    /// A receiver that is notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ArticlesState> {
        self.state.clone()
    }
}
