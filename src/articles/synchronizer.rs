//! Effectful driver around [`ArticlesReducer`].
//!
//! One queue per session carries user intents, store results and automatic
//! retry ticks. Messages are handled strictly in arrival order: each one may
//! start store calls (spawned tasks that post their result back onto the same
//! queue) and folds zero or more [`ArticlesEvent`]s into the state.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::api::{ApiError, Article, ArticleApi, ArticleId};
use crate::articles::event::ArticlesEvent;
use crate::articles::handle::ArticlesHandle;
use crate::articles::reducer::ArticlesReducer;
use crate::articles::retry::RetryPolicy;
use crate::articles::state::ArticlesState;
use crate::shutdown::Shutdown;
use crate::ui::mvi::dispatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserIntent {
    Delete(ArticleId),
    Retry,
    Reset,
}

/// Which chain a list call belongs to. The initial chain is never superseded;
/// loads issued by a reset only supersede each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadChain {
    Initial,
    Reset,
}

/// A store call that can fail and be re-issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Load(LoadChain),
    Delete,
}

/// Re-issue order on a retry signal: loads first, then the delete.
const OPERATIONS: [Operation; 3] = [
    Operation::Load(LoadChain::Initial),
    Operation::Load(LoadChain::Reset),
    Operation::Delete,
];

#[derive(Debug)]
pub(crate) enum Message {
    Intent(UserIntent),
    LoadResolved {
        chain: LoadChain,
        generation: u64,
        result: Result<Vec<Article>, ApiError>,
    },
    DeleteResolved {
        generation: u64,
        id: ArticleId,
        result: Result<Article, ApiError>,
    },
    /// Raised by the retry timer of one operation; ignored if `epoch` is no
    /// longer that operation's current epoch.
    AutoRetry { operation: Operation, epoch: u64 },
}

/// Bookkeeping for one retryable operation. Only the latest issued call
/// counts; `epoch` invalidates automatic retries scheduled before it moved.
#[derive(Debug, Default)]
struct CallTracker {
    generation: u64,
    epoch: u64,
    failed: bool,
    failures: u32,
}

pub struct Synchronizer<A: ArticleApi> {
    api: Arc<A>,
    policy: RetryPolicy,
    state: ArticlesState,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    publisher: watch::Sender<ArticlesState>,
    settled: watch::Sender<u64>,
    initial_load: CallTracker,
    reset_load: CallTracker,
    delete: CallTracker,
    delete_target: Option<ArticleId>,
    started: bool,
}

impl<A: ArticleApi> Synchronizer<A> {
    pub fn new(api: A, policy: RetryPolicy) -> (Self, ArticlesHandle) {
        Self::with_shared(Arc::new(api), policy)
    }

    /// Like [`Synchronizer::new`] but keeps the store shared with the caller.
    pub fn with_shared(api: Arc<A>, policy: RetryPolicy) -> (Self, ArticlesHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = ArticlesState::default();
        let (publisher, observer) = watch::channel(state.clone());
        let (settled, settled_rx) = watch::channel(0);
        let handle = ArticlesHandle::new(tx.clone(), observer, settled_rx);
        let sync = Self {
            api,
            policy,
            state,
            tx,
            rx,
            publisher,
            settled,
            initial_load: CallTracker::default(),
            reset_load: CallTracker::default(),
            delete: CallTracker::default(),
            delete_target: None,
            started: false,
        };
        (sync, handle)
    }

    pub fn state(&self) -> &ArticlesState {
        &self.state
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn handle(&self) -> ArticlesHandle {
        ArticlesHandle::new(
            self.tx.clone(),
            self.publisher.subscribe(),
            self.settled.subscribe(),
        )
    }

    /// Issue the initial load. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.fold(ArticlesEvent::LoadRequested);
        self.issue_load(LoadChain::Initial);
    }

    /// Process messages until shutdown is signalled.
    pub async fn run(mut self, shutdown: Shutdown) {
        self.start();
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                message = self.rx.recv() => match message {
                    Some(message) => self.handle_message(message),
                    None => break,
                },
            }
        }
        info!("synchronizer stopped");
    }

    /// Wait for the next message and handle it.
    ///
    /// Returns `false` if the queue is closed.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(message) => {
                self.handle_message(message);
                true
            }
            None => false,
        }
    }

    /// Handle every message already queued, without waiting.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::Intent(UserIntent::Delete(id)) => self.request_delete(id),
            Message::Intent(UserIntent::Retry) => self.retry(),
            Message::Intent(UserIntent::Reset) => self.reset(),
            Message::LoadResolved {
                chain,
                generation,
                result,
            } => self.on_load_resolved(chain, generation, result),
            Message::DeleteResolved {
                generation,
                id,
                result,
            } => self.on_delete_resolved(generation, id, result),
            Message::AutoRetry { operation, epoch } => self.auto_retry(operation, epoch),
        }
    }

    fn tracker(&mut self, operation: Operation) -> &mut CallTracker {
        match operation {
            Operation::Load(LoadChain::Initial) => &mut self.initial_load,
            Operation::Load(LoadChain::Reset) => &mut self.reset_load,
            Operation::Delete => &mut self.delete,
        }
    }

    /// Retry signal: every failed call is re-issued exactly once and the
    /// automatic attempt budgets restart. Ignored when nothing has failed,
    /// so the status never sticks at loading.
    fn retry(&mut self) {
        let failed: Vec<Operation> = OPERATIONS
            .into_iter()
            .filter(|operation| self.tracker(*operation).failed)
            .collect();
        if failed.is_empty() {
            debug!("retry with nothing failed ignored");
            return;
        }
        for operation in OPERATIONS {
            let tracker = self.tracker(operation);
            tracker.failures = 0;
            tracker.epoch += 1;
        }
        self.fold(ArticlesEvent::RetryRequested);
        for operation in failed {
            self.reissue(operation);
        }
    }

    /// Timer-raised retry of a single operation. Other failed operations keep
    /// waiting for their own timer or the user.
    fn auto_retry(&mut self, operation: Operation, epoch: u64) {
        let tracker = self.tracker(operation);
        if epoch != tracker.epoch || !tracker.failed {
            debug!(?operation, epoch, "stale automatic retry ignored");
            return;
        }
        info!(?operation, epoch, "automatic retry");
        self.fold(ArticlesEvent::RetryRequested);
        self.reissue(operation);
    }

    fn reissue(&mut self, operation: Operation) {
        self.tracker(operation).failed = false;
        match operation {
            Operation::Load(chain) => self.issue_load(chain),
            Operation::Delete => {
                if let Some(id) = self.delete_target {
                    self.issue_delete(id);
                }
            }
        }
    }

    fn reset(&mut self) {
        let tracker = &mut self.reset_load;
        tracker.failed = false;
        tracker.failures = 0;
        tracker.epoch += 1;
        self.fold(ArticlesEvent::ResetRequested);
        self.fold(ArticlesEvent::LoadRequested);
        self.issue_load(LoadChain::Reset);
    }

    fn request_delete(&mut self, id: ArticleId) {
        if let Some(previous) = self.delete_target.filter(|prev| *prev != id) {
            debug!(previous, id, "delete superseded");
        }
        self.delete_target = Some(id);
        let tracker = &mut self.delete;
        tracker.failed = false;
        tracker.failures = 0;
        tracker.epoch += 1;
        self.fold(ArticlesEvent::DeleteRequested(id));
        self.issue_delete(id);
    }

    fn issue_load(&mut self, chain: LoadChain) {
        let tracker = self.tracker(Operation::Load(chain));
        tracker.generation += 1;
        let generation = tracker.generation;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!(?chain, generation, "list issued");
        tokio::spawn(async move {
            let result = api.list().await;
            let _ = tx.send(Message::LoadResolved {
                chain,
                generation,
                result,
            });
        });
    }

    fn issue_delete(&mut self, id: ArticleId) {
        self.delete.generation += 1;
        let generation = self.delete.generation;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!(generation, id, "delete issued");
        tokio::spawn(async move {
            let result = api.delete_by_id(id).await;
            let _ = tx.send(Message::DeleteResolved {
                generation,
                id,
                result,
            });
        });
    }

    fn on_load_resolved(
        &mut self,
        chain: LoadChain,
        generation: u64,
        result: Result<Vec<Article>, ApiError>,
    ) {
        let operation = Operation::Load(chain);
        let tracker = self.tracker(operation);
        if generation != tracker.generation {
            debug!(?chain, generation, current = tracker.generation, "stale list result dropped");
            return;
        }
        match result {
            Ok(records) => {
                tracker.failures = 0;
                info!(?chain, count = records.len(), "articles loaded");
                self.fold(ArticlesEvent::LoadSucceeded(records));
            }
            Err(err) => {
                tracker.failed = true;
                tracker.failures += 1;
                warn!(?chain, error = %err, failures = tracker.failures, "list failed");
                self.fold(ArticlesEvent::LoadFailed(err.payload()));
                self.schedule_retry(operation);
            }
        }
    }

    fn on_delete_resolved(
        &mut self,
        generation: u64,
        id: ArticleId,
        result: Result<Article, ApiError>,
    ) {
        if generation != self.delete.generation {
            debug!(generation, id, "superseded delete result dropped");
            return;
        }
        // Counted before the fold so observers of the new snapshot see it.
        self.settled.send_modify(|settled| *settled += 1);
        match result {
            Ok(article) => {
                info!(id = article.id, "article deleted");
                self.delete_target = None;
                self.delete.failures = 0;
                self.fold(ArticlesEvent::DeleteSucceeded(article));
            }
            Err(err) => {
                self.delete.failed = true;
                self.delete.failures += 1;
                warn!(id, error = %err, failures = self.delete.failures, "delete failed");
                self.fold(ArticlesEvent::DeleteFailed(err.payload()));
                self.schedule_retry(Operation::Delete);
            }
        }
    }

    /// Arm the automatic retry of `operation` if the policy allows another
    /// attempt after its current run of failures.
    fn schedule_retry(&mut self, operation: Operation) {
        let policy = self.policy;
        let tracker = self.tracker(operation);
        if !policy.schedules_after(tracker.failures) {
            return;
        }
        tracker.epoch += 1;
        let epoch = tracker.epoch;
        let delay = policy.delay_for_attempt(tracker.failures);
        let tx = self.tx.clone();
        debug!(?operation, epoch, ?delay, "automatic retry scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Message::AutoRetry { operation, epoch });
        });
    }

    fn fold(&mut self, event: ArticlesEvent) {
        let name = event.name();
        dispatch::<ArticlesReducer>(&mut self.state, event);
        debug!(
            event = name,
            status = %self.state.status,
            records = self.state.records.len(),
            "state folded"
        );
        self.publisher.send_replace(self.state.clone());
    }
}
