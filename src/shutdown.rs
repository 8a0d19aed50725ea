//! Stop signal shared by the input thread, the UI loop and the synchronizer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Default)]
struct Inner {
    signaled: AtomicBool,
    notify: Notify,
}

/// Cloneable stop flag. Every clone observes the same signal.
#[derive(Clone, Default)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Only the first call logs `reason` and wakes waiters;
    /// it returns whether this call was that first one.
    pub fn signal(&self, reason: &str) -> bool {
        if self.inner.signaled.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!(reason, "shutdown initiated");
        self.inner.notify.notify_waiters();
        true
    }

    pub fn is_signaled(&self) -> bool {
        self.inner.signaled.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register with Notify before reading the flag so a signal landing
        // in between is not lost.
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_signaled() {
            return;
        }
        notified.await;
    }
}
