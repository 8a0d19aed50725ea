//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod scripted_api;

pub use scripted_api::{Outcome, ScriptedApi};

use std::sync::Arc;

use article_board::articles::{ArticlesHandle, RetryPolicy, Synchronizer};

pub type TestSync = Synchronizer<ScriptedApi>;

/// Synchronizer over `api` with signal-gated retries.
pub fn manual_sync(api: ScriptedApi) -> (TestSync, ArticlesHandle, Arc<ScriptedApi>) {
    let api = Arc::new(api);
    let (sync, handle) = Synchronizer::with_shared(Arc::clone(&api), RetryPolicy::manual());
    (sync, handle, api)
}

/// Start `sync` and handle the initial list result.
pub async fn loaded(sync: &mut TestSync) {
    sync.start();
    assert!(sync.step().await, "queue closed before initial load resolved");
}
