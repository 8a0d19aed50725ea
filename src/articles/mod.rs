//! Article list state and the synchronizer that keeps it consistent.
//!
//! Every input (user intents and store results) is funnelled through one
//! ordered queue and folded by [`ArticlesReducer`]; observers read snapshots
//! through an [`ArticlesHandle`].

mod event;
mod handle;
mod reducer;
mod retry;
mod state;
mod synchronizer;

pub use event::ArticlesEvent;
pub use handle::ArticlesHandle;
pub use reducer::ArticlesReducer;
pub use retry::RetryPolicy;
pub use state::{ArticlesState, ArticlesStatus};
pub use synchronizer::Synchronizer;
