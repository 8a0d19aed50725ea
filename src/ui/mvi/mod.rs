//! Model-View-Intent primitives.
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── user intents ────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every fold
//! - **Intent**: user action or resolved async result
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
