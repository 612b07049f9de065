//! Model-View-Intent primitives shared by every stateful part of the client.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure `(State, Intent) -> State` functions, so the roster
//! cache, the edit session and the dialogs can each be tested without a
//! terminal or a network.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
