//! Edit session: create vs. edit mode plus the pending draft.
//!
//! - `state.rs` - session value and mode
//! - `intent.rs` - form edits and mode changes
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{EditSession, SessionMode};
