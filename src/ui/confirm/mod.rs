//! Delete confirmation dialog.
//!
//! Deletion is irreversible, so the table never calls the controller
//! directly: it opens this dialog, and only a `Confirm` produces the
//! delete request.
//!
//! - `state.rs` - dialog state
//! - `intent.rs` - open/close/button selection
//! - `reducer.rs` - transitions
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::{ConfirmButton, ConfirmDialogState};
