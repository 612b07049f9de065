//! Terminal front end.
//!
//! Everything here is presentation: focus, selection, dialogs and toasts.
//! Roster and edit-session state are owned by [`crate::controller`].

pub mod app;
pub mod confirm;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod table;
pub mod terminal_guard;
pub mod theme;
pub mod toast;

pub use runtime::run;
