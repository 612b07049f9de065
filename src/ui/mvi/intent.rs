//! Marker trait for intents.

/// A user action (key press, confirmation) or a confirmed server result
/// that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
