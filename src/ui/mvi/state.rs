//! Marker trait for reducer-owned state.

/// States are plain values: cloned to snapshot, compared to detect change,
/// and defaulted so `std::mem::take` can move them through a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
