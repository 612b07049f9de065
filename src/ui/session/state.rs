use crate::roster::{Draft, RecordId};
use crate::ui::mvi::UiState;

/// Whether a submit creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Create,
    Editing(RecordId),
}

/// Mode plus the draft being typed. The target id exists only in
/// `Editing`, so it cannot drift out of sync with the mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSession {
    pub(super) mode: SessionMode,
    pub(super) draft: Draft,
}

impl UiState for EditSession {}

impl EditSession {
    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn target(&self) -> Option<&RecordId> {
        match &self.mode {
            SessionMode::Create => None,
            SessionMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, SessionMode::Editing(_))
    }

    /// True when the session is editing `id`.
    pub fn targets(&self, id: &RecordId) -> bool {
        self.target() == Some(id)
    }

    /// Label of the submit action in the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            SessionMode::Create => "Add student",
            SessionMode::Editing(_) => "Save changes",
        }
    }
}
