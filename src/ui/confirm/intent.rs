use crate::roster::RecordId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Ask before deleting `target`. Cancel is preselected.
    Open { target: RecordId, name: String },
    /// Left/Right/Tab: flip between Cancel and Confirm.
    ToggleButton,
    /// Hide the dialog, whatever was selected.
    Close,
}

impl Intent for ConfirmIntent {}
