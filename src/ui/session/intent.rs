use crate::roster::{DraftField, StudentRecord};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Enter `Editing(record.id)` with the draft seeded from the record.
    BeginEdit { record: StudentRecord },
    /// Replace a field's whole value (paste, tests).
    SetField { field: DraftField, value: String },
    /// Append a typed character to a field.
    InsertChar { field: DraftField, ch: char },
    /// Drop the last character of a field.
    DeleteChar { field: DraftField },
    /// Back to `Create` with an empty draft. Used after a confirmed
    /// create/update, on cancel, and when the edit target is deleted.
    Reset,
}

impl Intent for SessionIntent {}
