use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{EditSession, SessionMode};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = EditSession;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::BeginEdit { record } => EditSession {
                draft: record.to_draft(),
                mode: SessionMode::Editing(record.id),
            },
            SessionIntent::SetField { field, value } => {
                let mut state = state;
                *state.draft.field_mut(field) = value;
                state
            }
            SessionIntent::InsertChar { field, ch } => {
                let mut state = state;
                state.draft.field_mut(field).push(ch);
                state
            }
            SessionIntent::DeleteChar { field } => {
                let mut state = state;
                state.draft.field_mut(field).pop();
                state
            }
            SessionIntent::Reset => EditSession::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{DraftField, RecordId, StudentRecord};

    fn ana() -> StudentRecord {
        StudentRecord {
            id: RecordId::Int(1),
            name: "Ana".into(),
            course: "CS".into(),
            registration_number: "123".into(),
        }
    }

    #[test]
    fn begin_edit_seeds_draft_from_record() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::BeginEdit { record: ana() },
        );
        assert_eq!(state.mode(), &SessionMode::Editing(RecordId::Int(1)));
        assert_eq!(state.draft().name, "Ana");
        assert_eq!(state.draft().course, "CS");
        assert_eq!(state.draft().registration_number, "123");
    }

    #[test]
    fn begin_edit_while_editing_switches_target() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::BeginEdit { record: ana() },
        );
        let mut other = ana();
        other.id = RecordId::Int(2);
        other.name = "Bob".into();
        let state = SessionReducer::reduce(state, SessionIntent::BeginEdit { record: other });
        assert_eq!(state.target(), Some(&RecordId::Int(2)));
        assert_eq!(state.draft().name, "Bob");
    }

    #[test]
    fn typing_diverges_from_seed_without_leaving_edit_mode() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::BeginEdit { record: ana() },
        );
        let state = SessionReducer::reduce(
            state,
            SessionIntent::SetField {
                field: DraftField::Course,
                value: "Physics".into(),
            },
        );
        assert!(state.is_editing());
        assert_eq!(state.draft().course, "Physics");
        assert_eq!(state.draft().name, "Ana");
    }

    #[test]
    fn insert_and_delete_char() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::InsertChar {
                field: DraftField::Name,
                ch: 'B',
            },
        );
        let state = SessionReducer::reduce(
            state,
            SessionIntent::InsertChar {
                field: DraftField::Name,
                ch: 'o',
            },
        );
        assert_eq!(state.draft().name, "Bo");
        let state = SessionReducer::reduce(
            state,
            SessionIntent::DeleteChar {
                field: DraftField::Name,
            },
        );
        assert_eq!(state.draft().name, "B");
    }

    #[test]
    fn delete_char_on_empty_field_is_noop() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::DeleteChar {
                field: DraftField::Course,
            },
        );
        assert_eq!(state, EditSession::default());
    }

    #[test]
    fn reset_returns_to_create() {
        let state = SessionReducer::reduce(
            EditSession::default(),
            SessionIntent::BeginEdit { record: ana() },
        );
        let state = SessionReducer::reduce(state, SessionIntent::Reset);
        assert_eq!(state, EditSession::default());
    }
}
