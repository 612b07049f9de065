//! Intent handling for the roster client.
//!
//! The controller is the single writer of [`AppState`]. Every intent that
//! needs the server awaits exactly one [`RosterApi`] call and only then
//! dispatches the confirmed result through the reducers. Failures leave the
//! state untouched and produce exactly one notification.

use crate::roster::{
    DraftField, Operation, RecordId, RosterApi, RosterError, RosterIntent, RosterReducer,
    RosterStore,
};
use crate::ui::mvi::Reducer;
use crate::ui::session::{EditSession, SessionIntent, SessionReducer};

/// User-facing notification sink.
pub trait Notifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Everything the view renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub roster: RosterStore,
    pub session: EditSession,
}

/// Run a reducer over one field of the controller's state.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.state.$field = <$reducer>::reduce(std::mem::take(&mut $self.state.$field), $intent);
    };
}

pub struct Controller<C, N> {
    client: C,
    notifier: N,
    state: AppState,
}

impl<C: RosterApi, N: Notifier> Controller<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn roster(&self) -> &RosterStore {
        &self.state.roster
    }

    pub fn session(&self) -> &EditSession {
        &self.state.session
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the roster and replace the local cache with it.
    pub async fn load(&mut self) -> Result<(), RosterError> {
        match self.client.list().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Roster loaded");
                dispatch_mvi!(self, roster, RosterReducer, RosterIntent::Initialize { records });
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Create or update from the current draft, depending on the mode.
    ///
    /// An invalid draft is rejected locally with a warning and no request.
    pub async fn submit(&mut self) -> Result<(), RosterError> {
        let draft = self.state.session.draft().clone();
        let target = self.state.session.target().cloned();
        let operation = match target {
            Some(_) => Operation::Update,
            None => Operation::Create,
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            let err = RosterError::Validation {
                operation,
                target,
                missing,
            };
            self.report(&err);
            return Err(err);
        }

        let result = match &target {
            Some(target) => self.client.update(target, &draft).await,
            None => self.client.create(&draft).await,
        };

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        let message = match operation {
            Operation::Update => format!("Student \"{}\" updated.", record.name),
            _ => format!("Student \"{}\" added.", record.name),
        };
        tracing::info!(operation = %operation, id = %record.id, "Student saved");

        match target {
            Some(target) => {
                if record.id != target {
                    tracing::warn!(
                        target_id = %target,
                        returned = %record.id,
                        "Update response carries a different id"
                    );
                }
                dispatch_mvi!(self, roster, RosterReducer, RosterIntent::Replace { target, record });
            }
            None => {
                dispatch_mvi!(self, roster, RosterReducer, RosterIntent::Upsert { record });
            }
        }
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Reset);
        self.notifier.success(&message);
        Ok(())
    }

    /// Enter edit mode for `id`, seeding the draft from the cached record.
    ///
    /// Returns `false` and changes nothing when `id` is not in the roster.
    pub fn edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.state.roster.get(id).cloned() else {
            tracing::debug!(id = %id, "Edit requested for unknown id");
            return false;
        };
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::BeginEdit { record });
        true
    }

    /// Abandon the current draft and return to create mode.
    pub fn cancel_edit(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Reset);
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::SetField { field, value });
    }

    pub fn insert_char(&mut self, field: DraftField, ch: char) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::InsertChar { field, ch });
    }

    pub fn delete_char(&mut self, field: DraftField) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::DeleteChar { field });
    }

    /// Delete a record the user already confirmed.
    ///
    /// If the deleted record is the current edit target, the session falls
    /// back to create mode so it never points at a missing record.
    pub async fn delete(&mut self, id: &RecordId) -> Result<(), RosterError> {
        if let Err(err) = self.client.delete(id).await {
            self.report(&err);
            return Err(err);
        }

        tracing::info!(id = %id, "Student deleted");
        dispatch_mvi!(self, roster, RosterReducer, RosterIntent::Remove { id: id.clone() });
        if self.state.session.targets(id) {
            dispatch_mvi!(self, session, SessionReducer, SessionIntent::Reset);
        }
        self.notifier.success("Student deleted.");
        Ok(())
    }

    fn report(&self, err: &RosterError) {
        if err.is_warning() {
            tracing::warn!(
                kind = err.kind(),
                operation = %err.operation(),
                target_id = ?err.target().map(ToString::to_string),
                error = %err,
                "Draft rejected"
            );
            self.notifier.warning(err.user_message());
            return;
        }

        tracing::error!(
            kind = err.kind(),
            operation = %err.operation(),
            target_id = ?err.target().map(ToString::to_string),
            error = %err,
            "Roster operation failed"
        );
        self.notifier.error(err.user_message());
    }
}
