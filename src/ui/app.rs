use crate::controller::{AppState, Controller};
use crate::roster::{DraftField, RecordId, RosterApi, RosterError, StudentRecord};
use crate::ui::confirm::{ConfirmButton, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{Toast, ToastCenter};
use std::time::Instant;

/// Where keyboard input goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form(DraftField),
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Form(field) => field.next().map(Focus::Form).unwrap_or(Focus::Table),
            Focus::Table => Focus::Form(DraftField::Name),
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Form(DraftField::Name) => Focus::Table,
            Focus::Form(DraftField::Course) => Focus::Form(DraftField::Name),
            Focus::Form(DraftField::RegistrationNumber) => Focus::Form(DraftField::Course),
            Focus::Table => Focus::Form(DraftField::RegistrationNumber),
        }
    }
}

/// View-side state around the controller: focus, table selection and the
/// confirmation dialog. Roster and session live in the controller.
pub struct App<C> {
    should_quit: bool,
    focus: Focus,
    selection: usize,
    endpoint: String,
    controller: Controller<C, ToastCenter>,
    toasts: ToastCenter,
    confirm_dialog: ConfirmDialogState,
}

impl<C: RosterApi> App<C> {
    pub fn new(client: C, toasts: ToastCenter, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form(DraftField::Name),
            selection: 0,
            endpoint: endpoint.into(),
            controller: Controller::new(client, toasts.clone()),
            toasts,
            confirm_dialog: ConfirmDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn controller(&self) -> &Controller<C, ToastCenter> {
        &self.controller
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&StudentRecord> {
        self.state().roster.records().get(self.selection)
    }

    /// Move the table cursor, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.state().roster.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.snapshot()
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    // ========================================================================
    // Draft editing
    // ========================================================================

    fn focused_field(&self) -> Option<DraftField> {
        match self.focus {
            Focus::Form(field) => Some(field),
            Focus::Table => None,
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(field) = self.focused_field() {
            self.controller.insert_char(field, ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            self.controller.delete_char(field);
        }
    }

    /// Append pasted text to the focused field. Line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let mut value = self.state().session.draft().field(field).to_string();
        value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        self.controller.set_field(field, value);
    }

    /// Start editing the highlighted row and jump to the first field.
    pub fn edit_selected(&mut self) -> bool {
        let Some(id) = self.selected_record().map(|record| record.id.clone()) else {
            return false;
        };
        if !self.controller.edit(&id) {
            return false;
        }
        self.focus = Focus::Form(DraftField::Name);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.controller.cancel_edit();
    }

    // ========================================================================
    // Delete confirmation (MVI pattern)
    // ========================================================================

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm_dialog
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        self.confirm_dialog = ConfirmReducer::reduce(std::mem::take(&mut self.confirm_dialog), intent);
    }

    /// Ask for confirmation before deleting the highlighted row.
    pub fn request_delete_selected(&mut self) -> bool {
        let Some(record) = self.selected_record() else {
            return false;
        };
        let intent = ConfirmIntent::Open {
            target: record.id.clone(),
            name: record.name.clone(),
        };
        self.dispatch_confirm(intent);
        true
    }

    /// Close the dialog; returns the target only if Confirm was selected.
    pub fn resolve_confirm(&mut self) -> Option<RecordId> {
        let confirmed = match &self.confirm_dialog {
            ConfirmDialogState::Visible {
                target,
                selected: ConfirmButton::Confirm,
                ..
            } => Some(target.clone()),
            _ => None,
        };
        self.dispatch_confirm(ConfirmIntent::Close);
        confirmed
    }

    // ========================================================================
    // Remote intents
    // ========================================================================

    pub async fn load(&mut self) -> Result<(), RosterError> {
        let result = self.controller.load().await;
        self.clamp_selection();
        result
    }

    pub async fn submit(&mut self) -> Result<(), RosterError> {
        self.controller.submit().await
    }

    pub async fn delete(&mut self, id: &RecordId) -> Result<(), RosterError> {
        let result = self.controller.delete(id).await;
        self.clamp_selection();
        result
    }

    fn clamp_selection(&mut self) {
        let len = self.state().roster.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
