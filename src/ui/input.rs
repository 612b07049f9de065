use crate::roster::{RecordId, RosterApi};
use crate::ui::app::{App, Focus};
use crate::ui::confirm::{ConfirmButton, ConfirmIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Remote work a key press asks for. The runtime awaits it before reading
/// the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Handled locally.
    None,
    /// Create or update from the current draft.
    Submit,
    /// Delete a record the user confirmed.
    Delete(RecordId),
}

pub fn handle_key<C: RosterApi>(app: &mut App<C>, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if app.confirm_dialog().is_visible() {
        return handle_confirm_key(app, key);
    }

    if is_ctrl_char(key, 's') {
        return InputAction::Submit;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return InputAction::None;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Form(_) => handle_form_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_form_key<C: RosterApi>(app: &mut App<C>, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Enter => return InputAction::Submit,
        KeyCode::Esc => {
            if app.state().session.is_editing() {
                app.cancel_edit();
            }
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(ch);
        }
        _ => {}
    }
    InputAction::None
}

fn handle_table_key<C: RosterApi>(app: &mut App<C>, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('e') => {
            app.edit_selected();
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            app.request_delete_selected();
        }
        KeyCode::Esc => app.focus_next(),
        _ => {}
    }
    InputAction::None
}

fn handle_confirm_key<C: RosterApi>(app: &mut App<C>, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.dispatch_confirm(ConfirmIntent::ToggleButton);
        }
        KeyCode::Esc | KeyCode::Char('n') => app.dispatch_confirm(ConfirmIntent::Close),
        KeyCode::Char('y') => {
            if app.confirm_dialog().selected() == Some(ConfirmButton::Cancel) {
                app.dispatch_confirm(ConfirmIntent::ToggleButton);
            }
            if let Some(id) = app.resolve_confirm() {
                return InputAction::Delete(id);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = app.resolve_confirm() {
                return InputAction::Delete(id);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
