use crate::ui::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::{ConfirmButton, ConfirmDialogState};

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { target, name } => ConfirmDialogState::Visible {
                target,
                name,
                selected: ConfirmButton::Cancel,
            },
            ConfirmIntent::ToggleButton => match state {
                ConfirmDialogState::Visible {
                    target,
                    name,
                    selected,
                } => ConfirmDialogState::Visible {
                    target,
                    name,
                    selected: selected.other(),
                },
                other => other,
            },
            ConfirmIntent::Close => ConfirmDialogState::Hidden,
        }
    }
}
