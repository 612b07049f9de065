use crate::roster::RecordId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    #[default]
    Cancel,
    Confirm,
}

impl ConfirmButton {
    pub fn other(self) -> Self {
        match self {
            ConfirmButton::Cancel => ConfirmButton::Confirm,
            ConfirmButton::Confirm => ConfirmButton::Cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        target: RecordId,
        /// Student name shown in the warning text.
        name: String,
        selected: ConfirmButton,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn selected(&self) -> Option<ConfirmButton> {
        match self {
            Self::Visible { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }

    pub fn target(&self) -> Option<&RecordId> {
        match self {
            Self::Visible { target, .. } => Some(target),
            Self::Hidden => None,
        }
    }
}
