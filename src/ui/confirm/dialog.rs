//! Rendering for the delete confirmation overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::{ConfirmButton, ConfirmDialogState};

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 9;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible { name, selected, .. } = state else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Are you sure? ", Style::default().fg(STATUS_ERROR)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("Student \"{}\" will be permanently deleted.", name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        render_buttons(*selected),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_buttons(selected: ConfirmButton) -> Line<'static> {
    let style_for = |button: ConfirmButton| {
        if button == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };

    Line::from(vec![
        Span::styled(" Cancel ", style_for(ConfirmButton::Cancel)),
        Span::raw("    "),
        Span::styled(" Confirm deletion ", style_for(ConfirmButton::Confirm)),
    ])
}
