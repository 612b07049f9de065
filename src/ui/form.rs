//! Input row: three draft fields and the submit button.

use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::roster::DraftField;
use crate::ui::app::Focus;
use crate::ui::layout::form_columns;
use crate::ui::session::EditSession;
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};

const BUTTON_WIDTH: u16 = 18;

pub fn render_form(frame: &mut Frame, area: Rect, session: &EditSession, focus: Focus) {
    let columns = form_columns(area, BUTTON_WIDTH);

    for (field, rect) in DraftField::ALL.iter().zip(columns.iter()) {
        let focused = focus == Focus::Form(*field);
        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let value = session.draft().field(*field);

        let block = Block::default()
            .title(Span::styled(field.label(), Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        frame.render_widget(
            Paragraph::new(visible_tail(value, rect.width.saturating_sub(2) as usize))
                .style(Style::default().fg(HEADER_TEXT))
                .block(block),
            *rect,
        );

        if focused && rect.width > 2 && rect.height > 2 {
            let inner_width = rect.width - 2;
            let offset = (value.chars().count() as u16).min(inner_width - 1);
            frame.set_cursor_position(Position::new(rect.x + 1 + offset, rect.y + 1));
        }
    }

    let button_color = if session.is_editing() { ACCENT } else { STATUS_OK };
    let button = Paragraph::new(Span::styled(
        session.submit_label(),
        Style::default()
            .fg(button_color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(button_color)),
    );
    frame.render_widget(button, columns[3]);
}

/// The last `width - 1` characters of `value`, leaving room for the cursor.
fn visible_tail(value: &str, width: usize) -> String {
    let keep = width.saturating_sub(1);
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(keep)).collect()
}
