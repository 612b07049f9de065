use crate::ui::session::EditSession;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARNING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    session: &'a EditSession,
    student_count: usize,
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(session: &'a EditSession, student_count: usize, endpoint: &'a str) -> Self {
        Self {
            session,
            student_count,
            endpoint,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mode = match self.session.target() {
            Some(id) => Span::styled(
                format!("Editing #{}", id),
                Style::default().fg(STATUS_WARNING),
            ),
            None => Span::styled("New student", text_style),
        };

        let line = Line::from(vec![
            Span::styled(
                "  Student Registry",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            mode,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} students", self.student_count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint.to_string(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
