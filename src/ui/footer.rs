use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    focus: Focus,
    editing: bool,
}

impl Footer {
    pub fn new(focus: Focus, editing: bool) -> Self {
        Self { focus, editing }
    }

    fn hints(&self) -> &'static str {
        match (self.focus, self.editing) {
            (Focus::Table, _) => {
                " ↑/↓: Select │ Enter/E: Edit │ D: Delete │ Tab: Form │ Ctrl+Q: Quit"
            }
            (Focus::Form(_), true) => {
                " Tab: Next field │ Enter: Save │ Esc: Cancel edit │ Ctrl+Q: Quit"
            }
            (Focus::Form(_), false) => " Tab: Next field │ Enter: Add │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing characters.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
