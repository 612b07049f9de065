//! Roster table.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::roster::RosterStore;
use crate::ui::app::Focus;
use crate::ui::session::EditSession;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARNING,
};

pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    roster: &RosterStore,
    session: &EditSession,
    selection: usize,
    focus: Focus,
) {
    let border = if focus == Focus::Table {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .title(Span::styled(" Students ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if roster.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No students registered.",
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Id", "Name", "Course", "Registration"].map(|title| {
        Cell::from(title).style(
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1);

    let rows = roster.records().iter().map(|record| {
        let style = if session.targets(&record.id) {
            Style::default().fg(STATUS_WARNING)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Row::new(vec![
            Cell::from(record.id.to_string()),
            Cell::from(record.name.clone()),
            Cell::from(record.course.clone()),
            Cell::from(record.registration_number.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];

    let highlight = if focus == Focus::Table {
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(selection));
    frame.render_stateful_widget(table, area, &mut state);
}
