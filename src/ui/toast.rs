//! Toast notifications: the terminal counterpart of the web client's
//! top-center toaster.
//!
//! `ToastCenter` is cheap to clone. The controller holds one clone as its
//! [`Notifier`]; the renderer reads another.

use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controller::Notifier;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARNING};

const TOAST_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✔",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✖",
        }
    }

    fn color(self) -> ratatui::style::Color {
        match self {
            ToastLevel::Success => STATUS_OK,
            ToastLevel::Warning => STATUS_WARNING,
            ToastLevel::Error => STATUS_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

#[derive(Clone)]
pub struct ToastCenter {
    entries: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
    max_visible: usize,
}

impl ToastCenter {
    pub fn new(ttl: Duration, max_visible: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
            max_visible: max_visible.max(1),
        }
    }

    /// Current toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop toasts older than the configured lifetime.
    pub fn expire(&self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .lock()
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }

    fn push(&self, level: ToastLevel, message: &str) {
        let mut entries = self.entries.lock();
        entries.push_back(Toast {
            level,
            message: message.to_string(),
            created_at: Instant::now(),
        });
        while entries.len() > self.max_visible {
            entries.pop_front();
        }
    }
}

impl Notifier for ToastCenter {
    fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}

/// Stack toasts at the top center of `area`, newest at the bottom.
pub fn render_toasts(frame: &mut Frame, toasts: &[Toast], area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let mut y = area.y + 1;

    for toast in toasts {
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: 3,
        };
        let color = toast.level.color();
        let line = Line::from(vec![
            Span::styled(format!(" {} ", toast.level.icon()), Style::default().fg(color)),
            Span::styled(toast.message.clone(), Style::default().fg(HEADER_TEXT)),
        ]);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
        y += 3;
    }
}
