//! Bottom status bar
//!
//! Shortcut hints for the current context, the live notice, and the
//! undo countdown while an entry is still runnable.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use askdeck_core::services::PanelKind;
use askdeck_core::NoticeKind;

use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let now = Utc::now();

    if let Some(entry) = app.undo.latest() {
        if entry.runnable_at(now) {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled("u", Styles::hint_key()));
            spans.push(Span::styled(
                format!(" undo ({}s)", entry.remaining_at(now).num_seconds()),
                Styles::hint_desc(),
            ));
        }
    }

    if let Some(ref notice) = app.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(notice_color(notice.kind)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn notice_color(kind: NoticeKind) -> Color {
    let c = colors();
    match kind {
        NoticeKind::Info => c.selected_fg,
        NoticeKind::Success => c.success,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => c.error,
    }
}

/// Shortcut hints for the current context
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if !app.wide_layout {
        hints.push(("Esc", "Back"));
        hints.push(("Ctrl+c", "Quit"));
        return hints;
    }

    match app.focus {
        Focus::Search => {
            hints.push(("Enter", "Search"));
            hints.push(("Esc", "Cancel"));
        }
        Focus::AnswerDraft => {
            hints.push(("Alt+s", "Submit"));
            hints.push(("Esc", "Close"));
        }
        Focus::Panels => {
            if app.panels.is_open(PanelKind::Detail) {
                hints.push(("a", "Answer"));
                hints.push(("c", "Copy link"));
                hints.push(("p", "Pin"));
                hints.push(("Esc", "Back"));
            } else {
                hints.push(("j/k", "Move"));
                hints.push(("x", "Select"));
                hints.push(("h", "Hide"));
                hints.push(("m", "Answered"));
                hints.push(("/", "Search"));
                hints.push(("f", "Filter"));
            }
            hints.push(("?", "Help"));
        }
    }

    hints.push(("q", "Quit"));
    hints
}
