//! Answer draft page

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Focus};
use crate::view::theme::colors;

/// Render the answer draft surface
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let mut lines: Vec<Line> = if app.answer_draft.is_empty() {
        vec![Line::styled(
            " Type your answer, Alt+s to submit",
            Style::default().fg(c.muted),
        )]
    } else {
        app.answer_draft
            .lines()
            .map(|l| Line::styled(format!(" {l}"), Style::default().fg(c.fg)))
            .collect()
    };

    // Trailing newline still gets a line for the cursor to sit on
    if app.answer_draft.ends_with('\n') {
        lines.push(Line::from(" "));
    }
    if app.focus == Focus::AnswerDraft && !app.answer_draft.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.push_span(ratatui::text::Span::styled(
                "_",
                Style::default().fg(c.highlight),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
