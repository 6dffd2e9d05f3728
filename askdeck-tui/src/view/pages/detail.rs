//! Question detail page

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use askdeck_core::types::{MediaKind, MediaState, Question, QuestionStatus};

use crate::model::App;
use crate::view::theme::colors;

/// Render the detail page for the stack's current detail item
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let question = app
        .panels
        .detail_question_id()
        .and_then(|id| app.list.find(id));
    let Some(q) = question else {
        // The item left the page (filtered out or paged away)
        let lines = vec![
            Line::from(""),
            Line::styled(
                "  This question is no longer on the current page",
                Style::default().fg(c.muted),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", q.author),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                q.created_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(c.muted),
            ),
        ]),
        status_line(q),
        Line::from(""),
    ];
    for body_line in q.body.lines() {
        lines.push(Line::styled(
            format!(" {body_line}"),
            Style::default().fg(c.fg),
        ));
    }
    if let Some(media) = media_line(q) {
        lines.push(Line::from(""));
        lines.push(media);
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn status_line(q: &Question) -> Line<'static> {
    let c = colors();
    let (label, color) = match q.status {
        QuestionStatus::Pending => ("pending", c.warning),
        QuestionStatus::Answered => ("answered", c.success),
        QuestionStatus::Hidden => ("hidden", c.muted),
    };
    let mut spans = vec![Span::styled(
        format!(" {label}"),
        Style::default().fg(color),
    )];
    if sla_applies(q) {
        if let Some(due) = q.sla_due {
            let left = due - Utc::now();
            let text = if left.num_seconds() < 0 {
                "  SLA overdue".to_string()
            } else {
                format!("  SLA due in {}h {}m", left.num_hours(), left.num_minutes() % 60)
            };
            spans.push(Span::styled(text, Style::default().fg(c.warning)));
        }
    }
    Line::from(spans)
}

fn sla_applies(q: &Question) -> bool {
    q.status == QuestionStatus::Pending
}

fn media_line(q: &Question) -> Option<Line<'static>> {
    let c = colors();
    let kind = match q.media.as_ref()?.kind {
        MediaKind::Audio => "audio",
        MediaKind::Video => "video",
    };
    let line = match &q.media_state {
        MediaState::None | MediaState::Failed => return None,
        MediaState::Pending => Line::styled(
            format!(" {kind}: resolving..."),
            Style::default().fg(c.muted),
        ),
        MediaState::Ready(segment) => {
            let secs = segment.duration_ms / 1000;
            Line::from(vec![
                Span::styled(
                    format!(" {kind} ({}:{:02})  ", secs / 60, secs % 60),
                    Style::default().fg(c.highlight),
                ),
                Span::styled(segment.url.clone(), Style::default().fg(c.muted)),
            ])
        }
    };
    Some(line)
}
