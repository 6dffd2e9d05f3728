//! Inbox list page

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use askdeck_core::types::{MediaKind, MediaState, Question, QuestionStatus};

use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// Render the inbox list page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search / criteria line
            Constraint::Min(1),    // list
            Constraint::Length(1), // pagination footer
        ])
        .split(area);

    render_criteria(app, frame, rows[0]);
    render_items(app, frame, rows[1]);
    render_footer(app, frame, rows[2]);
}

fn render_criteria(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = if app.focus == Focus::Search {
        Line::from(vec![
            Span::styled(" /", Styles::hint_key()),
            Span::styled(
                format!("{}_", app.search_draft),
                Style::default().fg(c.fg),
            ),
        ])
    } else {
        let mut spans = vec![Span::styled(
            format!(" sort: {}", app.list.filter().sort.label()),
            Style::default().fg(c.muted),
        )];
        if !app.list.filter().search.is_empty() {
            spans.push(Span::styled(
                format!("  search: {}", app.list.filter().search),
                Style::default().fg(c.highlight),
            ));
        }
        if !app.selection.is_empty() {
            spans.push(Span::styled(
                format!("  {} selected", app.selection.selected_count()),
                Style::default().fg(c.pinned),
            ));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_items(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if let Some(error) = app.list.error.as_deref() {
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("  Couldn't load questions: {error}"),
                Style::default().fg(c.error),
            ),
            Line::styled("  Alt+r to retry", Style::default().fg(c.muted)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    if !app.list.loaded_once() {
        let lines = vec![
            Line::from(""),
            Line::styled("  Loading...", Style::default().fg(c.muted)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let visible = app.list.visible(&app.pins);
    if visible.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("  No {} questions", app.list.filter().status.label()),
                Style::default().fg(c.muted),
            ),
            Line::styled(
                "  f cycles the status filter",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let width = area.width as usize;
    let items: Vec<ListItem> = visible
        .into_iter()
        .enumerate()
        .map(|(i, q)| row(app, q, i == app.list.cursor(), width))
        .collect();

    let list = List::new(items).highlight_style(Style::default());
    let mut state = ListState::default();
    state.select(Some(app.list.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row<'a>(app: &App, q: &'a Question, at_cursor: bool, width: usize) -> ListItem<'a> {
    let c = colors();

    let base = if at_cursor {
        Styles::cursor_row()
    } else {
        Style::default().fg(c.fg)
    };
    let accent = |color: Color| {
        if at_cursor {
            base.fg(color)
        } else {
            Style::default().fg(color)
        }
    };

    let select_mark = if app.selection.is_selected(&q.id) {
        "[x]"
    } else {
        "[ ]"
    };
    let pin_mark = if app.pins.is_pinned(&q.id) { "*" } else { " " };
    let status_mark = match q.status {
        QuestionStatus::Pending => Span::styled("o", accent(c.warning)),
        QuestionStatus::Answered => Span::styled("+", accent(c.success)),
        QuestionStatus::Hidden => Span::styled("-", accent(c.muted)),
    };
    let media_mark = match (&q.media_state, q.media.as_ref()) {
        (MediaState::Ready(_), Some(m)) if m.kind == MediaKind::Video => "[vid]",
        (MediaState::Ready(_), Some(_)) => "[aud]",
        (MediaState::Pending, Some(_)) => "[...]",
        // Failed resolution reads as "no media"
        _ => "",
    };

    let sla = q
        .sla_due
        .filter(|_| q.status == QuestionStatus::Pending)
        .map(|due| {
            let left = due - Utc::now();
            if left.num_seconds() < 0 {
                " overdue".to_string()
            } else if left.num_hours() < 1 {
                format!(" due {}m", left.num_minutes().max(1))
            } else {
                format!(" due {}h", left.num_hours())
            }
        })
        .unwrap_or_default();

    let fixed = 12 + q.author.width() + media_mark.len() + sla.len();
    let body = snippet(&q.body, width.saturating_sub(fixed));

    let line = Line::from(vec![
        Span::styled(format!(" {select_mark} "), base),
        Span::styled(pin_mark, accent(c.pinned)),
        Span::raw(" "),
        status_mark,
        Span::styled(format!(" {} ", q.author), base),
        Span::styled(body, base),
        Span::styled(media_mark, accent(c.highlight)),
        Span::styled(sla, accent(c.warning)),
    ]);

    ListItem::new(line)
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let filter = app.list.filter();
    let total = app.list.total_count();
    let pages = total.div_ceil(filter.page_size.max(1) as u64).max(1);
    let refreshing = if app.list.loading { "  refreshing..." } else { "" };
    let footer = Paragraph::new(Line::styled(
        format!(" page {}/{pages}  {total} total{refreshing}", filter.page),
        Style::default().fg(c.muted),
    ));
    frame.render_widget(footer, area);
}

/// First line of the body, truncated to fit
fn snippet(body: &str, max_width: usize) -> String {
    let first_line = body.lines().next().unwrap_or_default();
    if first_line.width() <= max_width {
        return first_line.to_string();
    }
    let mut out = String::new();
    for ch in first_line.chars() {
        if out.width() + 4 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push_str("...");
    out
}
