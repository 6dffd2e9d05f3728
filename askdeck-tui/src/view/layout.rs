//! Main layout rendering
//!
//! Wide layout: the inbox list and the detail sit side by side, with
//! the answer draft stacked inside the detail column. Narrow layout:
//! only the topmost panel is rendered, full-screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use askdeck_core::services::PanelKind;

use crate::model::{App, Focus};

use super::components;
use super::pages;
use super::theme::colors;

/// Render the whole frame
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    if app.wide_layout {
        render_wide(app, frame, main_layout[1]);
    } else {
        render_narrow(app, frame, main_layout[1]);
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // Topmost: the help overlay
    if app.help_open {
        components::help::render(app, frame);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" AskDeck question inbox")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// Side-by-side panels
fn render_wide(app: &App, frame: &mut Frame, area: Rect) {
    if !app.panels.is_open(PanelKind::Detail) {
        render_panel(app, frame, area, PanelKind::List);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_panel(app, frame, columns[0], PanelKind::List);

    if app.panels.is_open(PanelKind::Answer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);
        render_panel(app, frame, rows[0], PanelKind::Detail);
        render_panel(app, frame, rows[1], PanelKind::Answer);
    } else {
        render_panel(app, frame, columns[1], PanelKind::Detail);
    }
}

/// Topmost panel only, full-screen
fn render_narrow(app: &App, frame: &mut Frame, area: Rect) {
    render_panel(app, frame, area, app.panels.top().payload.kind());
}

fn render_panel(app: &App, frame: &mut Frame, area: Rect, kind: PanelKind) {
    let c = colors();

    let focused = panel_focused(app, kind);
    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", panel_title(app, kind)))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match kind {
        PanelKind::List => pages::inbox::render(app, frame, inner),
        PanelKind::Detail => pages::detail::render(app, frame, inner),
        PanelKind::Answer => pages::answer::render(app, frame, inner),
    }
}

fn panel_focused(app: &App, kind: PanelKind) -> bool {
    match app.focus {
        Focus::AnswerDraft => kind == PanelKind::Answer,
        Focus::Search => kind == PanelKind::List,
        Focus::Panels => app.panels.top().payload.kind() == kind,
    }
}

fn panel_title(app: &App, kind: PanelKind) -> String {
    match kind {
        PanelKind::List => {
            format!(
                "Inbox: {} ({})",
                app.list.filter().status.label(),
                app.list.total_count()
            )
        }
        PanelKind::Detail => "Question".to_string(),
        PanelKind::Answer => "Answer".to_string(),
    }
}
