//! Shortcuts help overlay

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

const SHORTCUTS: &[(&str, &str)] = &[
    ("j / k, Up / Down", "Move the cursor"),
    ("Enter", "Open the question under the cursor"),
    ("a", "Answer the open question"),
    ("Esc", "Close the topmost panel"),
    ("Alt+Esc", "Back to the inbox"),
    ("Alt+Left / Alt+Right", "History back / forward"),
    ("x / Shift+x", "Select / range-select"),
    ("Ctrl+a / Alt+x", "Select all / clear selection"),
    ("h", "Hide selected"),
    ("m", "Mark selected answered"),
    ("u", "Undo the last bulk action"),
    ("p", "Pin / unpin"),
    ("/", "Search"),
    ("f / o", "Cycle status filter / sort order"),
    ("Left / Right", "Previous / next page"),
    ("c", "Copy a link to the open question"),
    ("Alt+r", "Refresh"),
    ("q", "Quit"),
];

/// Render the help overlay over the whole frame
pub fn render(_app: &App, frame: &mut Frame) {
    let c = colors();
    let height = SHORTCUTS.len() as u16 + 4;
    let area = centered_rect(52, height, frame.area());

    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{key:<22}"), Styles::hint_key()),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }
    lines.push(Line::from(""));

    let block = Block::default()
        .title(" Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
