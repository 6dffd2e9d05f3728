//! Application main message enum

use askdeck_core::NoticeKind;

use super::{BackendMessage, BulkMessage, ListMessage, PanelMessage};

/// Application main message
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Inbox list messages (cursor, selection, criteria)
    List(ListMessage),

    /// Panel stack messages
    Panel(PanelMessage),

    /// Bulk action and undo messages
    Bulk(BulkMessage),

    /// Async completion from a spawned backend task
    Backend(BackendMessage),

    /// Toggle the shortcuts help overlay
    ToggleHelp,

    /// Show a status notice
    Notice(String, NoticeKind),

    /// Terminal was resized to (width, height)
    Resize(u16, u16),

    /// No operation (unhandled events)
    Noop,
}
