//! Bulk action and undo dispatch
//!
//! Fires the batch and returns; nothing on the model changes until the
//! outcome settles (see `settle.rs`). The selection in particular is
//! kept so a failed batch loses nothing.

use chrono::Utc;

use askdeck_core::services::BulkOp;
use askdeck_core::NoticeKind;

use crate::backend::Backend;
use crate::message::BulkMessage;
use crate::model::{App, Notice};

pub fn update(app: &mut App, msg: BulkMessage, backend: &Backend) {
    match msg {
        BulkMessage::HideSelected => dispatch(app, backend, BulkOp::Hide),
        BulkMessage::AnswerSelected => dispatch(app, backend, BulkOp::MarkAnswered),
        BulkMessage::Undo => undo_latest(app, backend),
    }
}

fn dispatch(app: &mut App, backend: &Backend, op: BulkOp) {
    let ids = app.selection.ids();
    if ids.is_empty() {
        app.set_notice(Notice::new("Nothing selected", NoticeKind::Info));
        return;
    }
    backend.spawn_bulk(op, ids);
}

/// Consume and run the most recent undo entry
fn undo_latest(app: &mut App, backend: &Backend) {
    let now = Utc::now();
    let id = match app.undo.latest() {
        Some(entry) => entry.id,
        None => {
            app.set_notice(Notice::new("Nothing to undo", NoticeKind::Info));
            return;
        }
    };

    // take_at discards the entry when the window has lapsed
    match app.undo.take_at(id, now) {
        Some(entry) => {
            backend.spawn_undo(entry.description, entry.command);
        }
        None => {
            app.set_notice(Notice::new("Undo window expired", NoticeKind::Info));
        }
    }
}
