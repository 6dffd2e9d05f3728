//! Landing async completions on the model
//!
//! Counterpart of the spawn helpers in the backend layer. Each arm
//! decides what a settled task means for the selection, the undo
//! stack and the notice line.

use askdeck_core::services::{BulkOutcome, UndoCommand};
use askdeck_core::NoticeKind;

use super::refresh;
use crate::backend::Backend;
use crate::message::BackendMessage;
use crate::model::{App, Notice};

pub fn update(app: &mut App, msg: BackendMessage, backend: &Backend) {
    match msg {
        BackendMessage::QuestionsLoaded { generation, result } => {
            if !app.list.apply_loaded(generation, result) {
                return;
            }
            // Selected IDs no longer on the page are dropped
            let visible = app.list.visible_ids(&app.pins);
            app.selection.reconcile(&visible);
            replay_pending_link(app);
        }

        BackendMessage::QuestionFreshened(result) => match result {
            Ok(question) => {
                app.list.merge_question(question);
            }
            // Stale detail is tolerable; the next refresh catches up
            Err(e) => log::debug!("freshening failed: {e}"),
        },

        BackendMessage::BulkSettled(outcome) => {
            settle_bulk(app, backend, outcome);
        }

        BackendMessage::UndoSettled {
            description,
            outcome,
        } => {
            if outcome.full_success() {
                app.set_notice(Notice::new(
                    format!("Undid: {description}"),
                    NoticeKind::Success,
                ));
            } else {
                app.set_notice(Notice::new("Undo failed", NoticeKind::Error));
            }
            // Undo is best-effort; whatever actually happened, the
            // page is refetched so the view shows server truth.
            refresh(app, backend);
        }

        BackendMessage::PinsLoaded(result) => match result {
            Ok(pins) => app.pins.set_all(pins),
            Err(e) => {
                log::warn!("loading pins failed: {e}");
                app.set_notice(Notice::new("Couldn't load pins", NoticeKind::Warning));
            }
        },
    }
}

/// A deferred deep link is replayed once the first page is in
fn replay_pending_link(app: &mut App) {
    if let Some(state) = app.pending_link.take() {
        super::replay_link(app, state);
    }
}

fn settle_bulk(app: &mut App, backend: &Backend, outcome: BulkOutcome) {
    let op = outcome.op;
    let total = outcome.succeeded.len() + outcome.failed.len();

    if outcome.full_success() {
        let description = op.describe(outcome.succeeded.len());
        app.undo.push(
            description.clone(),
            UndoCommand {
                target_ids: outcome.succeeded,
                inverse: op.inverse(),
            },
        );
        app.selection.clear();
        app.set_notice(Notice::new(
            format!("{description} (u to undo)"),
            NoticeKind::Success,
        ));
        refresh(app, backend);
    } else if outcome.partial() {
        // No undo entry: a partial batch has no clean inverse.
        // The selection is kept so the failures can be retried.
        app.set_notice(Notice::new(
            format!(
                "{} {} of {total}, {} failed",
                op.verb(),
                outcome.succeeded.len(),
                outcome.failed.len()
            ),
            NoticeKind::Warning,
        ));
        refresh(app, backend);
    } else {
        let cause = outcome
            .failed
            .first()
            .map(|(_, e)| e.to_string())
            .unwrap_or_default();
        app.set_notice(Notice::new(
            format!("Action failed: {cause}"),
            NoticeKind::Error,
        ));
        // Nothing changed server-side, so no refresh either
    }
}
