//! Panel stack updates
//!
//! Every structural change goes through the stack and is mirrored to
//! the address bar with `url.sync` in the same transition, so the two
//! can never be observed out of step.

use askdeck_core::services::{BulkOp, PanelKind, PanelPayload};
use askdeck_core::NoticeKind;

use crate::backend::Backend;
use crate::message::PanelMessage;
use crate::model::{App, Focus, Notice};

pub fn update(app: &mut App, msg: PanelMessage, backend: &Backend) {
    match msg {
        PanelMessage::OpenDetail => {
            let id = app
                .list
                .question_at_cursor(&app.pins)
                .map(|q| q.id.clone());
            if let Some(question_id) = id {
                if app.panels.open(PanelPayload::Detail {
                    question_id: question_id.clone(),
                }) {
                    app.url.sync(&app.panels);
                    backend.spawn_freshen(question_id);
                }
            }
        }

        PanelMessage::OpenAnswer => {
            // The stack rejects an answer without a matching detail;
            // gate here so focus only moves on an actual open
            let id = app.panels.detail_question_id().map(str::to_string);
            if let Some(question_id) = id {
                if app.panels.open(PanelPayload::Answer { question_id }) {
                    app.answer_draft.clear();
                    app.focus = Focus::AnswerDraft;
                    app.url.sync(&app.panels);
                }
            }
        }

        PanelMessage::CloseTop => {
            if app.panels.close_top() {
                app.focus = Focus::Panels;
                app.url.sync(&app.panels);
            }
        }

        PanelMessage::CloseAll => {
            if app.panels.close_all() {
                app.focus = Focus::Panels;
                app.url.sync(&app.panels);
            }
        }

        PanelMessage::CopyDeepLink => {
            copy_deep_link(app, backend);
        }

        PanelMessage::HistoryBack => {
            // The replayed state arrives via take_navigation next tick
            backend.location.back();
        }

        PanelMessage::HistoryForward => {
            backend.location.forward();
        }

        // ========== Answer draft ==========
        PanelMessage::AnswerInput(ch) => {
            if app.panels.is_open(PanelKind::Answer) {
                app.answer_draft.push(ch);
            }
        }

        PanelMessage::AnswerBackspace => {
            app.answer_draft.pop();
        }

        PanelMessage::SubmitAnswer => {
            submit_answer(app, backend);
        }
    }
}

/// Copy `askdeck://inbox?...` for the current detail item
fn copy_deep_link(app: &mut App, backend: &Backend) {
    let state = askdeck_core::services::stack_to_url(&app.panels);
    if state.is_root() {
        return;
    }
    let link = format!("askdeck://inbox?{}", state.to_params().encode());
    match backend.copy_text(&link) {
        Ok(()) => {
            app.set_notice(Notice::new("Link copied", NoticeKind::Success));
        }
        Err(e) => {
            log::warn!("clipboard copy failed: {e}");
            app.set_notice(Notice::new("Copy failed", NoticeKind::Error));
        }
    }
}

/// Mark the answer panel's question answered and close the draft
fn submit_answer(app: &mut App, backend: &Backend) {
    let id = match app.panels.payload(PanelKind::Answer) {
        Some(payload) => match payload.question_id() {
            Some(id) => id.to_string(),
            None => return,
        },
        None => return,
    };

    if app.answer_draft.trim().is_empty() {
        app.set_notice(Notice::new("Answer is empty", NoticeKind::Warning));
        return;
    }

    backend.spawn_bulk(BulkOp::MarkAnswered, vec![id]);
    app.answer_draft.clear();
    app.panels.close(PanelKind::Answer);
    app.focus = Focus::Panels;
    app.url.sync(&app.panels);
}
