//! Update layer: state transition logic
//!
//! The update layer consumes messages and is the only place the model
//! is mutated. Async work is fired through the [`Backend`] handle and
//! lands back here as a `BackendMessage` on a later tick.

mod bulk;
mod list;
mod panels;
mod settle;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::{App, Notice};

/// Apply one message to the model
pub fn update(app: &mut App, msg: AppMessage, backend: &Backend) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg, backend);
        }

        AppMessage::Panel(panel_msg) => {
            panels::update(app, panel_msg, backend);
        }

        AppMessage::Bulk(bulk_msg) => {
            bulk::update(app, bulk_msg, backend);
        }

        AppMessage::Backend(backend_msg) => {
            settle::update(app, backend_msg, backend);
        }

        AppMessage::ToggleHelp => {
            app.help_open = !app.help_open;
        }

        AppMessage::Notice(message, kind) => {
            app.set_notice(Notice::new(message, kind));
        }

        AppMessage::Resize(width, _height) => {
            app.set_width(width);
        }

        AppMessage::Noop => {}
    }
}

/// Kick off a background page fetch for the current criteria
pub(crate) fn refresh(app: &mut App, backend: &Backend) {
    let (generation, filter) = app.list.begin_refresh();
    backend.spawn_refresh(generation, filter);
}

/// Replay an address-bar state onto the panel stack
///
/// The initial deep link and every back/forward navigation go through
/// here. Before the first page has arrived the state is parked on the
/// model and replayed by the refresh that loads it.
pub fn replay_link(app: &mut App, state: askdeck_core::types::UrlState) {
    if !app.list.loaded_once() {
        app.pending_link = Some(state);
        return;
    }
    let list = &app.list;
    app.url
        .replay(&state, &mut app.panels, |id| list.contains(id));
    if app
        .panels
        .is_open(askdeck_core::services::PanelKind::Answer)
    {
        app.answer_draft.clear();
        app.focus = crate::model::Focus::AnswerDraft;
    } else {
        app.focus = crate::model::Focus::Panels;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use tokio::sync::mpsc;

    use askdeck_core::services::{BulkOp, BulkOutcome, PanelKind};
    use askdeck_core::test_utils::{MockMediaResolver, MockQuestionService};
    use askdeck_core::types::{
        PaginatedResponse, Question, QuestionStatus, UrlState,
    };
    use askdeck_core::{CoreError, QuestionService, ServiceContext};

    use super::*;
    use crate::backend::HistoryLocation;
    use crate::message::{BackendMessage, BulkMessage, ListMessage, PanelMessage};
    use crate::model::Focus;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            author: "asker".to_string(),
            body: format!("question {id}"),
            status: QuestionStatus::Pending,
            sla_due: None,
            media: None,
            media_state: Default::default(),
            created_at: Utc::now(),
        }
    }

    fn page(ids: &[&str]) -> PaginatedResponse<Question> {
        let items: Vec<Question> = ids.iter().map(|id| question(id)).collect();
        let total = items.len() as u64;
        PaginatedResponse::new(items, 1, 25, total)
    }

    fn fixture() -> (
        App,
        Backend,
        Arc<MockQuestionService>,
        mpsc::UnboundedReceiver<AppMessage>,
    ) {
        fixture_at(Arc::new(HistoryLocation::new()))
    }

    /// Backend over in-process mocks, so spawned tasks settle for real
    fn fixture_at(
        location: Arc<HistoryLocation>,
    ) -> (
        App,
        Backend,
        Arc<MockQuestionService>,
        mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let svc = Arc::new(MockQuestionService::new());
        let ctx = ServiceContext::new(
            Arc::clone(&svc) as Arc<dyn QuestionService>,
            Arc::new(MockMediaResolver::new()),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Backend::with_context(ctx, Arc::clone(&location), tx);
        let app = App::new(location, 120);
        (app, backend, svc, rx)
    }

    /// Load a page directly, as if a refresh had settled
    fn load(app: &mut App, backend: &Backend, ids: &[&str]) {
        let (generation, _) = app.list.begin_refresh();
        update(
            app,
            AppMessage::Backend(BackendMessage::QuestionsLoaded {
                generation,
                result: Ok(page(ids)),
            }),
            backend,
        );
    }

    #[tokio::test]
    async fn settled_batch_clears_selection_and_arms_undo() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1", "q2", "q3"]);
        app.selection.toggle("q1");
        app.selection.toggle("q2");

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::BulkSettled(BulkOutcome {
                op: BulkOp::Hide,
                succeeded: vec!["q1".to_string(), "q2".to_string()],
                failed: vec![],
            })),
            &backend,
        );

        assert!(app.selection.is_empty());
        let entry = app.undo.latest().unwrap();
        assert_eq!(entry.description, "Hid 2 questions");
        assert_eq!(entry.command.inverse, BulkOp::Unhide);
        assert_eq!(entry.command.target_ids, vec!["q1", "q2"]);
    }

    #[tokio::test]
    async fn partial_batch_keeps_selection_and_skips_undo() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1", "q2"]);
        app.selection.toggle("q1");
        app.selection.toggle("q2");

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::BulkSettled(BulkOutcome {
                op: BulkOp::Hide,
                succeeded: vec!["q1".to_string()],
                failed: vec![("q2".to_string(), CoreError::NetworkError("down".into()))],
            })),
            &backend,
        );

        assert_eq!(app.selection.selected_count(), 2);
        assert!(app.undo.is_empty());
        assert!(app.notice.is_some());
    }

    #[tokio::test]
    async fn failed_batch_changes_nothing_but_the_notice() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1"]);
        app.selection.toggle("q1");
        let loading_before = app.list.filter().clone();

        update(
            &mut app,
            AppMessage::Backend(BackendMessage::BulkSettled(BulkOutcome {
                op: BulkOp::MarkAnswered,
                succeeded: vec![],
                failed: vec![("q1".to_string(), CoreError::NetworkError("down".into()))],
            })),
            &backend,
        );

        assert_eq!(app.selection.selected_count(), 1);
        assert!(app.undo.is_empty());
        assert_eq!(app.list.filter(), &loading_before);
    }

    #[tokio::test]
    async fn deep_link_is_replayed_once_the_page_arrives() {
        let location = Arc::new(HistoryLocation::with_initial(
            UrlState {
                detail_id: Some("q2".to_string()),
                answering: true,
            }
            .to_params(),
        ));
        let (mut app, backend, _svc, _rx) = fixture_at(location);
        assert!(app.pending_link.is_some());

        load(&mut app, &backend, &["q1", "q2"]);

        assert!(app.pending_link.is_none());
        assert_eq!(app.panels.detail_question_id(), Some("q2"));
        assert!(app.panels.is_open(PanelKind::Answer));
        assert_eq!(app.focus, Focus::AnswerDraft);
    }

    #[tokio::test]
    async fn unresolvable_deep_link_falls_back_to_the_list() {
        let location = Arc::new(HistoryLocation::with_initial(
            UrlState {
                detail_id: Some("ghost".to_string()),
                answering: false,
            }
            .to_params(),
        ));
        let (mut app, backend, _svc, _rx) = fixture_at(location);

        load(&mut app, &backend, &["q1"]);

        assert!(!app.panels.is_open(PanelKind::Detail));
        assert!(app.pending_link.is_none());
    }

    #[tokio::test]
    async fn criteria_change_reconciles_selection_when_the_page_lands() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1", "q2"]);
        app.selection.toggle("q1");
        app.selection.toggle("q2");

        update(
            &mut app,
            AppMessage::List(ListMessage::CycleStatusFilter),
            &backend,
        );
        // The new bucket no longer contains q2
        let gen = app.list.begin_refresh().0;
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::QuestionsLoaded {
                generation: gen,
                result: Ok(page(&["q1"])),
            }),
            &backend,
        );

        assert!(app.selection.is_selected("q1"));
        assert!(!app.selection.is_selected("q2"));
    }

    #[tokio::test]
    async fn submitting_an_empty_draft_is_rejected() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1"]);
        update(&mut app, AppMessage::Panel(PanelMessage::OpenDetail), &backend);
        update(&mut app, AppMessage::Panel(PanelMessage::OpenAnswer), &backend);

        app.answer_draft = "   ".to_string();
        update(
            &mut app,
            AppMessage::Panel(PanelMessage::SubmitAnswer),
            &backend,
        );

        assert!(app.panels.is_open(PanelKind::Answer));
        assert!(app.notice.is_some());
    }

    #[tokio::test]
    async fn submitting_a_draft_closes_the_answer_panel() {
        let (mut app, backend, _svc, _rx) = fixture();
        load(&mut app, &backend, &["q1"]);
        update(&mut app, AppMessage::Panel(PanelMessage::OpenDetail), &backend);
        update(&mut app, AppMessage::Panel(PanelMessage::OpenAnswer), &backend);

        app.answer_draft = "thanks for asking".to_string();
        update(
            &mut app,
            AppMessage::Panel(PanelMessage::SubmitAnswer),
            &backend,
        );

        assert!(!app.panels.is_open(PanelKind::Answer));
        assert!(app.panels.is_open(PanelKind::Detail));
        assert!(app.answer_draft.is_empty());
        assert_eq!(app.focus, Focus::Panels);
    }

    #[tokio::test]
    async fn undo_with_nothing_armed_shows_a_notice() {
        let (mut app, backend, _svc, _rx) = fixture();
        update(&mut app, AppMessage::Bulk(BulkMessage::Undo), &backend);
        assert_eq!(app.notice.as_ref().unwrap().message, "Nothing to undo");
    }

    #[tokio::test]
    async fn undo_within_the_window_restores_the_batch() {
        let (mut app, backend, svc, mut rx) = fixture();
        for id in ["q1", "q2"] {
            let mut q = question(id);
            q.status = QuestionStatus::Hidden;
            svc.insert(q);
        }
        load(&mut app, &backend, &["q1", "q2"]);

        // The forward hide has settled; this arms the undo entry
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::BulkSettled(BulkOutcome {
                op: BulkOp::Hide,
                succeeded: vec!["q1".to_string(), "q2".to_string()],
                failed: vec![],
            })),
            &backend,
        );
        assert!(app.undo.latest().is_some());

        update(&mut app, AppMessage::Bulk(BulkMessage::Undo), &backend);
        assert!(app.undo.is_empty());

        // The inverse lands through the channel like any settled task
        loop {
            let msg = rx.recv().await.unwrap();
            let settled = matches!(
                msg,
                AppMessage::Backend(BackendMessage::UndoSettled { .. })
            );
            update(&mut app, msg, &backend);
            if settled {
                break;
            }
        }

        assert_eq!(
            app.notice.as_ref().unwrap().message,
            "Undid: Hid 2 questions"
        );
        assert!(app.list.loading);
        assert_eq!(svc.status_of("q1").await, Some(QuestionStatus::Pending));
        assert_eq!(svc.status_of("q2").await, Some(QuestionStatus::Pending));
    }

    #[tokio::test]
    async fn failed_undo_still_refreshes_the_page() {
        let (mut app, backend, _svc, _rx) = fixture();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::UndoSettled {
                description: "Hid 1 question".to_string(),
                outcome: BulkOutcome {
                    op: BulkOp::Unhide,
                    succeeded: vec![],
                    failed: vec![(
                        "q1".to_string(),
                        CoreError::NetworkError("down".into()),
                    )],
                },
            }),
            &backend,
        );
        assert_eq!(app.notice.as_ref().unwrap().message, "Undo failed");
        assert!(app.list.loading);
    }
}
