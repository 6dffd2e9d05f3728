//! Inbox list updates
//!
//! Cursor, selection, pinning and criteria. Criteria changes reset to
//! page 1 inside the controller and trigger a background refresh; the
//! selection is reconciled when the page lands.

use askdeck_core::NoticeKind;

use super::refresh;
use crate::backend::Backend;
use crate::message::ListMessage;
use crate::model::{App, Focus, Notice};

pub fn update(app: &mut App, msg: ListMessage, backend: &Backend) {
    match msg {
        // ========== Cursor ==========
        ListMessage::CursorUp => app.list.cursor_up(),
        ListMessage::CursorDown => app.list.cursor_down(),
        ListMessage::CursorFirst => app.list.cursor_first(),
        ListMessage::CursorLast => app.list.cursor_last(),

        // ========== Selection ==========
        ListMessage::ToggleSelect => {
            if let Some(id) = cursor_id(app) {
                app.selection.toggle(&id);
            }
        }
        ListMessage::RangeSelect => {
            if let Some(id) = cursor_id(app) {
                let visible = app.list.visible_ids(&app.pins);
                app.selection.toggle_range(&id, &visible);
            }
        }
        ListMessage::SelectAll => {
            let visible = app.list.visible_ids(&app.pins);
            app.selection.select_all(&visible);
        }
        ListMessage::ClearSelection => {
            app.selection.clear();
        }

        // ========== Pinning ==========
        ListMessage::TogglePin => {
            // The detail item when one is open, the cursor item otherwise
            let id = app
                .panels
                .detail_question_id()
                .map(str::to_string)
                .or_else(|| cursor_id(app));
            if let Some(id) = id {
                let pinned = app.pins.toggle(&id);
                backend.spawn_save_pins(app.pins.as_set().clone());
                let verb = if pinned { "Pinned" } else { "Unpinned" };
                app.set_notice(Notice::new(verb.to_string(), NoticeKind::Info));
            }
        }

        // ========== Criteria ==========
        ListMessage::CycleStatusFilter => {
            if app.list.cycle_status() {
                refresh(app, backend);
            }
        }
        ListMessage::CycleSort => {
            let next = app.list.filter().sort.next();
            if app.list.set_sort(next) {
                refresh(app, backend);
            }
        }
        ListMessage::NextPage => {
            if app.list.next_page() {
                refresh(app, backend);
            }
        }
        ListMessage::PrevPage => {
            if app.list.prev_page() {
                refresh(app, backend);
            }
        }
        ListMessage::Refresh => {
            refresh(app, backend);
        }

        // ========== Search ==========
        ListMessage::BeginSearch => {
            app.search_draft = app.list.filter().search.clone();
            app.focus = Focus::Search;
        }
        ListMessage::SearchInput(ch) => {
            app.search_draft.push(ch);
        }
        ListMessage::SearchBackspace => {
            app.search_draft.pop();
        }
        ListMessage::CommitSearch => {
            app.focus = Focus::Panels;
            let committed = std::mem::take(&mut app.search_draft);
            if app.list.set_search(committed) {
                refresh(app, backend);
            }
        }
        ListMessage::CancelSearch => {
            app.focus = Focus::Panels;
            app.search_draft.clear();
        }
    }
}

/// ID of the question under the cursor, pinned-first order
fn cursor_id(app: &App) -> Option<String> {
    app.list
        .question_at_cursor(&app.pins)
        .map(|q| q.id.clone())
}
