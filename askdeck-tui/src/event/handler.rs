//! Keyboard router
//!
//! The single place key events turn into messages. Routing depends on
//! which panel is topmost and whether a text input owns the keyboard:
//! while the search box or the answer draft is focused every shortcut
//! letter feeds the field instead, with only `Esc` keeping its
//! global-close behavior. On narrow surfaces shortcuts are disabled
//! wholesale.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use askdeck_core::services::PanelKind;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, BulkMessage, ListMessage, PanelMessage};
use crate::model::{App, Focus};

/// Poll for the next terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only: Release/Repeat would double-fire on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C quits from anywhere, including narrow surfaces
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Narrow surface: panels are modal sheets, shortcuts are off.
    // Esc keeps dismissing the topmost sheet.
    if !app.keyboard_enabled() && !app.focus.in_text_input() {
        if DefaultKeymap::BACK.matches(&key) {
            return AppMessage::Panel(PanelMessage::CloseTop);
        }
        return AppMessage::Noop;
    }

    // The help overlay swallows everything except its close keys
    if app.help_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppMessage::ToggleHelp,
            _ => AppMessage::Noop,
        };
    }

    // Text inputs swallow shortcut letters
    if app.focus.in_text_input() {
        return handle_text_input_keys(key, app);
    }

    handle_shortcut_keys(key, app)
}

/// Keys while the search box or answer draft is focused
fn handle_text_input_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.focus {
        Focus::Search => match key.code {
            KeyCode::Esc => AppMessage::List(ListMessage::CancelSearch),
            KeyCode::Enter => AppMessage::List(ListMessage::CommitSearch),
            KeyCode::Backspace => AppMessage::List(ListMessage::SearchBackspace),
            KeyCode::Char(ch) if is_text(&key) => AppMessage::List(ListMessage::SearchInput(ch)),
            _ => AppMessage::Noop,
        },
        Focus::AnswerDraft => {
            if DefaultKeymap::SUBMIT_ANSWER.matches(&key) {
                return AppMessage::Panel(PanelMessage::SubmitAnswer);
            }
            match key.code {
                // Esc keeps its global-close behavior: the answer
                // panel closes, the detail stays
                KeyCode::Esc => AppMessage::Panel(PanelMessage::CloseTop),
                KeyCode::Enter => AppMessage::Panel(PanelMessage::AnswerInput('\n')),
                KeyCode::Backspace => AppMessage::Panel(PanelMessage::AnswerBackspace),
                KeyCode::Char(ch) if is_text(&key) => {
                    AppMessage::Panel(PanelMessage::AnswerInput(ch))
                }
                _ => AppMessage::Noop,
            }
        }
        Focus::Panels => AppMessage::Noop,
    }
}

/// Context-sensitive shortcuts, routed by the topmost panel
fn handle_shortcut_keys(key: KeyEvent, app: &App) -> AppMessage {
    let detail_open = app.panels.is_open(PanelKind::Detail);

    // Global, any panel
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // Some terminals report '?' with the shift modifier set
    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ToggleHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::List(ListMessage::Refresh);
    }
    if DefaultKeymap::CLOSE_ALL.matches(&key) {
        return AppMessage::Panel(PanelMessage::CloseAll);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Panel(PanelMessage::CloseTop);
    }
    if DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::Panel(PanelMessage::HistoryBack);
    }
    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::Panel(PanelMessage::HistoryForward);
    }
    if DefaultKeymap::PIN.matches(&key) {
        return AppMessage::List(ListMessage::TogglePin);
    }
    if DefaultKeymap::UNDO.matches(&key) {
        return AppMessage::Bulk(BulkMessage::Undo);
    }

    // Detail context
    if detail_open {
        if DefaultKeymap::OPEN_ANSWER.matches(&key) {
            return AppMessage::Panel(PanelMessage::OpenAnswer);
        }
        if DefaultKeymap::COPY_LINK.matches(&key) {
            return AppMessage::Panel(PanelMessage::CopyDeepLink);
        }
        return AppMessage::Noop;
    }

    // List context
    if DefaultKeymap::SELECT.matches(&key) {
        return AppMessage::List(ListMessage::ToggleSelect);
    }
    if DefaultKeymap::SELECT_ALL.matches(&key) {
        return AppMessage::List(ListMessage::SelectAll);
    }
    if DefaultKeymap::CLEAR_SELECTION.matches(&key) {
        return AppMessage::List(ListMessage::ClearSelection);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::List(ListMessage::BeginSearch);
    }
    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::List(ListMessage::CycleStatusFilter);
    }
    if DefaultKeymap::SORT.matches(&key) {
        return AppMessage::List(ListMessage::CycleSort);
    }
    if DefaultKeymap::HIDE.matches(&key) {
        return AppMessage::Bulk(BulkMessage::HideSelected);
    }
    if DefaultKeymap::MARK_ANSWERED.matches(&key) {
        return AppMessage::Bulk(BulkMessage::AnswerSelected);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::CursorDown),
        KeyCode::Home => AppMessage::List(ListMessage::CursorFirst),
        KeyCode::End => AppMessage::List(ListMessage::CursorLast),
        KeyCode::Left => AppMessage::List(ListMessage::PrevPage),
        KeyCode::Right => AppMessage::List(ListMessage::NextPage),
        KeyCode::Enter => AppMessage::Panel(PanelMessage::OpenDetail),
        // Shift+x: range-select (reported as an uppercase char)
        KeyCode::Char('X') => AppMessage::List(ListMessage::RangeSelect),
        _ => AppMessage::Noop,
    }
}

/// Plain or shifted character input
fn is_text(key: &KeyEvent) -> bool {
    use crossterm::event::KeyModifiers;
    key.modifiers
        .difference(KeyModifiers::SHIFT)
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HistoryLocation;
    use askdeck_core::services::PanelPayload;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(HistoryLocation::new()), 120)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_detail(app: &mut App, id: &str) {
        app.panels.open(PanelPayload::Detail {
            question_id: id.to_string(),
        });
    }

    #[test]
    fn j_and_k_move_the_cursor_when_no_detail_is_open() {
        let app = app();
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('j')), &app),
            AppMessage::List(ListMessage::CursorDown)
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('k')), &app),
            AppMessage::List(ListMessage::CursorUp)
        ));
    }

    #[test]
    fn answer_opens_from_detail_and_esc_peels_one_layer() {
        // Open detail for X, press `a`: answer opens for X
        let mut app = app();
        open_detail(&mut app, "x");
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('a')), &app),
            AppMessage::Panel(PanelMessage::OpenAnswer)
        ));

        // With the answer panel focused, Esc closes only the answer
        app.panels.open(PanelPayload::Answer {
            question_id: "x".to_string(),
        });
        app.focus = Focus::AnswerDraft;
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc), &app),
            AppMessage::Panel(PanelMessage::CloseTop)
        ));
    }

    #[test]
    fn text_field_swallows_navigation_keys() {
        // j j j Enter into a focused search box: no navigation
        let mut app = app();
        app.focus = Focus::Search;
        for _ in 0..3 {
            let msg = handle_key_event(press(KeyCode::Char('j')), &app);
            assert!(
                matches!(msg, AppMessage::List(ListMessage::SearchInput('j'))),
                "j must feed the field, not move the cursor"
            );
        }
        let msg = handle_key_event(press(KeyCode::Enter), &app);
        assert!(
            !matches!(msg, AppMessage::Panel(PanelMessage::OpenDetail)),
            "Enter must not open a panel from a text field"
        );
    }

    #[test]
    fn shortcut_letters_are_inert_in_text_fields_except_esc() {
        let mut app = app();
        app.focus = Focus::Search;
        // 'h' would bulk-hide from the list context
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('h')), &app),
            AppMessage::List(ListMessage::SearchInput('h'))
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc), &app),
            AppMessage::List(ListMessage::CancelSearch)
        ));
    }

    #[test]
    fn narrow_surfaces_disable_shortcuts() {
        let app = App::new(Arc::new(HistoryLocation::new()), 60);
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('j')), &app),
            AppMessage::Noop
        ));
        // Esc still dismisses the modal sheet, Ctrl+C still quits
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc), &app),
            AppMessage::Panel(PanelMessage::CloseTop)
        ));
        assert!(matches!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &app
            ),
            AppMessage::Quit
        ));
    }

    #[test]
    fn help_overlay_takes_esc_before_the_stack() {
        let mut app = app();
        open_detail(&mut app, "x");
        app.help_open = true;
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc), &app),
            AppMessage::ToggleHelp
        ));
    }

    #[test]
    fn copy_link_requires_an_open_detail() {
        let mut app = app();
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('c')), &app),
            AppMessage::Noop
        ));
        open_detail(&mut app, "x");
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('c')), &app),
            AppMessage::Panel(PanelMessage::CopyDeepLink)
        ));
    }

    #[test]
    fn alt_esc_collapses_the_whole_stack() {
        let mut app = app();
        open_detail(&mut app, "x");
        assert!(matches!(
            handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::ALT), &app),
            AppMessage::Panel(PanelMessage::CloseAll)
        ));
    }
}
