//! Shortcut configuration
//!
//! Defines the shortcut bindings in one place (future user
//! customization plugs in here).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single shortcut binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default shortcut configuration
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CLOSE_ALL: KeyBinding = KeyBinding::alt(KeyCode::Esc);

    // History
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // Panels
    pub const OPEN_ANSWER: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const COPY_LINK: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const SUBMIT_ANSWER: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));

    // List
    pub const PIN: KeyBinding = KeyBinding::key(KeyCode::Char('p'));
    pub const SELECT: KeyBinding = KeyBinding::key(KeyCode::Char('x'));
    pub const SELECT_ALL: KeyBinding = KeyBinding::ctrl(KeyCode::Char('a'));
    pub const CLEAR_SELECTION: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const SORT: KeyBinding = KeyBinding::key(KeyCode::Char('o'));

    // Bulk
    pub const HIDE: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const MARK_ANSWERED: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const UNDO: KeyBinding = KeyBinding::key(KeyCode::Char('u'));
}
