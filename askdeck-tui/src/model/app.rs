//! Application main state

use std::sync::Arc;

use askdeck_core::services::{
    PanelStack, PinSet, QuestionListController, SelectionSet, UndoStack, UrlSynchronizer,
};
use askdeck_core::types::UrlState;
use askdeck_core::LocationPort;
use chrono::{DateTime, Utc};

use super::{Focus, Notice, WIDE_LAYOUT_MIN_COLS};

/// Application main state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Current keyboard focus
    pub focus: Focus,

    /// Layered view stack (list / detail / answer)
    pub panels: PanelStack,

    /// Address-bar mirror of the panel stack
    pub url: UrlSynchronizer,

    /// Deep link waiting for the first page to arrive
    pub pending_link: Option<UrlState>,

    // === Inbox state ===
    /// Filter criteria plus the cached result page
    pub list: QuestionListController,
    /// Multi-select over the visible list
    pub selection: SelectionSet,
    /// Pinned-first ordering override
    pub pins: PinSet,
    /// Time-boxed undo entries
    pub undo: UndoStack,

    // === Text surfaces ===
    /// Search box edit buffer (committed on Enter)
    pub search_draft: String,
    /// Answer draft text
    pub answer_draft: String,

    // === Presentation ===
    /// Shortcuts help overlay
    pub help_open: bool,
    /// Current status notice
    pub notice: Option<Notice>,
    /// Width gate: side-by-side panels and shortcuts enabled
    pub wide_layout: bool,
}

impl App {
    /// Create the initial state over a location port
    pub fn new(location: Arc<dyn LocationPort>, width: u16) -> Self {
        let url = UrlSynchronizer::new(location);
        // A deep link in the initial location is replayed after the
        // first page lands
        let initial = url.initial_state();
        let pending_link = (!initial.is_root()).then_some(initial);

        Self {
            should_quit: false,
            focus: Focus::default(),
            panels: PanelStack::new(),
            url,
            pending_link,
            list: QuestionListController::new(),
            selection: SelectionSet::new(),
            pins: PinSet::new(),
            undo: UndoStack::new(),
            search_draft: String::new(),
            answer_draft: String::new(),
            help_open: false,
            notice: None,
            wide_layout: width >= WIDE_LAYOUT_MIN_COLS,
        }
    }

    /// Whether keyboard shortcuts are active (disabled on narrow
    /// surfaces; text inputs handle their own keys)
    pub fn keyboard_enabled(&self) -> bool {
        self.wide_layout
    }

    /// Apply a terminal resize
    pub fn set_width(&mut self, width: u16) {
        self.wide_layout = width >= WIDE_LAYOUT_MIN_COLS;
    }

    /// Show a status notice
    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Per-tick housekeeping: expire notices and undo entries
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.notice.as_ref().is_some_and(|n| !n.live_at(now)) {
            self.notice = None;
        }
        self.undo.purge_expired_at(now);
    }
}
