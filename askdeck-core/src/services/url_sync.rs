//! URL synchronizer
//!
//! Bidirectional mapping between the panel stack and the address bar.
//! The mapping itself is a pure function; the synchronizer wraps it
//! with the bookkeeping needed to avoid feedback loops: it remembers
//! the last state it wrote and only touches the location port when the
//! derived state actually changed.
//!
//! History policy: detail navigation pushes a new history entry so it
//! is back-button-able; toggling the answer sub-step replaces the
//! current entry so it does not clutter history.

use std::sync::Arc;

use crate::services::panels::{PanelKind, PanelPayload, PanelStack};
use crate::traits::LocationPort;
use crate::types::UrlState;

/// Derive the address-bar state from the panel stack
pub fn stack_to_url(stack: &PanelStack) -> UrlState {
    UrlState {
        detail_id: stack.detail_question_id().map(ToString::to_string),
        answering: stack.is_open(PanelKind::Answer),
    }
}

/// Keeps the location port in step with the panel stack
pub struct UrlSynchronizer {
    location: Arc<dyn LocationPort>,
    last_written: UrlState,
}

impl UrlSynchronizer {
    /// Create a synchronizer over a location port
    pub fn new(location: Arc<dyn LocationPort>) -> Self {
        Self {
            location,
            last_written: UrlState::default(),
        }
    }

    /// Initial address-bar state, read once on mount
    pub fn initial_state(&self) -> UrlState {
        UrlState::from_params(&self.location.read())
    }

    /// Pending back/forward navigation, drained once per tick
    pub fn take_navigation(&self) -> Option<UrlState> {
        self.location
            .take_navigation()
            .map(|p| UrlState::from_params(&p))
    }

    /// Outbound: write the stack's derived state to the address bar
    ///
    /// No-op when the derived state equals the last written one.
    pub fn sync(&mut self, stack: &PanelStack) {
        let state = stack_to_url(stack);
        if state == self.last_written {
            return;
        }
        // Same detail means only the answer sub-step toggled
        let replace = state.detail_id == self.last_written.detail_id;
        self.location.write(state.to_params(), replace);
        self.last_written = state;
    }

    /// Inbound: replay an address-bar state onto the panel stack
    ///
    /// `resolve` checks whether a question ID exists in the loaded
    /// list. An unresolvable ID degrades to the root list (logged, not
    /// an error). Returns whether the state was applied in full.
    pub fn replay<F>(&mut self, state: &UrlState, stack: &mut PanelStack, resolve: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let applied = match state.detail_id.as_deref() {
            None => {
                stack.close_all();
                true
            }
            Some(id) if resolve(id) => {
                stack.open(PanelPayload::Detail {
                    question_id: id.to_string(),
                });
                if state.answering {
                    stack.open(PanelPayload::Answer {
                        question_id: id.to_string(),
                    });
                } else {
                    stack.close(PanelKind::Answer);
                }
                true
            }
            Some(id) => {
                log::info!("deep link target {id} not in the loaded list, falling back to inbox");
                stack.close_all();
                false
            }
        };
        // Suppress the echo write for whatever actually landed
        self.last_written = stack_to_url(stack);
        applied
    }
}
