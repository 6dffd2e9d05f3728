//! In-memory address bar
//!
//! A terminal has no browser location, so the port is backed by an
//! in-process history list. `back`/`forward` do not touch the panel
//! stack directly; they queue the target state and the main loop
//! replays it on the next tick, exactly like a browser popstate.

use std::collections::VecDeque;
use std::sync::Mutex;

use askdeck_core::types::QueryParams;
use askdeck_core::LocationPort;

struct HistoryInner {
    entries: Vec<QueryParams>,
    /// Index of the current entry; always valid
    index: usize,
    /// States queued by back/forward, drained by the main loop
    pending: VecDeque<QueryParams>,
}

/// History-list implementation of [`LocationPort`]
pub struct HistoryLocation {
    inner: Mutex<HistoryInner>,
}

impl HistoryLocation {
    pub fn new() -> Self {
        Self::with_initial(QueryParams::new())
    }

    /// Start the history at a given state (a deep link)
    pub fn with_initial(params: QueryParams) -> Self {
        Self {
            inner: Mutex::new(HistoryInner {
                entries: vec![params],
                index: 0,
                pending: VecDeque::new(),
            }),
        }
    }

    /// Step back in history; returns whether there was anywhere to go
    pub fn back(&self) -> bool {
        let mut inner = self.lock();
        if inner.index == 0 {
            return false;
        }
        inner.index -= 1;
        let params = inner.entries[inner.index].clone();
        inner.pending.push_back(params);
        true
    }

    /// Step forward in history; returns whether there was anywhere to go
    pub fn forward(&self) -> bool {
        let mut inner = self.lock();
        if inner.index + 1 >= inner.entries.len() {
            return false;
        }
        inner.index += 1;
        let params = inner.entries[inner.index].clone();
        inner.pending.push_back(params);
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryInner> {
        // Lock poisoning cannot leave the history inconsistent: every
        // mutation completes before the guard drops
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for HistoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationPort for HistoryLocation {
    fn read(&self) -> QueryParams {
        let inner = self.lock();
        inner.entries[inner.index].clone()
    }

    fn write(&self, params: QueryParams, replace: bool) {
        let mut inner = self.lock();
        if replace {
            let index = inner.index;
            inner.entries[index] = params;
        } else {
            // A push discards the forward entries, like a browser
            let index = inner.index;
            inner.entries.truncate(index + 1);
            inner.entries.push(params);
            inner.index += 1;
        }
    }

    fn take_navigation(&self) -> Option<QueryParams> {
        self.lock().pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(detail: &str) -> QueryParams {
        let mut p = QueryParams::new();
        p.push("detail", detail);
        p
    }

    #[test]
    fn push_then_back_queues_the_previous_state() {
        let location = HistoryLocation::new();
        location.write(params("q1"), false);
        location.write(params("q2"), false);

        assert!(location.back());
        let replayed = location.take_navigation().unwrap();
        assert_eq!(replayed.get("detail"), Some("q1"));
        assert!(location.take_navigation().is_none());
    }

    #[test]
    fn replace_does_not_grow_history() {
        let location = HistoryLocation::new();
        location.write(params("q1"), false);
        location.write(params("q1-answering"), true);

        assert!(location.back());
        // One back step lands on the root, not on the replaced entry
        let replayed = location.take_navigation().unwrap();
        assert_eq!(replayed.get("detail"), None);
        assert!(!location.back());
    }

    #[test]
    fn push_discards_forward_entries() {
        let location = HistoryLocation::new();
        location.write(params("q1"), false);
        location.back();
        location.take_navigation();

        location.write(params("q2"), false);
        assert!(!location.forward());
    }

    #[test]
    fn forward_retraces_a_back_step() {
        let location = HistoryLocation::new();
        location.write(params("q1"), false);
        location.back();
        location.take_navigation();

        assert!(location.forward());
        let replayed = location.take_navigation().unwrap();
        assert_eq!(replayed.get("detail"), Some("q1"));
    }
}
