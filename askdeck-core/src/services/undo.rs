//! Undo stack
//!
//! A bounded queue of reversible-action descriptors with expiring undo
//! windows. Entries hold serializable command data (target IDs plus
//! the inverse operation), never closures, so they stay inspectable
//! and cannot capture stale state. An entry is consumable exactly
//! once; expiry discards it without side effects.
//!
//! Undo is best-effort, not transactional: a failed inverse leaves the
//! forward mutation's effects in place and is reported, not retried.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::services::bulk::BulkOp;

/// Default undo window
pub const UNDO_WINDOW_SECS: i64 = 10;

/// Most entries retained at once; older ones fall off the back
const MAX_ENTRIES: usize = 8;

/// Serializable inverse-operation descriptor
#[derive(Debug, Clone)]
pub struct UndoCommand {
    /// Questions the forward action touched
    pub target_ids: Vec<String>,
    /// Operation that reverses the forward action
    pub inverse: BulkOp,
}

/// One undoable action
#[derive(Debug, Clone)]
pub struct UndoEntry {
    /// Entry ID, used to consume it
    pub id: Uuid,
    /// Human-readable description of the forward action
    pub description: String,
    /// How to reverse it
    pub command: UndoCommand,
    /// Instant the entry stops being runnable
    pub expires_at: DateTime<Utc>,
}

impl UndoEntry {
    /// Whether the entry is still runnable at `now`
    pub fn runnable_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Remaining window, clamped at zero
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

/// Bounded queue of undo entries, most recent last
#[derive(Debug)]
pub struct UndoStack {
    entries: VecDeque<UndoEntry>,
    window: Duration,
}

impl UndoStack {
    /// Stack with the default 10 second window
    pub fn new() -> Self {
        Self::with_window(Duration::seconds(UNDO_WINDOW_SECS))
    }

    /// Stack with a custom window
    pub fn with_window(window: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            window,
        }
    }

    /// Push an entry created at `now`; returns its ID
    pub fn push_at(
        &mut self,
        description: String,
        command: UndoCommand,
        now: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push_back(UndoEntry {
            id,
            description,
            command,
            expires_at: now + self.window,
        });
        if self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
        id
    }

    /// Push an entry created now
    pub fn push(&mut self, description: String, command: UndoCommand) -> Uuid {
        self.push_at(description, command, Utc::now())
    }

    /// Consume an entry by ID
    ///
    /// Returns `None` when the entry is unknown or already expired.
    /// Either way the entry is gone afterwards.
    pub fn take_at(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<UndoEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(pos)?;
        entry.runnable_at(now).then_some(entry)
    }

    /// Drop every expired entry
    pub fn purge_expired_at(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|e| e.runnable_at(now));
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    /// Whether no entries are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of held entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(ids: &[&str]) -> UndoCommand {
        UndoCommand {
            target_ids: ids.iter().map(ToString::to_string).collect(),
            inverse: BulkOp::Unhide,
        }
    }

    #[test]
    fn entry_is_runnable_inside_the_window() {
        let mut stack = UndoStack::new();
        let t0 = Utc::now();
        let id = stack.push_at("Hid 3 questions".to_string(), command(&["a"]), t0);

        let entry = stack.take_at(id, t0 + Duration::seconds(9));
        assert!(entry.is_some(), "runnable at T+9s");
    }

    #[test]
    fn entry_expires_past_the_window() {
        let mut stack = UndoStack::new();
        let t0 = Utc::now();
        let id = stack.push_at("Hid 3 questions".to_string(), command(&["a"]), t0);

        assert!(
            stack.take_at(id, t0 + Duration::seconds(11)).is_none(),
            "not runnable at T+11s"
        );
        // Expired take still discards the entry
        assert!(stack.is_empty());
    }

    #[test]
    fn entry_is_consumable_exactly_once() {
        let mut stack = UndoStack::new();
        let t0 = Utc::now();
        let id = stack.push_at("Hid 1 question".to_string(), command(&["a"]), t0);

        assert!(stack.take_at(id, t0).is_some());
        assert!(stack.take_at(id, t0).is_none());
    }

    #[test]
    fn purge_removes_only_expired_entries() {
        let mut stack = UndoStack::new();
        let t0 = Utc::now();
        stack.push_at("old".to_string(), command(&["a"]), t0);
        let fresh = stack.push_at("fresh".to_string(), command(&["b"]), t0 + Duration::seconds(8));

        stack.purge_expired_at(t0 + Duration::seconds(12));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.latest().map(|e| e.id), Some(fresh));
    }

    #[test]
    fn stack_is_bounded() {
        let mut stack = UndoStack::new();
        let t0 = Utc::now();
        for i in 0..20 {
            stack.push_at(format!("entry {i}"), command(&["x"]), t0);
        }
        assert_eq!(stack.len(), 8);
        assert_eq!(
            stack.latest().map(|e| e.description.clone()),
            Some("entry 19".to_string())
        );
    }

    #[test]
    fn command_descriptor_is_inspectable() {
        let mut stack = UndoStack::new();
        stack.push("Hid 2 questions".to_string(), command(&["a", "b"]));
        let entry = stack.latest().unwrap();
        assert_eq!(entry.command.target_ids, vec!["a", "b"]);
        assert_eq!(entry.command.inverse, BulkOp::Unhide);
    }
}
