//! Panel stack
//!
//! The structural authority for "what is on screen": an ordered stack
//! of view frames. The list frame is the root and is never closed; the
//! detail and answer frames layer on top of it.
//!
//! Invariants:
//! - at most one frame per kind
//! - `List` is always present at position 0
//! - `Answer` only exists above a `Detail` for the same question
//!
//! All operations are total: an invalid request (opening an answer
//! with no detail) is a no-op, not an error. Every operation reports
//! whether the stack changed so the caller can re-sync the address
//! bar.

use chrono::{DateTime, Utc};

/// Kind of a view frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Root inbox list
    List,
    /// Question detail
    Detail,
    /// Answer composition on top of a detail
    Answer,
}

/// Frame payload, one variant per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPayload {
    List,
    Detail { question_id: String },
    Answer { question_id: String },
}

impl PanelPayload {
    /// Kind of the frame this payload belongs to
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::List => PanelKind::List,
            Self::Detail { .. } => PanelKind::Detail,
            Self::Answer { .. } => PanelKind::Answer,
        }
    }

    /// Question the frame refers to, if any
    pub fn question_id(&self) -> Option<&str> {
        match self {
            Self::List => None,
            Self::Detail { question_id } | Self::Answer { question_id } => Some(question_id),
        }
    }
}

/// One layer of the navigation stack
#[derive(Debug, Clone)]
pub struct Panel {
    /// Frame payload
    pub payload: PanelPayload,
    /// When the frame was pushed
    pub opened_at: DateTime<Utc>,
}

impl Panel {
    fn new(payload: PanelPayload) -> Self {
        Self {
            payload,
            opened_at: Utc::now(),
        }
    }
}

/// Ordered stack of view frames, most recent last
#[derive(Debug, Clone)]
pub struct PanelStack {
    panels: Vec<Panel>,
}

impl PanelStack {
    /// Stack holding only the root list
    pub fn new() -> Self {
        Self {
            panels: vec![Panel::new(PanelPayload::List)],
        }
    }

    /// Push a frame, replacing any existing frame of the same kind
    ///
    /// Replacing `Detail` with a different question closes `Answer`.
    /// Opening `Answer` without a matching `Detail` is rejected (the
    /// caller contract is to check `is_open(PanelKind::Detail)` first).
    /// Returns whether the stack changed.
    pub fn open(&mut self, payload: PanelPayload) -> bool {
        match payload {
            // The root list is always present
            PanelPayload::List => false,
            PanelPayload::Detail { question_id } => self.open_detail(question_id),
            PanelPayload::Answer { question_id } => self.open_answer(question_id),
        }
    }

    fn open_detail(&mut self, question_id: String) -> bool {
        if self.payload(PanelKind::Detail).and_then(PanelPayload::question_id)
            == Some(question_id.as_str())
        {
            return false;
        }
        let had_detail = self.is_open(PanelKind::Detail);
        // A different question invalidates the answer frame above
        self.remove(PanelKind::Answer);
        if had_detail {
            self.remove(PanelKind::Detail);
        }
        self.panels.push(Panel::new(PanelPayload::Detail { question_id }));
        true
    }

    fn open_answer(&mut self, question_id: String) -> bool {
        let detail_id = self
            .payload(PanelKind::Detail)
            .and_then(PanelPayload::question_id);
        if detail_id != Some(question_id.as_str()) {
            log::debug!("rejected answer frame for {question_id}: no matching detail");
            return false;
        }
        if self.is_open(PanelKind::Answer) {
            return false;
        }
        self.panels.push(Panel::new(PanelPayload::Answer { question_id }));
        true
    }

    /// Remove the named frame and every frame above it
    ///
    /// `List` can never be closed. Returns whether the stack changed.
    pub fn close(&mut self, kind: PanelKind) -> bool {
        if kind == PanelKind::List {
            return false;
        }
        let Some(pos) = self.position(kind) else {
            return false;
        };
        self.panels.truncate(pos);
        true
    }

    /// Remove the single topmost non-list frame
    pub fn close_top(&mut self) -> bool {
        if self.panels.len() <= 1 {
            return false;
        }
        self.panels.pop();
        true
    }

    /// Collapse the stack back to just the list
    pub fn close_all(&mut self) -> bool {
        if self.panels.len() <= 1 {
            return false;
        }
        self.panels.truncate(1);
        true
    }

    /// Whether a frame of this kind is on the stack
    pub fn is_open(&self, kind: PanelKind) -> bool {
        self.position(kind).is_some()
    }

    /// Payload of the frame of this kind, if present
    pub fn payload(&self, kind: PanelKind) -> Option<&PanelPayload> {
        self.position(kind).map(|i| &self.panels[i].payload)
    }

    /// Topmost frame (keyboard focus priority)
    pub fn top(&self) -> &Panel {
        // Non-empty by construction: List is never removed
        &self.panels[self.panels.len() - 1]
    }

    /// Question shown by the detail frame, if open
    pub fn detail_question_id(&self) -> Option<&str> {
        self.payload(PanelKind::Detail)
            .and_then(PanelPayload::question_id)
    }

    /// Number of frames on the stack
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether only the root list is open
    pub fn is_empty(&self) -> bool {
        self.panels.len() == 1
    }

    fn position(&self, kind: PanelKind) -> Option<usize> {
        self.panels.iter().position(|p| p.payload.kind() == kind)
    }

    fn remove(&mut self, kind: PanelKind) {
        if let Some(pos) = self.position(kind) {
            self.panels.remove(pos);
        }
    }
}

impl Default for PanelStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> PanelPayload {
        PanelPayload::Detail {
            question_id: id.to_string(),
        }
    }

    fn answer(id: &str) -> PanelPayload {
        PanelPayload::Answer {
            question_id: id.to_string(),
        }
    }

    #[test]
    fn list_is_root_and_never_closed() {
        let mut stack = PanelStack::new();
        assert!(stack.is_open(PanelKind::List));
        assert!(!stack.close(PanelKind::List));
        assert!(!stack.close_top());
        assert!(!stack.close_all());
        assert_eq!(stack.len(), 1);
        assert!(!stack.open(PanelPayload::List));
    }

    #[test]
    fn at_most_one_frame_per_kind() {
        let mut stack = PanelStack::new();
        assert!(stack.open(detail("q1")));
        assert!(stack.open(detail("q2")));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.detail_question_id(), Some("q2"));
    }

    #[test]
    fn reopening_same_detail_is_a_noop() {
        let mut stack = PanelStack::new();
        assert!(stack.open(detail("q1")));
        assert!(!stack.open(detail("q1")));
    }

    #[test]
    fn answer_requires_matching_detail() {
        let mut stack = PanelStack::new();
        assert!(!stack.open(answer("q1")));

        stack.open(detail("q1"));
        assert!(!stack.open(answer("q2")));
        assert!(stack.open(answer("q1")));
        assert!(stack.is_open(PanelKind::Answer));
    }

    #[test]
    fn replacing_detail_closes_mismatched_answer() {
        let mut stack = PanelStack::new();
        stack.open(detail("q1"));
        stack.open(answer("q1"));

        assert!(stack.open(detail("q2")));
        assert!(!stack.is_open(PanelKind::Answer));
        assert_eq!(stack.detail_question_id(), Some("q2"));
    }

    #[test]
    fn close_removes_frames_above() {
        let mut stack = PanelStack::new();
        stack.open(detail("q1"));
        stack.open(answer("q1"));

        assert!(stack.close(PanelKind::Detail));
        assert!(!stack.is_open(PanelKind::Detail));
        assert!(!stack.is_open(PanelKind::Answer));
        assert!(stack.is_open(PanelKind::List));
    }

    #[test]
    fn close_top_pops_only_the_answer() {
        let mut stack = PanelStack::new();
        stack.open(detail("q1"));
        stack.open(answer("q1"));

        assert!(stack.close_top());
        assert!(stack.is_open(PanelKind::Detail));
        assert!(!stack.is_open(PanelKind::Answer));
        assert_eq!(stack.detail_question_id(), Some("q1"));
    }

    #[test]
    fn close_all_collapses_to_list() {
        let mut stack = PanelStack::new();
        stack.open(detail("q1"));
        stack.open(answer("q1"));

        assert!(stack.close_all());
        assert_eq!(stack.len(), 1);
        assert!(matches!(stack.top().payload, PanelPayload::List));
    }

    #[test]
    fn invariants_hold_over_arbitrary_sequences() {
        let mut stack = PanelStack::new();
        let ops: &[&dyn Fn(&mut PanelStack)] = &[
            &|s| {
                s.open(detail("a"));
            },
            &|s| {
                s.open(answer("a"));
            },
            &|s| {
                s.open(detail("b"));
            },
            &|s| {
                s.close_top();
            },
            &|s| {
                s.open(answer("b"));
            },
            &|s| {
                s.close(PanelKind::Answer);
            },
            &|s| {
                s.close_all();
            },
            &|s| {
                s.open(answer("zzz"));
            },
        ];
        for (i, op) in ops.iter().cycle().take(64).enumerate() {
            op(&mut stack);
            // one frame per kind
            for kind in [PanelKind::List, PanelKind::Detail, PanelKind::Answer] {
                let count = stack
                    .panels
                    .iter()
                    .filter(|f| f.payload.kind() == kind)
                    .count();
                assert!(count <= 1, "duplicate {kind:?} after op {i}");
            }
            // list rooted at 0
            assert_eq!(stack.panels[0].payload, PanelPayload::List);
            // answer never outlives its detail
            if let Some(answer_id) = stack
                .payload(PanelKind::Answer)
                .and_then(PanelPayload::question_id)
            {
                assert_eq!(stack.detail_question_id(), Some(answer_id));
            }
        }
    }
}
