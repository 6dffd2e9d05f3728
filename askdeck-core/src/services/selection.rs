//! Selection manager
//!
//! Tracks the set of selected question IDs, always scoped to the
//! currently visible list. Invalidation is an explicit `reconcile`
//! step invoked by the list controller right after any criteria
//! change, which makes the transition visible and testable instead of
//! an implicit read-time invariant.

use std::collections::HashSet;

/// Multi-select state over the visible list
#[derive(Debug, Default)]
pub struct SelectionSet {
    selected: HashSet<String>,
    /// Last directly toggled ID, the range anchor
    anchor: Option<String>,
}

impl SelectionSet {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a single ID and move the range anchor to it
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        self.anchor = Some(id.to_string());
    }

    /// Select the contiguous range between the anchor and `id`
    ///
    /// Range is taken over the visible order. Without an anchor this
    /// is a plain toggle. The anchor stays put so repeated range
    /// toggles extend from the same origin.
    pub fn toggle_range(&mut self, id: &str, visible: &[String]) {
        let Some(anchor) = self.anchor.clone() else {
            self.toggle(id);
            return;
        };
        let anchor_pos = visible.iter().position(|v| v == &anchor);
        let target_pos = visible.iter().position(|v| v == id);
        match (anchor_pos, target_pos) {
            (Some(a), Some(b)) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                for item in &visible[lo..=hi] {
                    self.selected.insert(item.clone());
                }
            }
            // Anchor scrolled out of the view: fall back to a toggle
            _ => self.toggle(id),
        }
    }

    /// Select every visible ID
    pub fn select_all(&mut self, visible: &[String]) {
        self.selected = visible.iter().cloned().collect();
    }

    /// Drop the whole selection
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Intersect the selection with the new visible set
    ///
    /// Called by the list controller after every filter/sort/page
    /// change so the selection never references an ID outside the
    /// active view.
    pub fn reconcile(&mut self, visible: &[String]) {
        let visible: HashSet<&str> = visible.iter().map(String::as_str).collect();
        self.selected.retain(|id| visible.contains(id.as_str()));
        if let Some(ref anchor) = self.anchor {
            if !visible.contains(anchor.as_str()) {
                self.anchor = None;
            }
        }
    }

    /// Whether an ID is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected IDs
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected IDs (no ordering guarantee)
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = SelectionSet::new();
        sel.toggle("a");
        assert!(sel.is_selected("a"));
        sel.toggle("a");
        assert!(!sel.is_selected("a"));
    }

    #[test]
    fn range_selects_between_anchor_and_target() {
        let visible = ids(&["a", "b", "c", "d", "e"]);
        let mut sel = SelectionSet::new();
        sel.toggle("b");
        sel.toggle_range("d", &visible);
        assert_eq!(sel.selected_count(), 3);
        assert!(sel.is_selected("b") && sel.is_selected("c") && sel.is_selected("d"));
    }

    #[test]
    fn range_works_backwards() {
        let visible = ids(&["a", "b", "c", "d"]);
        let mut sel = SelectionSet::new();
        sel.toggle("d");
        sel.toggle_range("b", &visible);
        assert!(sel.is_selected("b") && sel.is_selected("c") && sel.is_selected("d"));
        assert!(!sel.is_selected("a"));
    }

    #[test]
    fn range_without_anchor_is_a_toggle() {
        let visible = ids(&["a", "b", "c"]);
        let mut sel = SelectionSet::new();
        sel.toggle_range("b", &visible);
        assert_eq!(sel.selected_count(), 1);
        assert!(sel.is_selected("b"));
    }

    #[test]
    fn reconcile_drops_out_of_view_ids() {
        let mut sel = SelectionSet::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("c");

        sel.reconcile(&ids(&["b"]));
        assert_eq!(sel.selected_count(), 1);
        assert!(sel.is_selected("b"));
        assert!(!sel.is_selected("a"));
    }

    #[test]
    fn selection_never_exceeds_visible_after_reconcile() {
        let mut sel = SelectionSet::new();
        let pages = [
            ids(&["a", "b", "c", "d"]),
            ids(&["c", "d", "e"]),
            ids(&["x"]),
            ids(&[]),
        ];
        sel.select_all(&pages[0]);
        for page in &pages {
            sel.reconcile(page);
            assert!(sel.selected_count() <= page.len());
            for id in sel.ids() {
                assert!(page.contains(&id));
            }
        }
    }

    #[test]
    fn reconcile_invalidates_a_vanished_anchor() {
        let mut sel = SelectionSet::new();
        sel.toggle("a");
        sel.reconcile(&ids(&["b", "c"]));
        // Anchor gone: the next range toggle degrades gracefully
        sel.toggle_range("c", &ids(&["b", "c"]));
        assert!(sel.is_selected("c"));
        assert!(!sel.is_selected("b"));
    }
}
