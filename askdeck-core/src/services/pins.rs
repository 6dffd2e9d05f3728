//! Pin manager
//!
//! An ordering override independent of selection and filtering: pinned
//! questions sort first, ties broken by the list's existing order. A
//! pinned question that drops out of the current filter stays pinned;
//! it simply has no visible effect until the filter includes it again.

use std::collections::HashSet;

use crate::types::Question;

/// Set of pinned question IDs
#[derive(Debug, Default)]
pub struct PinSet {
    pins: HashSet<String>,
}

impl PinSet {
    /// Empty pin set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with the persisted one
    pub fn set_all(&mut self, pins: HashSet<String>) {
        self.pins = pins;
    }

    /// Toggle a pin; returns whether the ID is now pinned
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.pins.remove(id) {
            false
        } else {
            self.pins.insert(id.to_string());
            true
        }
    }

    /// Whether an ID is pinned
    pub fn is_pinned(&self, id: &str) -> bool {
        self.pins.contains(id)
    }

    /// Current pin set, for persistence
    pub fn as_set(&self) -> &HashSet<String> {
        &self.pins
    }

    /// Reorder a page: pinned first, otherwise stable
    pub fn order<'a>(&self, items: &'a [Question]) -> Vec<&'a Question> {
        let (pinned, rest): (Vec<&Question>, Vec<&Question>) =
            items.iter().partition(|q| self.is_pinned(&q.id));
        let mut ordered = pinned;
        ordered.extend(rest);
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::question;

    #[test]
    fn toggle_reports_new_state() {
        let mut pins = PinSet::new();
        assert!(pins.toggle("a"));
        assert!(pins.is_pinned("a"));
        assert!(!pins.toggle("a"));
        assert!(!pins.is_pinned("a"));
    }

    #[test]
    fn pinned_items_sort_first_stably() {
        let items = vec![question("q1"), question("q2"), question("q3"), question("q4")];
        let mut pins = PinSet::new();
        pins.toggle("q3");
        pins.toggle("q2");

        let ordered: Vec<&str> = pins.order(&items).iter().map(|q| q.id.as_str()).collect();
        // Pinned keep their relative order, so do the rest
        assert_eq!(ordered, ["q2", "q3", "q1", "q4"]);
    }

    #[test]
    fn out_of_view_pins_survive() {
        let mut pins = PinSet::new();
        pins.toggle("gone");
        let items = vec![question("q1")];
        let ordered = pins.order(&items);
        assert_eq!(ordered.len(), 1);
        assert!(pins.is_pinned("gone"));
    }
}
