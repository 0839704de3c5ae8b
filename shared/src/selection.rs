use serde::{Deserialize, Serialize};

/// Ordered set of selected child ids behind the "select children" control.
///
/// Order follows the order children were picked in, which is the order the
/// chips are shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChildSelection {
    selected: Vec<String>,
}

impl ChildSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id.into());
        }
        selection
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn into_ids(self) -> Vec<String> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, child_id: &str) -> bool {
        self.selected.iter().any(|id| id == child_id)
    }

    /// Adds `child_id` if missing. Returns whether it was added.
    pub fn insert(&mut self, child_id: String) -> bool {
        if self.contains(&child_id) {
            false
        } else {
            self.selected.push(child_id);
            true
        }
    }

    /// Removes `child_id`. Returns whether it was present.
    pub fn remove(&mut self, child_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| id != child_id);
        self.selected.len() != before
    }

    /// Flips one child. Returns true when the child is now selected.
    pub fn toggle(&mut self, child_id: &str) -> bool {
        if self.remove(child_id) {
            false
        } else {
            self.selected.push(child_id.to_string());
            true
        }
    }

    /// Select All / Deselect All: clears when everything in `available` is
    /// already selected, otherwise selects all of `available`.
    pub fn toggle_all(&mut self, available: &[String]) {
        if self.is_all_selected(available) {
            self.clear();
        } else {
            self.select_all(available);
        }
    }

    pub fn select_all(&mut self, available: &[String]) {
        for id in available {
            self.insert(id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_all_selected(&self, available: &[String]) -> bool {
        !available.is_empty() && available.iter().all(|id| self.contains(id))
    }

    /// Indeterminate checkbox state: some but not all selected
    pub fn is_partially_selected(&self, available: &[String]) -> bool {
        let count = available.iter().filter(|id| self.contains(id)).count();
        count > 0 && count < available.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<String> {
        vec!["c1".to_string(), "c2".to_string(), "c3".to_string()]
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = ChildSelection::new();
        assert!(selection.toggle("c2"));
        assert!(selection.contains("c2"));
        assert!(!selection.toggle("c2"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_selects_everything_when_partial() {
        let mut selection = ChildSelection::from_ids(["c1"]);
        assert!(selection.is_partially_selected(&roster()));
        selection.toggle_all(&roster());
        assert!(selection.is_all_selected(&roster()));
        assert!(!selection.is_partially_selected(&roster()));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_toggle_all_clears_when_everything_selected() {
        let mut selection = ChildSelection::from_ids(roster());
        selection.toggle_all(&roster());
        assert!(selection.is_empty());
        assert!(!selection.is_partially_selected(&roster()));
    }

    #[test]
    fn test_from_ids_drops_duplicates_and_keeps_order() {
        let selection = ChildSelection::from_ids(["c3", "c1", "c3"]);
        assert_eq!(selection.ids(), &["c3".to_string(), "c1".to_string()]);
    }

    #[test]
    fn test_empty_roster_is_never_all_selected() {
        let selection = ChildSelection::new();
        assert!(!selection.is_all_selected(&[]));
    }
}
