//! Task View State
//!
//! Ephemeral per-list UI state: which tasks are expanded and the current
//! search text. One instance lives as long as one fetched task list; a
//! replaced list starts again from `TaskViewState::new()`.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskViewState {
    expanded: HashSet<u32>,
    search: String,
}

impl TaskViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, task_id: u32) -> bool {
        self.expanded.contains(&task_id)
    }

    /// Flip one task between collapsed and expanded
    pub fn toggle(&mut self, task_id: u32) {
        if !self.expanded.remove(&task_id) {
            self.expanded.insert(task_id);
        }
    }

    pub fn expand_all(&mut self, task_ids: impl IntoIterator<Item = u32>) {
        self.expanded.extend(task_ids);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let view = TaskViewState::new();
        assert!(!view.is_expanded(10));
        assert_eq!(view.search(), "");
    }

    #[test]
    fn test_toggle_pair_restores_collapsed() {
        let mut view = TaskViewState::new();
        view.toggle(10);
        assert!(view.is_expanded(10));
        view.toggle(10);
        assert!(!view.is_expanded(10));
    }

    #[test]
    fn test_toggle_only_affects_one_task() {
        let mut view = TaskViewState::new();
        view.toggle(1);
        view.toggle(2);
        view.toggle(1);
        assert!(!view.is_expanded(1));
        assert!(view.is_expanded(2));
    }

    #[test]
    fn test_search_text_is_kept_verbatim() {
        let mut view = TaskViewState::new();
        view.set_search(" API ");
        assert_eq!(view.search(), " API ");
        view.set_search(String::new());
        assert_eq!(view.search(), "");
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut view = TaskViewState::new();
        view.expand_all([1, 2, 3]);
        assert_eq!(view.expanded_count(), 3);
        view.collapse_all();
        assert_eq!(view.expanded_count(), 0);
    }
}
