//! Task Search
//!
//! Case-insensitive substring match on a task's name or decimal id.
//! Matching only marks rows; it never hides or reorders them.

use crate::models::Task;

pub fn matches(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let needle = query.to_lowercase();
    task.name.to_lowercase().contains(&needle) || task.id.to_string().contains(&needle)
}

/// Number of tasks in `tasks` matching `query`, visible or not
pub fn match_count(tasks: &[Task], query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    tasks.iter().filter(|t| matches(t, query)).count()
}
