//! Task Tree
//!
//! Indexes a flat task list into roots + parent -> children, and flattens
//! the expanded part of the tree into display rows.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::models::Task;
use crate::search;
use crate::view_state::TaskViewState;

/// Shown in the dependency column when there is nothing to say
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("task #{task_id} appears inside its own subtree")]
    Cycle { task_id: u32 },
}

/// Lookup structures derived from one task list
#[derive(Debug, Clone, Default)]
pub struct TaskTree {
    task_map: HashMap<u32, Task>,
    children_map: HashMap<u32, Vec<Task>>,
    root_tasks: Vec<Task>,
}

impl TaskTree {
    pub fn build(tasks: &[Task]) -> Self {
        let mut task_map = HashMap::with_capacity(tasks.len());
        let mut children_map: HashMap<u32, Vec<Task>> = HashMap::new();
        let mut root_tasks = Vec::new();

        for task in tasks {
            task_map.insert(task.id, task.clone());
        }

        for task in tasks {
            match task.parent_task_id {
                None => root_tasks.push(task.clone()),
                Some(parent_id) => children_map.entry(parent_id).or_default().push(task.clone()),
            }
        }

        Self {
            task_map,
            children_map,
            root_tasks,
        }
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.task_map.get(&id)
    }

    pub fn roots(&self) -> &[Task] {
        &self.root_tasks
    }

    pub fn children(&self, id: u32) -> &[Task] {
        self.children_map.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.task_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_map.is_empty()
    }

    /// Ids of tasks that have at least one child
    pub fn parent_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.children_map
            .keys()
            .copied()
            .filter(|id| self.task_map.contains_key(id))
    }

    /// Tasks that can't be reached from any root, e.g. their parent id
    /// doesn't exist in this list. Sorted by id.
    pub fn detached_ids(&self) -> Vec<u32> {
        let mut reached = HashSet::new();
        let mut stack: Vec<&Task> = self.root_tasks.iter().collect();
        while let Some(task) = stack.pop() {
            if reached.insert(task.id) {
                stack.extend(self.children(task.id));
            }
        }

        let mut detached: Vec<u32> = self
            .task_map
            .keys()
            .copied()
            .filter(|id| !reached.contains(id))
            .collect();
        detached.sort_unstable();
        detached
    }

    /// Dependencies of `task` that resolve in this list, in `depends_on` order
    pub fn dependencies(&self, task: &Task) -> Vec<DependencyRef> {
        task.depends_on
            .iter()
            .filter_map(|id| self.task(*id))
            .map(|dep| DependencyRef {
                id: dep.id,
                name: dep.name.clone(),
            })
            .collect()
    }

    /// Rows to display in order: every root, plus the children of every
    /// expanded task, depth-first.
    pub fn visible_rows(&self, view: &TaskViewState) -> Result<Vec<VisibleRow>, TreeError> {
        fn collect(
            tree: &TaskTree,
            tasks: &[Task],
            depth: usize,
            view: &TaskViewState,
            ancestors: &mut Vec<u32>,
            rows: &mut Vec<VisibleRow>,
        ) -> Result<(), TreeError> {
            for task in tasks {
                if ancestors.contains(&task.id) {
                    return Err(TreeError::Cycle { task_id: task.id });
                }

                let row = tree.row(task, depth, view);
                let expanded = row.expanded;
                rows.push(row);

                if expanded {
                    ancestors.push(task.id);
                    collect(tree, tree.children(task.id), depth + 1, view, ancestors, rows)?;
                    ancestors.pop();
                }
            }
            Ok(())
        }

        let mut rows = Vec::new();
        collect(self, &self.root_tasks, 0, view, &mut Vec::new(), &mut rows)?;
        Ok(rows)
    }

    fn row(&self, task: &Task, depth: usize, view: &TaskViewState) -> VisibleRow {
        let child_count = self.children(task.id).len();
        let dependencies = self.dependencies(task);

        let detail = if !dependencies.is_empty() {
            RowDetail::DependsOn(dependencies)
        } else if child_count > 0 {
            RowDetail::Subtasks(child_count)
        } else {
            RowDetail::None
        };

        VisibleRow {
            task: task.clone(),
            depth,
            child_count,
            expanded: child_count > 0 && view.is_expanded(task.id),
            highlighted: search::matches(task, view.search()),
            detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// Content of the "Dependencies / Subtasks" column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDetail {
    None,
    DependsOn(Vec<DependencyRef>),
    Subtasks(usize),
}

impl fmt::Display for RowDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDetail::None => f.write_str(PLACEHOLDER),
            RowDetail::DependsOn(deps) => {
                f.write_str("Depends on: ")?;
                for (i, dep) in deps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", dep)?;
                }
                Ok(())
            }
            RowDetail::Subtasks(n) => write!(f, "{} subtask(s)", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    pub task: Task,
    pub depth: usize,
    pub child_count: usize,
    pub expanded: bool,
    pub highlighted: bool,
    pub detail: RowDetail,
}

impl VisibleRow {
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}
