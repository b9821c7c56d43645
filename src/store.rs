//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::fetch::{FetchState, RequestToken};
use crate::models::{Project, Task};

/// Everything fetched for the session, plus the current selection
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Result of `GET /projects`
    pub projects: FetchState<Vec<Project>>,
    /// Result of `GET /projects/{id}/tasks` for `selected_project`
    pub tasks: FetchState<Vec<Task>>,
    /// Project whose tasks are shown (None = task view closed)
    pub selected_project: Option<u32>,
}

impl DashboardState {
    /// Select a project and start its task request.
    ///
    /// Switching to a different project drops the previous project's tasks
    /// right away; re-selecting the same project is a retry and keeps them
    /// until the new response arrives.
    pub fn select_project(&mut self, project_id: u32) -> RequestToken {
        if self.selected_project != Some(project_id) {
            self.tasks.discard_data();
        }
        self.selected_project = Some(project_id);
        self.tasks.begin()
    }

    /// Close the task view; same as never having selected a project
    pub fn close_tasks(&mut self) {
        self.selected_project = None;
        self.tasks.clear();
    }

    pub fn selected_project_name(&self) -> Option<String> {
        let id = self.selected_project?;
        self.projects
            .data
            .as_ref()?
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Section Selection
// ========================

/// What the project area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsSection {
    Loading,
    Empty,
    Table(Vec<Project>),
}

pub fn projects_section(state: &FetchState<Vec<Project>>) -> ProjectsSection {
    if state.loading {
        return ProjectsSection::Loading;
    }
    match &state.data {
        Some(projects) if !projects.is_empty() => ProjectsSection::Table(projects.clone()),
        _ => ProjectsSection::Empty,
    }
}

/// What the task area shows
#[derive(Debug, Clone, PartialEq)]
pub enum TasksSection {
    Hidden,
    Loading,
    Empty,
    List { tasks: Vec<Task>, revision: u64 },
}

pub fn tasks_section(selected_project: Option<u32>, tasks: &FetchState<Vec<Task>>) -> TasksSection {
    if selected_project.is_none() {
        return TasksSection::Hidden;
    }
    if tasks.loading {
        return TasksSection::Loading;
    }
    match &tasks.data {
        Some(list) if !list.is_empty() => TasksSection::List {
            tasks: list.clone(),
            revision: tasks.revision,
        },
        _ => TasksSection::Empty,
    }
}
