//! Project Dashboard App
//!
//! Project table on top, task tree of the selected project below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{ErrorBanner, ProjectTable, TaskList};
use crate::config::Config;
use crate::context::DashboardContext;
use crate::store::{projects_section, tasks_section, DashboardState, DashboardStateStoreFields, ProjectsSection, TasksSection};

#[component]
pub fn App(config: Config) -> impl IntoView {
    // State
    let store = Store::new(DashboardState::default());
    let ctx = DashboardContext::new(store, ApiClient::new(config.api_base_url));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Start loading before the first render so it opens on "Loading projects..."
    ctx.load_projects();

    let projects_view = Memo::new(move |_| store.projects().with(projects_section));
    let tasks_view = Memo::new(move |_| {
        let selected = store.selected_project().get();
        store.tasks().with(|tasks| tasks_section(selected, tasks))
    });

    let projects_error = move || {
        store.projects().with(|p| p.error.as_ref().map(|e| e.message().to_string())).map(|message| view! {
            <ErrorBanner title="Error loading projects" message=message on_retry=move || ctx.load_projects() />
        })
    };

    let tasks_error = move || {
        store.tasks().with(|t| t.error.as_ref().map(|e| e.message().to_string())).map(|message| view! {
            <ErrorBanner title="Error loading tasks" message=message on_retry=move || ctx.reload_tasks() />
        })
    };

    let tasks_panel = move || match tasks_view.get() {
        TasksSection::Hidden => ().into_any(),
        TasksSection::Loading => view! { <div class="status-message">"Loading tasks..."</div> }.into_any(),
        TasksSection::Empty => view! {
            <div class="task-panel empty">
                <p>"No tasks found for this project."</p>
                <button class="close-btn" on:click=move |_| ctx.close_tasks()>"Close"</button>
            </div>
        }.into_any(),
        TasksSection::List { tasks, .. } => {
            let project_name = store.with_untracked(|s| s.selected_project_name());
            view! { <TaskList tasks=tasks project_name=project_name /> }.into_any()
        }
    };

    view! {
        <div class="dashboard">
            <h1>"Project Management Dashboard"</h1>

            {projects_error}

            {move || match projects_view.get() {
                ProjectsSection::Loading => view! { <div class="status-message">"Loading projects..."</div> }.into_any(),
                ProjectsSection::Empty => view! { <div class="status-message">"No projects found."</div> }.into_any(),
                ProjectsSection::Table(projects) => view! {
                    <ProjectTable projects=projects />
                    {tasks_error}
                    {tasks_panel}
                }.into_any(),
            }}
        </div>
    }
}
