//! Project Table Component
//!
//! One row per project with a "View Tasks" action.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::models::Project;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ProjectTable(projects: Vec<Project>) -> impl IntoView {
    let ctx = use_dashboard();
    let selected = use_dashboard_store().selected_project();

    view! {
        <div class="table-scroll">
            <table class="data-table project-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Task Count"</th>
                        <th>"Earliest Start"</th>
                        <th>"Latest End"</th>
                        <th>"Duration (Days)"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {projects
                        .into_iter()
                        .map(|project| {
                            let id = project.id;
                            let row_class = move || {
                                if selected.get() == Some(id) { "project-row selected" } else { "project-row" }
                            };
                            view! {
                                <tr class=row_class>
                                    <td>{id}</td>
                                    <td class="project-name">{project.name.clone()}</td>
                                    <td>{project.task_count}</td>
                                    <td>{project.earliest_start_label().to_string()}</td>
                                    <td>{project.latest_end_label().to_string()}</td>
                                    <td>{project.duration_label()}</td>
                                    <td>
                                        <button class="view-tasks-btn" on:click=move |_| ctx.select_project(id)>
                                            "View Tasks"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
