//! Task List Component
//!
//! Task tree for one project: search box, expand/collapse controls and the
//! flattened tree table. View state is local and dies with the component,
//! so every newly fetched task list starts collapsed with an empty search.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_dashboard;
use crate::models::Task;
use crate::search::match_count;
use crate::tree::TaskTree;
use crate::view_state::TaskViewState;

#[component]
pub fn TaskList(tasks: Vec<Task>, project_name: Option<String>) -> impl IntoView {
    let ctx = use_dashboard();

    let task_count = tasks.len();
    let tree = StoredValue::new(TaskTree::build(&tasks));
    let tasks = StoredValue::new(tasks);
    let view_state = RwSignal::new(TaskViewState::new());

    let rows = Memo::new(move |_| view_state.with(|v| tree.with_value(|t| t.visible_rows(v))));
    let detached = tree.with_value(|t| t.detached_ids().len());

    let heading = match project_name {
        Some(name) => format!("Tasks for {} ({})", name, task_count),
        None => format!("Tasks ({})", task_count),
    };

    let match_summary = move || {
        let query = view_state.with(|v| v.search().to_string());
        if query.is_empty() {
            return None;
        }
        let n = tasks.with_value(|t| match_count(t, &query));
        Some(view! { <span class="match-count">{format!("{} matching task(s)", n)}</span> })
    };

    let expand_all = move |_| {
        let ids: Vec<u32> = tree.with_value(|t| t.parent_ids().collect());
        view_state.update(|v| v.expand_all(ids));
    };

    view! {
        <div class="task-panel">
            <div class="task-panel-header">
                <div class="task-panel-title">
                    <h2>{heading}</h2>
                    <p class="hint">
                        "Click on a task to expand and view its subtasks. Dependencies show what tasks lead up to each task."
                    </p>
                </div>
                <button class="close-btn" on:click=move |_| ctx.close_tasks()>"Close"</button>
            </div>

            <div class="task-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search tasks by name or ID..."
                    prop:value=move || view_state.with(|v| v.search().to_string())
                    on:input=move |ev| view_state.update(|v| v.set_search(event_target_value(&ev)))
                />
                {match_summary}
                <button class="tree-btn" on:click=expand_all>"Expand all"</button>
                <button class="tree-btn" on:click=move |_| view_state.update(|v| v.collapse_all())>
                    "Collapse all"
                </button>
            </div>

            {move || rows.with(|r| r.as_ref().err().map(|err| view! {
                <div class="error-banner" role="alert">{format!("Task data error: {}", err)}</div>
            }))}

            <div class="table-scroll">
                <table class="data-table task-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Start Date"</th>
                            <th>"Due Date"</th>
                            <th>"Dependencies / Subtasks"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get().unwrap_or_default()
                            key=|row| (row.task.id, row.depth, row.expanded, row.highlighted)
                            children=move |row| view! { <TaskRow row=row view_state=view_state /> }
                        />
                    </tbody>
                </table>
            </div>

            {(detached > 0).then(|| view! {
                <p class="detached-note">{format!("{} task(s) not shown: parent task missing", detached)}</p>
            })}
        </div>
    }
}
