//! Task Row Component
//!
//! A single task in the tree table.

use leptos::prelude::*;
use log::debug;

use crate::tree::VisibleRow;
use crate::view_state::TaskViewState;

/// Horizontal indent per tree level, in pixels
pub const INDENT_PX: usize = 20;

pub fn row_class(row: &VisibleRow) -> String {
    let mut c = String::from("task-row");
    if row.has_children() { c.push_str(" expandable"); }
    if row.highlighted { c.push_str(" highlighted"); }
    c
}

pub fn indent_style(depth: usize) -> String {
    format!("padding-left: {}px;", depth * INDENT_PX)
}

#[component]
pub fn TaskRow(row: VisibleRow, view_state: RwSignal<TaskViewState>) -> impl IntoView {
    let id = row.task.id;
    let has_children = row.has_children();
    let class = row_class(&row);
    let status = row.task.status;

    let on_click = move |ev: web_sys::MouseEvent| {
        if has_children {
            ev.stop_propagation();
            view_state.update(|v| v.toggle(id));
            debug!("[TREE] Toggled task {}", id);
        }
    };

    view! {
        <tr class=class on:click=on_click>
            <td>
                <div class="task-id-cell" style={indent_style(row.depth)}>
                    {has_children.then(|| view! {
                        <span class="expand-indicator">{if row.expanded { "▼" } else { "▶" }}</span>
                    })}
                    {id}
                </div>
            </td>
            <td>{row.task.name.clone()}</td>
            <td>
                <span class={status.css_class()}>{status.label()}</span>
            </td>
            <td>{row.task.start_label().to_string()}</td>
            <td>{row.task.due_label().to_string()}</td>
            <td class="task-detail">{row.detail.to_string()}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskStatus};
    use crate::tree::RowDetail;

    fn row(child_count: usize, highlighted: bool) -> VisibleRow {
        VisibleRow {
            task: Task {
                id: 1,
                project_id: 1,
                name: "Task".to_string(),
                status: TaskStatus::Planned,
                parent_task_id: None,
                depends_on: vec![],
                start_date: None,
                due_date: None,
            },
            depth: 0,
            child_count,
            expanded: false,
            highlighted,
            detail: RowDetail::None,
        }
    }

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(&row(0, false)), "task-row");
        assert_eq!(row_class(&row(2, false)), "task-row expandable");
        assert_eq!(row_class(&row(0, true)), "task-row highlighted");
        assert_eq!(row_class(&row(1, true)), "task-row expandable highlighted");
    }

    #[test]
    fn test_indent_grows_with_depth() {
        assert_eq!(indent_style(0), "padding-left: 0px;");
        assert_eq!(indent_style(3), "padding-left: 60px;");
    }
}
