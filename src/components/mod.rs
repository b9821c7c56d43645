//! UI Components
//!
//! Leptos components for the project table and task tree.

mod error_banner;
mod project_table;
mod task_list;
mod task_row;

pub use error_banner::ErrorBanner;
pub use project_table::ProjectTable;
pub use task_list::TaskList;
pub use task_row::TaskRow;
