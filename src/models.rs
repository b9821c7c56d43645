//! Frontend Models
//!
//! Data structures matching the project API payloads.

use serde::{Deserialize, Serialize};

/// Text shown for a missing date or metric
pub const MISSING: &str = "-";

/// Project summary (matches `GET /projects`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub task_count: u32,
    #[serde(default)]
    pub earliest_start_date: Option<String>,
    #[serde(default)]
    pub latest_end_date: Option<String>,
    #[serde(default)]
    pub duration_days: Option<i64>,
}

impl Project {
    pub fn earliest_start_label(&self) -> &str {
        date_label(self.earliest_start_date.as_deref())
    }

    pub fn latest_end_label(&self) -> &str {
        date_label(self.latest_end_date.as_deref())
    }

    pub fn duration_label(&self) -> String {
        self.duration_days
            .map(|days| days.to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "in progress", alias = "in-progress", alias = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// CSS class for the colored status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "status-badge status-planned",
            TaskStatus::InProgress => "status-badge status-in-progress",
            TaskStatus::Completed => "status-badge status-completed",
            TaskStatus::Cancelled => "status-badge status-cancelled",
        }
    }
}

/// Task data structure (matches `GET /projects/{id}/tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub project_id: u32,
    pub name: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub parent_task_id: Option<u32>,
    #[serde(default)]
    pub depends_on: Vec<u32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    pub fn start_label(&self) -> &str {
        date_label(self.start_date.as_deref())
    }

    pub fn due_label(&self) -> &str {
        date_label(self.due_date.as_deref())
    }
}

/// Dates are opaque display strings; only absence is special-cased
fn date_label(date: Option<&str>) -> &str {
    match date {
        Some(d) if !d.is_empty() => d,
        _ => MISSING,
    }
}
