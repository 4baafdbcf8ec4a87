//! Task data structure.
//!
//! A task always belongs to exactly one project. Completion and due date are
//! shown in the task pane and the task detail view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single work item owned by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub project_id: u64,
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    pub created_at_utc: i64,
}

impl Task {
    /// Label used for the task's row, with a completion checkbox.
    pub fn row_label(&self) -> String {
        let check = if self.completed { "[x]" } else { "[ ]" };
        format!("{} {}", check, self.title)
    }
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            match days {
                0 => "today".into(),
                1 => "tomorrow".into(),
                n if n > 1 => format!("in {n}d"),
                n => format!("{}d late", -n),
            }
        }
    }
}
