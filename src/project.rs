//! Project data structure.
//!
//! A project is a named bucket of tasks. Projects are listed in the left pane
//! in the order the repository returns them, which is creation order.

use serde::{Deserialize, Serialize};

/// Minimum number of characters a project or task title must have.
pub const MIN_TITLE_LEN: usize = 3;

/// A named collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at_utc: i64,
}

impl Project {
    /// Label used for the project's row in the project list.
    pub fn row_label(&self) -> String {
        format!("- {}", self.title)
    }
}

/// Check that a title is long enough to be stored.
///
/// Surrounding whitespace does not count towards the length.
pub fn title_is_valid(title: &str) -> bool {
    title.trim().chars().count() >= MIN_TITLE_LEN
}
