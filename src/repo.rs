//! Repository contracts consumed by the panes.
//!
//! The panes never touch storage directly. They go through these traits, which
//! keeps the JSON store swappable and lets the pane logic be tested against an
//! in-memory fake.

use std::path::PathBuf;

use crate::project::Project;
use crate::task::Task;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize database: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for projects.
pub trait ProjectRepository {
    /// Store a new project and return it with its assigned id.
    fn create(&mut self, title: &str, notes: &str) -> StoreResult<Project>;
    /// All projects in creation order.
    fn get_all(&self) -> StoreResult<Vec<Project>>;
    fn update(&mut self, project: &Project) -> StoreResult<()>;
    /// Delete the project record only. Owned tasks are removed by the caller.
    fn delete(&mut self, project: &Project) -> StoreResult<()>;
}

/// Persistence operations for tasks, scoped by owning project.
pub trait TaskRepository {
    fn create(&mut self, project_id: u64, title: &str) -> StoreResult<Task>;
    /// Tasks of one project in creation order.
    fn get_all_by_project(&self, project_id: u64) -> StoreResult<Vec<Task>>;
    fn update(&mut self, task: &Task) -> StoreResult<()>;
    fn delete(&mut self, task: &Task) -> StoreResult<()>;
}
