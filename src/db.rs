//! JSON file storage and the repository implementations on top of it.
//!
//! The whole database lives in one JSON document. Every mutation is applied to
//! the in-memory copy and written back atomically; if the write fails the
//! in-memory copy is rolled back so memory and disk never disagree.

use std::cell::RefCell;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::repo::{ProjectRepository, StoreError, StoreResult, TaskRepository};
use crate::task::Task;

/// In-memory image of the database file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the database from a JSON file. A missing file yields an empty database.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Database::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&buf).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the database using an atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut f = fs::File::create(&tmp).map_err(write_err)?;
        f.write_all(data.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        Ok(())
    }

    pub fn next_project_id(&self) -> u64 {
        self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn next_task_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}

/// A database bound to the file it is persisted in.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    db: Database,
}

/// Store handle shared by the project and task repositories.
pub type SharedStore = Rc<RefCell<JsonStore>>;

impl JsonStore {
    /// Open the store at `path`, creating parent directories when needed.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let db = Database::load(path)?;
        tracing::debug!(
            path = %path.display(),
            projects = db.projects.len(),
            tasks = db.tasks.len(),
            "opened store"
        );
        Ok(JsonStore {
            path: path.to_path_buf(),
            db,
        })
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Apply `change` and persist the result, rolling back if either step fails.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Database) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let before = self.db.clone();
        let out = change(&mut self.db).and_then(|out| self.db.save(&self.path).map(|_| out));
        if out.is_err() {
            self.db = before;
        }
        out
    }
}

/// Project repository backed by a [`JsonStore`].
pub struct JsonProjectRepository {
    store: SharedStore,
}

impl JsonProjectRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl ProjectRepository for JsonProjectRepository {
    fn create(&mut self, title: &str, notes: &str) -> StoreResult<Project> {
        self.store.borrow_mut().commit(|db| {
            let project = Project {
                id: db.next_project_id(),
                title: title.to_string(),
                notes: (!notes.is_empty()).then(|| notes.to_string()),
                created_at_utc: Utc::now().timestamp(),
            };
            db.projects.push(project.clone());
            Ok(project)
        })
    }

    fn get_all(&self) -> StoreResult<Vec<Project>> {
        Ok(self.store.borrow().db.projects.clone())
    }

    fn update(&mut self, project: &Project) -> StoreResult<()> {
        self.store.borrow_mut().commit(|db| {
            let slot = db
                .projects
                .iter_mut()
                .find(|p| p.id == project.id)
                .ok_or(StoreError::NotFound {
                    kind: "project",
                    id: project.id,
                })?;
            *slot = project.clone();
            Ok(())
        })
    }

    fn delete(&mut self, project: &Project) -> StoreResult<()> {
        self.store.borrow_mut().commit(|db| {
            let idx = db
                .projects
                .iter()
                .position(|p| p.id == project.id)
                .ok_or(StoreError::NotFound {
                    kind: "project",
                    id: project.id,
                })?;
            db.projects.remove(idx);
            Ok(())
        })
    }
}

/// Task repository backed by a [`JsonStore`].
pub struct JsonTaskRepository {
    store: SharedStore,
}

impl JsonTaskRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl TaskRepository for JsonTaskRepository {
    fn create(&mut self, project_id: u64, title: &str) -> StoreResult<Task> {
        self.store.borrow_mut().commit(|db| {
            let task = Task {
                id: db.next_task_id(),
                project_id,
                title: title.to_string(),
                details: None,
                completed: false,
                due: None,
                created_at_utc: Utc::now().timestamp(),
            };
            db.tasks.push(task.clone());
            Ok(task)
        })
    }

    fn get_all_by_project(&self, project_id: u64) -> StoreResult<Vec<Task>> {
        Ok(self
            .store
            .borrow()
            .db
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    fn update(&mut self, task: &Task) -> StoreResult<()> {
        self.store.borrow_mut().commit(|db| {
            let slot = db
                .tasks
                .iter_mut()
                .find(|t| t.id == task.id)
                .ok_or(StoreError::NotFound {
                    kind: "task",
                    id: task.id,
                })?;
            *slot = task.clone();
            Ok(())
        })
    }

    fn delete(&mut self, task: &Task) -> StoreResult<()> {
        self.store.borrow_mut().commit(|db| {
            let idx = db
                .tasks
                .iter()
                .position(|t| t.id == task.id)
                .ok_or(StoreError::NotFound {
                    kind: "task",
                    id: task.id,
                })?;
            db.tasks.remove(idx);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, SharedStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(&dir.path().join("db.json")).unwrap();
        (dir, store.into_shared())
    }

    #[test]
    fn test_missing_file_is_empty_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::load(&dir.path().join("absent.json")).unwrap();
        assert!(db.projects.is_empty());
        assert!(db.tasks.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Database::load(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_ids_are_assigned_sequentially() {
        let (_dir, store) = open_temp();
        let mut repo = JsonProjectRepository::new(store);
        let a = repo.create("Home", "").unwrap();
        let b = repo.create("Work", "quarterly goals").unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.notes, None);
        assert_eq!(b.notes.as_deref(), Some("quarterly goals"));
    }

    #[test]
    fn test_tasks_are_scoped_by_project() {
        let (_dir, store) = open_temp();
        let mut tasks = JsonTaskRepository::new(store);
        tasks.create(1, "Mow lawn").unwrap();
        tasks.create(2, "Write report").unwrap();
        tasks.create(1, "Fix fence").unwrap();

        let titles: Vec<String> = tasks
            .get_all_by_project(1)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Mow lawn", "Fix fence"]);
    }

    #[test]
    fn test_delete_unknown_project_is_not_found() {
        let (_dir, store) = open_temp();
        let mut repo = JsonProjectRepository::new(store);
        let ghost = Project {
            id: 42,
            title: "Ghost".into(),
            notes: None,
            created_at_utc: 0,
        };
        let err = repo.delete(&ghost).unwrap_err();
        assert_eq!(err.to_string(), "project 42 not found");
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("db.json");
        let store = JsonStore::open(&path).unwrap().into_shared();
        let mut repo = JsonProjectRepository::new(store.clone());
        repo.create("Home", "").unwrap();

        // Removing the directory makes the next save fail.
        fs::remove_dir_all(dir.path().join("sub")).unwrap();
        assert!(repo.create("Work", "").is_err());
        assert_eq!(store.borrow().database().projects.len(), 1);
    }
}
