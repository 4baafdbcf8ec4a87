//! In-memory repositories and a pane harness for unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;

use crate::project::Project;
use crate::repo::{ProjectRepository, StoreError, StoreResult, TaskRepository};
use crate::task::Task;
use crate::tui::{
    contents::{Contents, Ui},
    enums::Focus,
    project_pane::ProjectPane,
    status::StatusBar,
    task_pane::TaskPane,
};

/// Backing data plus failure switches and call counters.
#[derive(Debug, Default)]
pub struct MemoryState {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub project_calls: usize,
    pub task_calls: usize,
    pub fail_project_create: bool,
    pub fail_project_get_all: bool,
    pub fail_project_update: bool,
    pub fail_project_delete: bool,
    pub fail_task_get_all: bool,
    pub fail_task_create: bool,
    pub fail_task_update: bool,
    pub fail_task_delete: HashSet<u64>,
}

pub type Memory = Rc<RefCell<MemoryState>>;

fn injected() -> StoreError {
    StoreError::Write {
        path: "memory".into(),
        source: io::Error::other("disk full"),
    }
}

fn guard(fail: bool) -> StoreResult<()> {
    if fail {
        Err(injected())
    } else {
        Ok(())
    }
}

/// A memory store seeded with projects titled `titles`, ids starting at 1.
pub fn seeded(titles: &[&str]) -> Memory {
    let state = MemoryState {
        projects: titles
            .iter()
            .enumerate()
            .map(|(i, title)| Project {
                id: i as u64 + 1,
                title: title.to_string(),
                notes: None,
                created_at_utc: 0,
            })
            .collect(),
        ..MemoryState::default()
    };
    Rc::new(RefCell::new(state))
}

/// Add tasks titled `titles` to project `project_id`.
pub fn add_tasks(mem: &Memory, project_id: u64, titles: &[&str]) {
    let mut state = mem.borrow_mut();
    for title in titles {
        let id = state.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        state.tasks.push(Task {
            id,
            project_id,
            title: title.to_string(),
            details: None,
            completed: false,
            due: None,
            created_at_utc: 0,
        });
    }
}

pub struct MemoryProjects(pub Memory);

impl ProjectRepository for MemoryProjects {
    fn create(&mut self, title: &str, notes: &str) -> StoreResult<Project> {
        let mut state = self.0.borrow_mut();
        state.project_calls += 1;
        guard(state.fail_project_create)?;
        let project = Project {
            id: state.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            title: title.to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            created_at_utc: 0,
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    fn get_all(&self) -> StoreResult<Vec<Project>> {
        let mut state = self.0.borrow_mut();
        state.project_calls += 1;
        guard(state.fail_project_get_all)?;
        Ok(state.projects.clone())
    }

    fn update(&mut self, project: &Project) -> StoreResult<()> {
        let mut state = self.0.borrow_mut();
        state.project_calls += 1;
        guard(state.fail_project_update)?;
        if let Some(slot) = state.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project.clone();
        }
        Ok(())
    }

    fn delete(&mut self, project: &Project) -> StoreResult<()> {
        let mut state = self.0.borrow_mut();
        state.project_calls += 1;
        guard(state.fail_project_delete)?;
        state.projects.retain(|p| p.id != project.id);
        Ok(())
    }
}

pub struct MemoryTasks(pub Memory);

impl TaskRepository for MemoryTasks {
    fn create(&mut self, project_id: u64, title: &str) -> StoreResult<Task> {
        let mut state = self.0.borrow_mut();
        state.task_calls += 1;
        guard(state.fail_task_create)?;
        let task = Task {
            id: state.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            project_id,
            title: title.to_string(),
            details: None,
            completed: false,
            due: None,
            created_at_utc: 0,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    fn get_all_by_project(&self, project_id: u64) -> StoreResult<Vec<Task>> {
        let mut state = self.0.borrow_mut();
        state.task_calls += 1;
        guard(state.fail_task_get_all)?;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    fn update(&mut self, task: &Task) -> StoreResult<()> {
        let mut state = self.0.borrow_mut();
        state.task_calls += 1;
        guard(state.fail_task_update)?;
        if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task.clone();
        }
        Ok(())
    }

    fn delete(&mut self, task: &Task) -> StoreResult<()> {
        let mut state = self.0.borrow_mut();
        state.task_calls += 1;
        guard(state.fail_task_delete.contains(&task.id))?;
        state.tasks.retain(|t| t.id != task.id);
        Ok(())
    }
}

/// Panes and surfaces wired to one memory store, loaded like the app does.
pub struct Harness {
    pub mem: Memory,
    pub projects: ProjectPane,
    pub tasks: TaskPane,
    pub status: StatusBar,
    pub contents: Contents,
    pub focus: Focus,
}

impl Harness {
    pub fn new(mem: Memory) -> Self {
        let mut harness = Harness {
            projects: ProjectPane::new(Box::new(MemoryProjects(mem.clone()))),
            tasks: TaskPane::new(Box::new(MemoryTasks(mem.clone()))),
            mem,
            status: StatusBar::new(),
            contents: Contents::new(),
            focus: Focus::Projects,
        };
        let (projects, _, mut ui) = harness.parts();
        projects.load_all(false, &mut ui);
        harness
    }

    pub fn parts(&mut self) -> (&mut ProjectPane, &mut TaskPane, Ui<'_>) {
        (
            &mut self.projects,
            &mut self.tasks,
            Ui {
                status: &mut self.status,
                contents: &mut self.contents,
                focus: &mut self.focus,
            },
        )
    }

    pub fn project_calls(&self) -> usize {
        self.mem.borrow().project_calls
    }

    pub fn status(&self) -> &str {
        self.status.message().unwrap_or("")
    }
}
