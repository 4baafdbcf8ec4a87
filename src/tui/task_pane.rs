//! Task list pane for the active project.
//!
//! The pane is only ever reloaded by project activation. Everything else
//! edits the loaded collection in place and rebuilds the rows from it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, warn};

use crate::project::{title_is_valid, Project};
use crate::repo::{StoreError, TaskRepository};
use crate::task::Task;
use crate::tui::{
    colors::FOCUS_BLUE,
    contents::Ui,
    enums::{Detail, Focus},
    input::InputField,
    list::ListPane,
};

/// A task that could not be deleted during a cascade.
#[derive(Debug)]
pub struct CascadeFailure {
    pub task_id: u64,
    pub error: StoreError,
}

pub struct TaskPane {
    tasks: Vec<Task>,
    list: ListPane<usize>,
    new_task: InputField,
    repo: Box<dyn TaskRepository>,
    project_id: Option<u64>,
    active: Option<usize>,
}

impl TaskPane {
    pub fn new(repo: Box<dyn TaskRepository>) -> Self {
        Self {
            tasks: Vec::new(),
            list: ListPane::new(),
            new_task: InputField::new("+[New Task]"),
            repo,
            project_id: None,
            active: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn list(&self) -> &ListPane<usize> {
        &self.list
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.new_task
    }

    pub fn active(&self) -> Option<&Task> {
        self.active.and_then(|i| self.tasks.get(i))
    }

    /// True once a project's tasks are loaded, even if there are none.
    pub fn is_scoped(&self) -> bool {
        self.project_id.is_some()
    }

    pub fn select_next(&mut self) {
        self.list.select_next();
    }

    pub fn select_prev(&mut self) {
        self.list.select_prev();
    }

    fn rebuild(&mut self) {
        self.list.clear();
        for (i, task) in self.tasks.iter().enumerate() {
            self.list.add_row(task.row_label(), Some(i));
        }
    }

    /// Load the tasks of `project`, replacing whatever was shown.
    pub fn load_project_tasks(&mut self, project: &Project, ui: &mut Ui) {
        self.project_id = Some(project.id);
        self.active = None;
        self.tasks = match self.repo.get_all_by_project(project.id) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(project = project.id, error = %e, "could not load tasks");
                ui.status.error(format!("Could not load Tasks: {e}"));
                Vec::new()
            }
        };
        debug!(project = project.id, count = self.tasks.len(), "loaded tasks");
        self.rebuild();
        self.list.select(0);
    }

    /// Empty the pane and forget the scoped project.
    pub fn clear_list(&mut self) {
        self.tasks.clear();
        self.list.clear();
        self.project_id = None;
        self.active = None;
    }

    /// Delete every loaded task. Failures are collected, not retried.
    pub fn delete_all(&mut self) -> Vec<CascadeFailure> {
        let mut failures = Vec::new();
        for task in &self.tasks {
            if let Err(error) = self.repo.delete(task) {
                failures.push(CascadeFailure {
                    task_id: task.id,
                    error,
                });
            }
        }
        failures
    }

    /// Create a task in the scoped project from the input field's text.
    pub fn create(&mut self, ui: &mut Ui) {
        let Some(project_id) = self.project_id else {
            ui.status.error("Select a project before adding tasks");
            return;
        };
        let title = self.new_task.text().trim().to_string();
        if !title_is_valid(&title) {
            ui.status.error("Task title should be at least 3 character");
            return;
        }

        match self.repo.create(project_id, &title) {
            Ok(task) => {
                info!(id = task.id, project = project_id, "created task");
                self.tasks.push(task);
                let index = self.tasks.len() - 1;
                let row = self.list.add_row(self.tasks[index].row_label(), Some(index));
                self.list.select(row);
                self.new_task.clear();
                ui.status.success(format!("Task {title} created"));
            }
            Err(e) => {
                warn!(project = project_id, error = %e, "could not create task");
                ui.status.error(format!("Failed to create Task: {e}"));
            }
        }
    }

    /// Make `tasks[index]` the active task and show its detail.
    pub fn activate(&mut self, index: usize, ui: &mut Ui) {
        if index >= self.tasks.len() {
            return;
        }
        self.active = Some(index);
        ui.contents.show(Detail::Task);
        ui.set_focus(Focus::Detail);
    }

    pub fn activate_selected(&mut self, ui: &mut Ui) {
        if let Some(index) = self.list.selected_action() {
            self.activate(index, ui);
        }
    }

    /// Flip the active task's completion and persist it.
    pub fn toggle_active_complete(&mut self, ui: &mut Ui) {
        let Some(index) = self.active else {
            return;
        };
        let task = &mut self.tasks[index];
        task.completed = !task.completed;

        if let Err(e) = self.repo.update(&self.tasks[index]) {
            warn!(id = self.tasks[index].id, error = %e, "could not update task");
            self.tasks[index].completed = !self.tasks[index].completed;
            ui.status.error(format!("Failed to update Task: {e}"));
            return;
        }
        let selected = self.list.selected();
        self.rebuild();
        if let Some(row) = selected {
            self.list.select(row);
        }
    }

    /// Delete the active task.
    pub fn remove_active(&mut self, ui: &mut Ui) {
        let Some(index) = self.active else {
            return;
        };
        if let Err(e) = self.repo.delete(&self.tasks[index]) {
            warn!(id = self.tasks[index].id, error = %e, "could not delete task");
            ui.status.error(format!("Failed to remove Task: {e}"));
            return;
        }

        let task = self.tasks.remove(index);
        info!(id = task.id, "removed task");
        self.active = None;
        self.rebuild();
        if !self.tasks.is_empty() {
            self.list.select(index.min(self.tasks.len() - 1));
        }
        ui.contents.hide(Detail::Task);
        ui.status.success(format!("Removed Task: {}", task.title));
        ui.set_focus(Focus::Tasks);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, focus: Focus) {
        let border = if matches!(focus, Focus::Tasks | Focus::NewTask) {
            Style::default().fg(FOCUS_BLUE)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Tasks");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if !self.is_scoped() {
            f.render_widget(Paragraph::new("Select a project to see its tasks"), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        self.list
            .render(f, chunks[0], Block::default(), focus == Focus::Tasks);
        self.new_task.render(f, chunks[1], focus == Focus::NewTask);
    }
}
