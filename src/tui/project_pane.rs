//! Project list pane.
//!
//! Owns the in-memory project collection, the "new project" input and the
//! active project. Every change of the active project goes through
//! [`ProjectPane::activate`], which is where the task pane is reloaded and the
//! project detail is shown.
//!
//! Row layout, top to bottom:
//!
//! ```text
//! Dynamic Lists      (marker)
//! ─────────────      (marker)
//! - Today            DynamicList::Today
//! - Upcoming         DynamicList::Upcoming
//! - No Due Date      DynamicList::Unscheduled
//!                    (marker, spacer)
//! Projects           (marker)
//! ─────────────      (marker)
//! - Home             Project(0)
//! - Work             Project(1)
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};
use tracing::{debug, info, warn};

use crate::project::{title_is_valid, Project};
use crate::repo::ProjectRepository;
use crate::tui::{
    colors::FOCUS_BLUE,
    contents::Ui,
    enums::{Detail, DynamicList, Focus, PaneState},
    input::InputField,
    list::ListPane,
    task_pane::TaskPane,
};

const SEPARATOR_WIDTH: usize = 25;

/// Action carried by a selectable row of the project list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectRow {
    Dynamic(DynamicList),
    /// Index into the project collection.
    Project(usize),
}

pub struct ProjectPane {
    projects: Vec<Project>,
    list: ListPane<ProjectRow>,
    new_project: InputField,
    repo: Box<dyn ProjectRepository>,
    active: Option<usize>,
}

impl ProjectPane {
    /// Create an empty pane. Call [`ProjectPane::load_all`] to populate it.
    pub fn new(repo: Box<dyn ProjectRepository>) -> Self {
        Self {
            projects: Vec::new(),
            list: ListPane::new(),
            new_project: InputField::new("+[New Project]"),
            repo,
            active: None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn list(&self) -> &ListPane<ProjectRow> {
        &self.list
    }

    pub fn input(&self) -> &InputField {
        &self.new_project
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.new_project
    }

    pub fn active(&self) -> Option<&Project> {
        self.active.and_then(|i| self.projects.get(i))
    }

    /// Mutable access to the active project inside the backing collection.
    pub fn active_mut(&mut self) -> Option<&mut Project> {
        self.active.and_then(|i| self.projects.get_mut(i))
    }

    pub fn state(&self) -> PaneState {
        match (self.active, self.projects.is_empty()) {
            (Some(_), _) => PaneState::ProjectActive,
            (None, true) => PaneState::Empty,
            (None, false) => PaneState::Loaded,
        }
    }

    pub fn select_next(&mut self) {
        self.list.select_next();
    }

    pub fn select_prev(&mut self) {
        self.list.select_prev();
    }

    fn add_section(&mut self, name: &str) {
        self.list.add_row(name, None);
        self.list.add_row("─".repeat(SEPARATOR_WIDTH), None);
    }

    fn add_dynamic_lists(&mut self) {
        self.add_section("Dynamic Lists");
        for dynamic in DynamicList::ALL {
            self.list
                .add_row(dynamic.label(), Some(ProjectRow::Dynamic(dynamic)));
        }
    }

    fn add_project_row(&mut self, index: usize) -> usize {
        let label = self.projects[index].row_label();
        self.list.add_row(label, Some(ProjectRow::Project(index)))
    }

    /// Rebuild the whole list from the repository.
    ///
    /// On a fetch failure the pane is left without project rows but remains
    /// usable. `select_first` moves focus to this pane afterwards.
    pub fn load_all(&mut self, select_first: bool, ui: &mut Ui) {
        self.list.clear();
        self.active = None;
        self.add_dynamic_lists();
        self.list.add_row("", None);
        self.add_section("Projects");

        match self.repo.get_all() {
            Ok(projects) => {
                self.projects = projects;
                let first_row = self.list.item_count();
                for i in 0..self.projects.len() {
                    self.add_project_row(i);
                }
                if !self.projects.is_empty() {
                    self.list.select(first_row);
                }
                debug!(count = self.projects.len(), "loaded projects");
            }
            Err(e) => {
                warn!(error = %e, "could not load projects");
                self.projects.clear();
                ui.status.error(format!("Could not load Projects: {e}"));
            }
        }

        if select_first {
            ui.set_focus(Focus::Projects);
        }
    }

    /// Create a project from the input field's text.
    pub fn create(&mut self, tasks: &mut TaskPane, ui: &mut Ui) {
        let title = self.new_project.text().trim().to_string();
        if !title_is_valid(&title) {
            ui.status
                .error("Project name should be at least 3 character");
            return;
        }

        match self.repo.create(&title, "") {
            Ok(project) => {
                info!(id = project.id, title = %project.title, "created project");
                self.projects.push(project);
                let index = self.projects.len() - 1;
                let row = self.add_project_row(index);
                self.new_project.clear();
                self.list.select(row);
                self.activate(index, tasks, ui);
                ui.status.success(format!(
                    "Project {title} created. Press n to start adding new tasks."
                ));
            }
            Err(e) => {
                warn!(error = %e, title = %title, "could not create project");
                ui.status.error(format!("Failed to create Project: {e}"));
            }
        }
    }

    /// Make `projects[index]` the active project and bring the dependent
    /// panes in line with it.
    pub fn activate(&mut self, index: usize, tasks: &mut TaskPane, ui: &mut Ui) {
        let Some(project) = self.projects.get(index) else {
            return;
        };
        self.active = Some(index);
        debug!(id = project.id, "activated project");

        tasks.load_project_tasks(project, ui);
        ui.contents.show(Detail::Project);
        ui.set_focus(Focus::Tasks);
    }

    /// Handle Enter on the selected row.
    pub fn activate_selected(&mut self, tasks: &mut TaskPane, ui: &mut Ui) {
        match self.list.selected_action() {
            Some(ProjectRow::Project(index)) => self.activate(index, tasks, ui),
            Some(ProjectRow::Dynamic(dynamic)) => {
                ui.status
                    .info(format!("{} is not available yet", dynamic.feature_name()));
            }
            None => {}
        }
    }

    /// Delete the active project together with its tasks.
    ///
    /// Nothing changes unless the repository accepts the delete. Task deletes
    /// after that are best-effort since the parent is already gone.
    pub fn remove_active(&mut self, tasks: &mut TaskPane, ui: &mut Ui) {
        let Some(project) = self.active().cloned() else {
            return;
        };
        if let Err(e) = self.repo.delete(&project) {
            warn!(id = project.id, error = %e, "could not delete project");
            return;
        }

        let failures = tasks.delete_all();
        for failure in &failures {
            warn!(
                project = project.id,
                task = failure.task_id,
                error = %failure.error,
                "orphaned task left behind"
            );
        }
        tasks.clear_list();

        info!(id = project.id, title = %project.title, "removed project");
        let message = if failures.is_empty() {
            format!("Removed Project: {}", project.title)
        } else {
            format!(
                "Removed Project: {} ({} task(s) could not be removed)",
                project.title,
                failures.len()
            )
        };
        ui.status.success(message);
        ui.contents.remove_third_col();

        self.load_all(true, ui);
    }

    /// Replace the active project's notes and persist them.
    pub fn update_active_notes(&mut self, notes: &str, ui: &mut Ui) {
        let Some(index) = self.active else {
            return;
        };
        let notes = Some(notes.trim().to_string()).filter(|n| !n.is_empty());
        let project = &mut self.projects[index];
        let previous = std::mem::replace(&mut project.notes, notes);

        if let Err(e) = self.repo.update(&self.projects[index]) {
            warn!(id = self.projects[index].id, error = %e, "could not update project");
            self.projects[index].notes = previous;
            ui.status.error(format!("Failed to update Project: {e}"));
        } else {
            ui.status.success("Project notes saved");
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, focus: Focus) {
        let border = if matches!(focus, Focus::Projects | Focus::NewProject) {
            Style::default().fg(FOCUS_BLUE)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Projects");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        self.list
            .render(f, chunks[0], Block::default(), focus == Focus::Projects);
        self.new_project
            .render(f, chunks[1], focus == Focus::NewProject);
    }
}
