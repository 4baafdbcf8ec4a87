//! Main application logic for the terminal user interface.
//!
//! `App` is the composition root: it owns every pane and the shared surfaces
//! (status bar, third column, focus), dispatches key events by focus, and
//! lends the surfaces to pane operations as a [`Ui`].

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::debug;

use crate::db::{JsonProjectRepository, JsonTaskRepository, SharedStore};
use crate::repo::{ProjectRepository, TaskRepository};
use crate::tui::{
    contents::{Contents, Ui},
    detail_pane::DetailPane,
    enums::{Detail, Focus},
    input::InputOutcome,
    project_pane::ProjectPane,
    status::{StatusBar, StatusKind},
    task_pane::TaskPane,
};

const CONFIRM_DURATION: Duration = Duration::from_secs(30);

/// Main application state for the terminal user interface.
pub struct App {
    projects: ProjectPane,
    tasks: TaskPane,
    detail: DetailPane,
    status: StatusBar,
    contents: Contents,
    focus: Focus,
    /// Deadline of a pending project-delete confirmation.
    confirm_delete: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Build the app over the given repositories and load the project list.
    pub fn new(
        project_repo: Box<dyn ProjectRepository>,
        task_repo: Box<dyn TaskRepository>,
    ) -> Self {
        let mut app = App {
            projects: ProjectPane::new(project_repo),
            tasks: TaskPane::new(task_repo),
            detail: DetailPane::new(),
            status: StatusBar::new(),
            contents: Contents::new(),
            focus: Focus::Projects,
            confirm_delete: None,
            should_quit: false,
        };
        let (projects, _, mut ui) = app.parts();
        projects.load_all(false, &mut ui);
        app
    }

    /// Build the app over a JSON store.
    pub fn from_store(store: SharedStore) -> Self {
        App::new(
            Box::new(JsonProjectRepository::new(store.clone())),
            Box::new(JsonTaskRepository::new(store)),
        )
    }

    fn parts(&mut self) -> (&mut ProjectPane, &mut TaskPane, Ui<'_>) {
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

    pub fn projects(&self) -> &ProjectPane {
        &self.projects
    }

    pub fn tasks(&self) -> &TaskPane {
        &self.tasks
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Handle one key event. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.handle_key_at(key, Instant::now())
    }

    pub(crate) fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }
        if let Some(deadline) = self.confirm_delete.take() {
            if now < deadline {
                self.handle_confirm_input(key.code);
                return false;
            }
            debug!("delete confirmation expired");
        }

        if !self.focus.is_typing() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return true;
                }
                KeyCode::Char('p') => {
                    self.focus = Focus::Projects;
                    return false;
                }
                KeyCode::Char('t') if self.tasks.is_scoped() => {
                    self.focus = Focus::Tasks;
                    return false;
                }
                _ => {}
            }
        }

        debug!(code = ?key.code, focus = ?self.focus, "key");
        match self.focus {
            Focus::Projects => self.handle_projects_input(key.code),
            Focus::NewProject => self.handle_new_project_input(key.code),
            Focus::Tasks => self.handle_tasks_input(key.code),
            Focus::NewTask => self.handle_new_task_input(key.code),
            Focus::Detail => self.handle_detail_input(key.code),
            Focus::ProjectNotes => self.handle_notes_input(key.code),
        }
        self.should_quit
    }

    fn handle_projects_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.projects.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.projects.select_prev(),
            KeyCode::Enter => {
                let (projects, tasks, mut ui) = self.parts();
                projects.activate_selected(tasks, &mut ui);
            }
            KeyCode::Char('n') => self.focus = Focus::NewProject,
            KeyCode::Char('D') => self.request_project_delete(),
            KeyCode::Right | KeyCode::Char('l') if self.tasks.is_scoped() => {
                self.focus = Focus::Tasks
            }
            _ => {}
        }
    }

    fn handle_new_project_input(&mut self, key: KeyCode) {
        match self.projects.input_mut().handle_key(key) {
            InputOutcome::Submit => {
                let (projects, tasks, mut ui) = self.parts();
                projects.create(tasks, &mut ui);
            }
            InputOutcome::Cancel => self.focus = Focus::Projects,
            InputOutcome::Edited => {}
        }
    }

    fn handle_tasks_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.tasks.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.tasks.select_prev(),
            KeyCode::Enter => {
                let (_, tasks, mut ui) = self.parts();
                tasks.activate_selected(&mut ui);
            }
            KeyCode::Char('n') => self.focus = Focus::NewTask,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Esc => self.focus = Focus::Projects,
            KeyCode::Right | KeyCode::Char('l') if self.contents.third_col().is_some() => {
                self.focus = Focus::Detail
            }
            _ => {}
        }
    }

    fn handle_new_task_input(&mut self, key: KeyCode) {
        match self.tasks.input_mut().handle_key(key) {
            InputOutcome::Submit => {
                let (_, tasks, mut ui) = self.parts();
                tasks.create(&mut ui);
            }
            InputOutcome::Cancel => self.focus = Focus::Tasks,
            InputOutcome::Edited => {}
        }
    }

    fn handle_detail_input(&mut self, key: KeyCode) {
        match (self.contents.third_col(), key) {
            (_, KeyCode::Esc | KeyCode::Left | KeyCode::Char('h')) => self.focus = Focus::Tasks,
            (Some(Detail::Task), KeyCode::Char(' ')) => {
                let (_, tasks, mut ui) = self.parts();
                tasks.toggle_active_complete(&mut ui);
            }
            (Some(Detail::Task), KeyCode::Char('d')) => {
                let (_, tasks, mut ui) = self.parts();
                tasks.remove_active(&mut ui);
            }
            (Some(Detail::Project), KeyCode::Char('e')) => {
                if let Some(project) = self.projects.active() {
                    self.detail.begin_notes_edit(project);
                    self.focus = Focus::ProjectNotes;
                }
            }
            (Some(Detail::Project), KeyCode::Char('D')) => self.request_project_delete(),
            (None, _) => self.focus = Focus::Tasks,
            _ => {}
        }
    }

    fn handle_notes_input(&mut self, key: KeyCode) {
        match self.detail.notes_mut().handle_key(key) {
            InputOutcome::Submit => {
                let notes = self.detail.notes_mut().text().to_string();
                let (projects, _, mut ui) = self.parts();
                projects.update_active_notes(&notes, &mut ui);
                self.focus = Focus::Detail;
            }
            InputOutcome::Cancel => self.focus = Focus::Detail,
            InputOutcome::Edited => {}
        }
    }

    fn request_project_delete(&mut self) {
        let Some(project) = self.projects.active() else {
            self.status.info("Open a project first");
            return;
        };
        let prompt = format!(
            "Delete project {} and all its tasks? (y to confirm, any other key to cancel)",
            project.title
        );
        let now = Instant::now();
        self.status
            .show_at(prompt, StatusKind::Error, CONFIRM_DURATION, now);
        self.confirm_delete = Some(now + CONFIRM_DURATION);
    }

    fn handle_confirm_input(&mut self, key: KeyCode) {
        if key == KeyCode::Char('y') {
            let (projects, tasks, mut ui) = self.parts();
            projects.remove_active(tasks, &mut ui);
        } else {
            self.status.info("Delete cancelled");
        }
    }

    fn key_hints(&self) -> &'static str {
        match self.focus {
            Focus::Projects => "j/k: move  Enter: open  n: new project  D: delete  q: quit",
            Focus::NewProject | Focus::NewTask => "Enter: create  Esc: cancel",
            Focus::Tasks => "j/k: move  Enter: details  n: new task  p: projects  q: quit",
            Focus::Detail => "Esc: back to tasks  p: projects  q: quit",
            Focus::ProjectNotes => "Enter: save  Esc: cancel",
        }
    }

    /// Draw the projects, tasks and optional third column above the status row.
    pub fn render(&mut self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        let third_col = self.contents.third_col();
        let mut constraints = vec![Constraint::Length(30), Constraint::Min(20)];
        if third_col.is_some() {
            constraints.push(Constraint::Length(36));
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[0]);

        self.projects.render(f, cols[0], self.focus);
        self.tasks.render(f, cols[1], self.focus);

        let detail_focused = matches!(self.focus, Focus::Detail | Focus::ProjectNotes);
        match third_col {
            Some(Detail::Project) => {
                if let Some(project) = self.projects.active() {
                    self.detail.render_project(
                        f,
                        cols[2],
                        project,
                        self.tasks.tasks(),
                        detail_focused,
                        self.focus == Focus::ProjectNotes,
                    );
                }
            }
            Some(Detail::Task) => {
                if let Some(task) = self.tasks.active() {
                    self.detail.render_task(f, cols[2], task, detail_focused);
                }
            }
            None => {}
        }

        self.status.render(f, rows[1], self.key_hints());
    }

    /// Expire the status message and a pending delete confirmation.
    pub fn tick(&mut self, now: Instant) {
        self.status.tick(now);
        if self.confirm_delete.is_some_and(|deadline| now >= deadline) {
            self.confirm_delete = None;
        }
    }

    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering, input and status expiry until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
            self.tick(Instant::now());
        }
        Ok(())
    }
}
