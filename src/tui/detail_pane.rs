//! Third-column detail views for the active project or task.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::project::Project;
use crate::task::{format_due_relative, Task};
use crate::tui::{colors::FOCUS_BLUE, input::InputField};

/// Detail column state. Only the project notes editor lives here; what is
/// shown comes from the panes' active selections.
pub struct DetailPane {
    notes: InputField,
}

impl Default for DetailPane {
    fn default() -> Self {
        Self::new()
    }
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn detail_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(FOCUS_BLUE)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

impl DetailPane {
    pub fn new() -> Self {
        Self {
            notes: InputField::new("notes"),
        }
    }

    /// Start editing `project`'s notes, pre-filled with the current value.
    pub fn begin_notes_edit(&mut self, project: &Project) {
        self.notes.set_text(project.notes.as_deref().unwrap_or(""));
    }

    pub fn notes_mut(&mut self) -> &mut InputField {
        &mut self.notes
    }

    pub fn render_project(
        &self,
        f: &mut Frame,
        area: Rect,
        project: &Project,
        tasks: &[Task],
        focused: bool,
        editing: bool,
    ) {
        let block = detail_block("Project", focused);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let done = tasks.iter().filter(|t| t.completed).count();
        let mut text = vec![
            field("Title", project.title.clone()),
            field("Tasks", format!("{} ({} done)", tasks.len(), done)),
            Line::from(""),
            field("Notes", ""),
        ];
        if !editing {
            text.push(Line::from(project.notes.clone().unwrap_or_else(|| "-".into())));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(text.len() as u16),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), chunks[0]);
        if editing {
            self.notes.render(f, chunks[1], true);
        }
        let hints = if editing {
            vec![hint("Enter: save  Esc: cancel")]
        } else {
            vec![
                Line::from(""),
                hint("e: edit notes"),
                hint("D: delete project"),
                hint("Esc: back to tasks"),
            ]
        };
        f.render_widget(Paragraph::new(hints), chunks[2]);
    }

    pub fn render_task(&self, f: &mut Frame, area: Rect, task: &Task, focused: bool) {
        let block = detail_block("Task", focused);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let today = Local::now().date_naive();
        let status = if task.completed { "Done" } else { "Open" };
        let due = match task.due {
            Some(d) => format!("{} ({})", d, format_due_relative(Some(d), today)),
            None => "-".to_string(),
        };
        let text = vec![
            field("Title", task.title.clone()),
            field("Status", status),
            field("Due", due),
            Line::from(""),
            field("Details", ""),
            Line::from(task.details.clone().unwrap_or_else(|| "-".into())),
            Line::from(""),
            hint("Space: toggle done"),
            hint("d: delete task"),
            hint("Esc: back to tasks"),
        ];
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    }
}
