//! App-owned surfaces that pane operations are allowed to touch.
//!
//! Panes never reach into the [`App`](crate::tui::app::App). The app lends
//! them a [`Ui`] with mutable borrows of the status bar, the third column and
//! the focus, and that is all a pane can change outside itself.

use tracing::trace;

use crate::tui::{
    enums::{Detail, Focus},
    status::StatusBar,
};

/// Layout state of the main row: projects and tasks are always shown, the
/// third column holds at most one detail view.
#[derive(Debug, Default)]
pub struct Contents {
    third_col: Option<Detail>,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `detail` in the third column, replacing whatever was there.
    pub fn show(&mut self, detail: Detail) {
        if let Some(previous) = self.third_col.replace(detail) {
            trace!(?previous, ?detail, "replaced third column");
        }
    }

    pub fn remove_third_col(&mut self) {
        self.third_col = None;
    }

    /// Remove the third column only if it is showing `detail`.
    pub fn hide(&mut self, detail: Detail) {
        if self.third_col == Some(detail) {
            self.third_col = None;
        }
    }

    pub fn third_col(&self) -> Option<Detail> {
        self.third_col
    }
}

/// Borrowed view of the shared surfaces, lent to pane operations.
pub struct Ui<'a> {
    pub status: &'a mut StatusBar,
    pub contents: &'a mut Contents,
    pub focus: &'a mut Focus,
}

impl Ui<'_> {
    pub fn set_focus(&mut self, focus: Focus) {
        *self.focus = focus;
    }
}
