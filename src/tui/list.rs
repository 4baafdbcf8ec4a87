//! Selectable list that mixes marker rows with data rows.
//!
//! Marker rows are section headers, separators and spacers: they carry no
//! action and keyboard traversal skips them. Data rows carry an action value,
//! normally an index into the owning pane's backing `Vec`. Panes rebuild the
//! list by walking their collection in order, so data-row indices always
//! mirror the collection.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::tui::colors::DIM_GRAY;

/// One display row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListRow<A> {
    Marker(String),
    Item { label: String, action: A },
}

impl<A> ListRow<A> {
    pub fn label(&self) -> &str {
        match self {
            ListRow::Marker(label) | ListRow::Item { label, .. } => label,
        }
    }

    fn is_selectable(&self) -> bool {
        matches!(self, ListRow::Item { .. })
    }
}

/// A scrollable list of [`ListRow`]s with a current selection.
#[derive(Debug)]
pub struct ListPane<A> {
    rows: Vec<ListRow<A>>,
    state: ListState,
}

impl<A> Default for ListPane<A> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            state: ListState::default(),
        }
    }
}

impl<A: Copy> ListPane<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every row and the selection.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.state = ListState::default();
    }

    /// Append a row. `None` makes it a non-selectable marker. Returns the row index.
    pub fn add_row(&mut self, label: impl Into<String>, action: Option<A>) -> usize {
        let label = label.into();
        self.rows.push(match action {
            Some(action) => ListRow::Item { label, action },
            None => ListRow::Marker(label),
        });
        self.rows.len() - 1
    }

    /// Select a row by display index. Out-of-range indices are ignored.
    pub fn select(&mut self, row: usize) {
        if row < self.rows.len() {
            self.state.select(Some(row));
        }
    }

    /// Select the last row.
    pub fn select_last(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.select(last);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Action of the selected row, if it is a data row.
    pub fn selected_action(&self) -> Option<A> {
        match self.rows.get(self.state.selected()?)? {
            ListRow::Item { action, .. } => Some(*action),
            ListRow::Marker(_) => None,
        }
    }

    /// Number of rows, markers included.
    pub fn item_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[ListRow<A>] {
        &self.rows
    }

    /// Actions of the data rows in display order.
    pub fn actions(&self) -> Vec<A> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                ListRow::Item { action, .. } => Some(*action),
                ListRow::Marker(_) => None,
            })
            .collect()
    }

    /// Every row's label in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(ListRow::label).collect()
    }

    /// Move to the next data row, skipping markers. Stays put at the end.
    pub fn select_next(&mut self) {
        let start = self.state.selected().map_or(0, |i| i + 1);
        if let Some(next) = (start..self.rows.len()).find(|&i| self.rows[i].is_selectable()) {
            self.state.select(Some(next));
        }
    }

    /// Move to the previous data row, skipping markers. Stays put at the top.
    pub fn select_prev(&mut self) {
        let end = match self.state.selected() {
            Some(i) => i,
            None => self.rows.len(),
        };
        if let Some(prev) = (0..end).rev().find(|&i| self.rows[i].is_selectable()) {
            self.state.select(Some(prev));
        }
    }

    /// Draw the rows inside `block`, highlighting the selection when focused.
    pub fn render(&mut self, f: &mut Frame, area: Rect, block: Block, focused: bool) {
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| match row {
                ListRow::Marker(label) => ListItem::new(Line::styled(
                    label.as_str(),
                    Style::default().fg(DIM_GRAY).add_modifier(Modifier::DIM),
                )),
                ListRow::Item { label, .. } => ListItem::new(Line::raw(label.as_str())),
            })
            .collect();

        let highlight = if focused {
            Style::default().bg(Color::Gray).fg(Color::Black)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, area, &mut self.state);
    }
}
