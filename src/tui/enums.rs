//! Enumerations for TUI state management.

/// Which widget receives key events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Projects,
    NewProject,
    Tasks,
    NewTask,
    Detail,
    ProjectNotes,
}

impl Focus {
    /// True while a text input owns the keyboard.
    pub fn is_typing(self) -> bool {
        matches!(self, Focus::NewProject | Focus::NewTask | Focus::ProjectNotes)
    }
}

/// What the third column is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Detail {
    Project,
    Task,
}

/// Computed task lists shown above the persisted projects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DynamicList {
    Today,
    Upcoming,
    Unscheduled,
}

impl DynamicList {
    pub const ALL: [DynamicList; 3] = [
        DynamicList::Today,
        DynamicList::Upcoming,
        DynamicList::Unscheduled,
    ];

    /// Row label in the project list.
    pub fn label(self) -> &'static str {
        match self {
            DynamicList::Today => "- Today",
            DynamicList::Upcoming => "- Upcoming",
            DynamicList::Unscheduled => "- No Due Date",
        }
    }

    /// Name used in status messages.
    pub fn feature_name(self) -> &'static str {
        match self {
            DynamicList::Today => "Today's Tasks",
            DynamicList::Upcoming => "Upcoming Tasks",
            DynamicList::Unscheduled => "Unscheduled Tasks",
        }
    }
}

/// Lifecycle of the project pane.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaneState {
    /// No projects loaded, either none exist or the fetch failed.
    Empty,
    Loaded,
    ProjectActive,
}
