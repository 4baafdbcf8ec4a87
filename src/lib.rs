//! # paneplan
//!
//! A keyboard-driven personal task manager with a multi-pane terminal UI.
//!
//! ## Layout
//!
//! - **Projects** (left): dynamic lists, then every project in creation order
//! - **Tasks** (middle): tasks of the active project
//! - **Detail** (right, optional): the active project or the active task
//! - **Status** (bottom row): transient notices and key hints
//!
//! Activating a project reloads its tasks and shows the project detail.
//! Deleting the active project removes its tasks too and rebuilds the project
//! list from storage.
//!
//! Data is stored locally in `~/.paneplan/paneplan.json`.

pub mod cli;
pub mod cmd;
pub mod db;
pub mod logging;
pub mod project;
pub mod repo;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod contents;
    pub mod detail_pane;
    pub mod enums;
    pub mod input;
    pub mod list;
    pub mod project_pane;
    pub mod run;
    pub mod status;
    pub mod task_pane;
}

#[cfg(test)]
mod testing;
