//! Subcommands and their handlers.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::db::JsonStore;
use crate::tui::{app::App, run::run_tui};

#[derive(Subcommand)]
pub enum Commands {
    /// Open the terminal UI (default).
    Ui,
    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Directory holding the default database and the logs.
pub fn data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".paneplan")
}

pub fn default_db_path() -> PathBuf {
    data_dir().join("paneplan.json")
}

/// Open the database at `db_path` and run the TUI on it.
pub fn cmd_ui(db_path: &Path) {
    let store = match JsonStore::open(db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "could not open database");
            eprintln!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };
    let app = App::from_store(store.into_shared());
    if let Err(e) = run_tui(app) {
        tracing::error!(error = %e, "UI error");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Generate completions for `shell`.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
