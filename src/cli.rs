use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Keyboard-driven personal task manager.
/// Storage defaults to ~/.paneplan/paneplan.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "pp", version, about = "Multi-pane terminal task manager")]
pub struct Cli {
    /// Path to the JSON database file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
