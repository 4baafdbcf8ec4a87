//! `pp` binary: parses the command line, sets up logging and opens the UI.

use clap::Parser;

use paneplan::cli::Cli;
use paneplan::cmd::{cmd_completions, cmd_ui, data_dir, default_db_path, Commands};
use paneplan::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Ui => {
            let db_path = cli.db.unwrap_or_else(default_db_path);
            if let Err(e) = init_logging(&data_dir()) {
                eprintln!("warning: failed to initialize logging: {e}");
            }
            cmd_ui(&db_path);
        }
    }
}
