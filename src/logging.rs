//! File logging.
//!
//! The TUI owns stdout, so log records go to a timestamped file under the
//! data directory instead.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_LEVEL_ENV: &str = "PANEPLAN_LOG_LEVEL";

/// Install a file-backed subscriber writing into `<data_dir>/logs`.
///
/// Returns the log file path.
pub fn init_logging(data_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = data_dir.join("logs");
    fs::create_dir_all(&log_dir)?;

    let log_file_path = get_log_file_path(&log_dir);
    let file = fs::File::create(&log_file_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Lives as long as the process.
    std::mem::forget(guard);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_log_filter())
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(log_file_path)
}

fn build_log_filter() -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|raw| normalize_log_level(&raw))
        .unwrap_or("warn");
    EnvFilter::new(format!("{level},paneplan={level}"))
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

pub fn get_log_file_path(log_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    log_dir.join(format!("paneplan-{timestamp}.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_file_path() {
        let path = get_log_file_path(Path::new("/tmp/pp-logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("paneplan-"));
        assert!(name.ends_with(".log"));
        assert!(path.starts_with("/tmp/pp-logs"));
    }

    #[test]
    fn test_normalize_log_level() {
        assert_eq!(normalize_log_level(" DEBUG "), Some("debug"));
        assert_eq!(normalize_log_level("warning"), Some("warn"));
        assert_eq!(normalize_log_level("loud"), None);
    }
}
