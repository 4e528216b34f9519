//! Tracing setup: compact lines on stderr, plus an optional JSON log file
//! rotated daily.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{EmpdeskError, Result};

const DEFAULT_LOG_FILE: &str = "empdesk.log";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("empdesk={level}"))
    })
}

/// Opens a daily-rotated appender for `path`, creating its directory first.
///
/// Rotated files are named `<file name>.<date>` next to `path`.
fn rolling_file(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);

    std::fs::create_dir_all(dir).map_err(|e| {
        EmpdeskError::Config(format!("Cannot create log directory {}: {e}", dir.display()))
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| EmpdeskError::Config(format!("Cannot open log file {}: {e}", path.display())))
}

/// Installs the global subscriber. `RUST_LOG` overrides the default
/// `empdesk=info` (or `empdesk=debug` when `verbose`).
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let json_file = log_file
        .map(rolling_file)
        .transpose()?
        .map(|appender| fmt::layer().with_writer(appender).with_ansi(false).json());

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(console)
        .with(json_file)
        .try_init()
        .map_err(|e| EmpdeskError::Config(format!("Cannot install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rolling_file_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs/nested/empdesk.log");

        rolling_file(&path).unwrap();
        assert!(temp_dir.path().join("logs/nested").is_dir());
    }

    #[test]
    fn test_rolling_file_unusable_directory_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = rolling_file(&blocker.join("empdesk.log")).unwrap_err();
        assert!(matches!(err, EmpdeskError::Config(_)));
        assert!(err.to_string().contains("Cannot create log directory"));
    }
}
