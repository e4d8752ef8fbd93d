use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for scripted runs and one-shot subcommands
    Stderr,
    /// Appended to a file; the TUI owns the terminal while it runs
    File(PathBuf),
}

/// Initialize the logging system
pub fn init_logger(default_level: &str, target: LogTarget) -> io::Result<()> {
    // Use RUST_LOG environment variable, falling back to the given level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let ansi = target == LogTarget::Stderr;
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    // try_init so tests and repeated calls don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init();

    Ok(())
}

/// Log an info message with a short tag prefix
pub fn log_info(tag: &str, message: impl std::fmt::Display) {
    info!("{} {}", tag, message);
}

/// Log a warning message with a short tag prefix
pub fn log_warn(tag: &str, message: impl std::fmt::Display) {
    warn!("{} {}", tag, message);
}

/// Log an error message with a short tag prefix
pub fn log_error(tag: &str, message: impl std::fmt::Display) {
    error!("{} {}", tag, message);
}

/// Log a debug message
pub fn log_debug(message: impl std::fmt::Display) {
    debug!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_keeps_logs_off_the_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statbot.log");

        init_logger("debug", LogTarget::File(path.clone())).unwrap();
        log_warn("[tui]", "redraw skipped");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[tui] redraw skipped"));
        assert!(!written.contains('\u{1b}'));
    }

    #[test]
    fn test_file_target_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("statbot.log");
        assert!(init_logger("debug", LogTarget::File(path)).is_err());
    }
}
