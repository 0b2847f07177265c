use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            message,
        }
    }
}

pub trait Loggable {
    fn add_log(&mut self, message: String);
    fn get_logs(&self) -> &[LogEntry];
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects DEBUG over INFO.
/// Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagnostics {
        logs: Vec<LogEntry>,
    }

    impl Loggable for Diagnostics {
        fn add_log(&mut self, message: String) {
            self.logs.push(LogEntry::new(message));
        }

        fn get_logs(&self) -> &[LogEntry] {
            &self.logs
        }
    }

    #[test]
    fn test_logs_keep_insertion_order() {
        let mut diagnostics = Diagnostics { logs: Vec::new() };
        diagnostics.add_log("first".to_string());
        diagnostics.add_log("second".to_string());

        let logs = diagnostics.get_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "first");
        assert_eq!(logs[1].message, "second");
        assert!(logs[0].timestamp <= logs[1].timestamp);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
