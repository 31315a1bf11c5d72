mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used when file logging is enabled.
pub const LOG_FILENAME: &str = "teeny.log";
/// Default directory for log files: `~/.teeny/logs`.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".teeny")
        .join("logs")
}
/// Configuration for the logging system.
pub struct LogConfig {
    /// Also write logs to rotating files in this directory.
    pub log_dir: Option<PathBuf>,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::WARN,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
