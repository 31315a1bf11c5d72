use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
/// Initialize logging: stderr always, rotating files when `log_dir` is set.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let file_appender = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            Some(RollingFileAppender::new(config.rotation, log_dir, LOG_FILENAME))
        }
        None => None,
    };
    let level = config.log_level;
    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("teeny_utils={level},teeny={level}")))
    };
    if config.json_format {
        let json_file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json().with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_current_span(true).with_target(true).with_filter(env_filter())
        });
        let json_stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_current_span(true)
            .with_target(true).with_filter(env_filter());
        tracing_subscriber::registry()
            .with(json_file_layer).with(json_stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_target(true).with_ansi(false).with_filter(env_filter())
        });
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_target(false)
            .with_ansi(true).with_filter(env_filter());
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    Ok(())
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
