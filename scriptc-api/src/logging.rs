//! Logging initialization
//!
//! Per-stage log control on top of `tracing-subscriber`. Hosts that
//! already own a subscriber skip this entirely.

use std::io;
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Per-stage log levels.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub walker: Option<Level>,
    pub orchestrator: Option<Level>,
    pub emitter: Option<Level>,
    pub diagnostics: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            walker: None,
            orchestrator: None,
            emitter: None,
            diagnostics: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "scriptc::walker" => self.walker.unwrap_or(self.global),
            "scriptc::orchestrator" => self.orchestrator.unwrap_or(self.global),
            "scriptc::emitter" => self.emitter.unwrap_or(self.global),
            "scriptc::diagnostics" => self.diagnostics.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored, for development
    Pretty,
    /// Compact single lines
    Compact,
    /// JSON, for build-tool integration
    Json,
}

/// Initialize logging with the given format, console only.
pub fn init(log_config: &LogConfig, format: LogFormat) {
    init_with_file::<&std::path::Path>(log_config, format, None);
}

/// Initialize logging, optionally mirroring output to a file.
pub fn init_with_file<P: AsRef<std::path::Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) {
    // Build filter targets
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("scriptc::walker", log_config.level_for("scriptc::walker"))
        .with_target(
            "scriptc::orchestrator",
            log_config.level_for("scriptc::orchestrator"),
        )
        .with_target("scriptc::emitter", log_config.level_for("scriptc::emitter"))
        .with_target(
            "scriptc::diagnostics",
            log_config.level_for("scriptc::diagnostics"),
        )
        .with_target("scriptc::api", log_config.global);

    // If file specified, output to both console and file
    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        let stdout_layer = fmt::layer()
            .with_writer(io::stdout)
            .with_filter(targets.clone());

        let file_layer = fmt::layer()
            .with_writer(move || file_handle.try_clone().expect("Failed to clone file handle"))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        // Console only
        let stdout_layer = create_format_layer(format, io::stdout).with_filter(targets);
        tracing_subscriber::registry().with(stdout_layer).init();
    }
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        let config = LogConfig::default();
        assert_eq!(config.global, Level::INFO);
        assert_eq!(config.level_for("scriptc::walker"), Level::INFO);
        assert_eq!(config.level_for("anything::else"), Level::INFO);
    }

    #[test]
    fn test_stage_override() {
        let config = LogConfig {
            emitter: Some(Level::TRACE),
            ..LogConfig::default()
        };
        assert_eq!(config.level_for("scriptc::emitter"), Level::TRACE);
        assert_eq!(config.level_for("scriptc::walker"), Level::INFO);
    }
}
