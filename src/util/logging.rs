//! Structured logging setup for mirrorshim
//!
//! Logs go to stderr through a `tracing` subscriber so that stdout stays free
//! for command output. `RUST_LOG` takes precedence over the configured level.
//!
//! # Example
//!
//! ```no_run
//! use mirrorshim::util::{init_logging, LoggingConfig};
//! use tracing::Level;
//!
//! init_logging(LoggingConfig::with_level(Level::DEBUG));
//! tracing::info!("Compiling mirror policy");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Emit one JSON object per line instead of console text
    pub use_json: bool,

    /// Include the module target (e.g. mirrorshim::mirror::compiler)
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Reads `MIRRORSHIM_LOG_JSON` on top of the given level
    pub fn from_env(level: Level) -> Self {
        let use_json = env::var("MIRRORSHIM_LOG_JSON")
            .map(|v| crate::config::parse_flag(&v))
            .unwrap_or(false);

        Self {
            level,
            use_json,
            include_target: level >= Level::DEBUG,
            include_location: level == Level::TRACE,
        }
    }
}

/// Parses a log level, falling back to INFO for unknown values
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter
                .add_directive(
                    format!("mirrorshim={}", config.level)
                        .parse()
                        .unwrap_or_else(|_| LevelFilter::INFO.into()),
                )
                .add_directive(LevelFilter::WARN.into());
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
