//! Configuration for mirrorshim
//!
//! Settings are read once from the environment at startup and then passed
//! explicitly to the compiler and the CLI handlers. Command-line flags
//! override the environment.
//!
//! # Environment Variables
//!
//! - `MIRRORSHIM_MIRRORS`: mirror spec, `mirrorOf|url` pairs joined by `;` - default: unset
//! - `MIRRORSHIM_ALLOW_FALLBACK`: drop unreachable mirrors instead of failing (1|true|yes|on) - default: false
//! - `MIRRORSHIM_CONTEXT_DIR`: directory holding the project's `pom.xml` - default: "."
//! - `MIRRORSHIM_BUILD_OPTIONS`: extra build-tool options, whitespace separated - default: none
//! - `MIRRORSHIM_SETTINGS_PATH`: where the settings document is written - default: `~/.m2/mirror-settings.xml`
//! - `MIRRORSHIM_PROBE_TIMEOUT`: reachability probe timeout in seconds - default: "10"
//! - `MIRRORSHIM_LOG_LEVEL`: logging level - default: "info"

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
const MAX_PROBE_TIMEOUT_SECS: u64 = 300;
const SETTINGS_FILE_NAME: &str = "mirror-settings.xml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    pub mirror_spec: Option<String>,
    pub allow_fallback: bool,
    pub context_dir: PathBuf,
    pub build_options: Vec<String>,
    pub settings_path: PathBuf,
    pub probe_timeout_secs: u64,
    pub log_level: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            mirror_spec: None,
            allow_fallback: false,
            context_dir: PathBuf::from("."),
            build_options: Vec::new(),
            settings_path: default_settings_path(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ShimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mirror_spec = env::var("MIRRORSHIM_MIRRORS").ok();

        let allow_fallback = env::var("MIRRORSHIM_ALLOW_FALLBACK")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.allow_fallback);

        let context_dir = env::var("MIRRORSHIM_CONTEXT_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.context_dir);

        let build_options = env::var("MIRRORSHIM_BUILD_OPTIONS")
            .map(|v| split_options(&v))
            .unwrap_or_default();

        let settings_path = env::var("MIRRORSHIM_SETTINGS_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.settings_path);

        let probe_timeout_secs = match env::var("MIRRORSHIM_PROBE_TIMEOUT") {
            Ok(v) => v.trim().parse::<u64>().map_err(|e| ConfigError::ParseError {
                field: "MIRRORSHIM_PROBE_TIMEOUT".to_string(),
                error: e.to_string(),
            })?,
            Err(_) => defaults.probe_timeout_secs,
        };

        let log_level = env::var("MIRRORSHIM_LOG_LEVEL")
            .unwrap_or(defaults.log_level)
            .to_lowercase();

        Ok(Self {
            mirror_spec,
            allow_fallback,
            context_dir,
            build_options,
            settings_path,
            probe_timeout_secs,
            log_level,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Probe timeout must be at least 1 second".to_string(),
            ));
        }
        if self.probe_timeout_secs > MAX_PROBE_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(format!(
                "Probe timeout cannot exceed {} seconds",
                MAX_PROBE_TIMEOUT_SECS
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn pom_path(&self) -> PathBuf {
        self.context_dir.join("pom.xml")
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else disables it
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn split_options(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".m2"))
        .unwrap_or_else(env::temp_dir)
        .join(SETTINGS_FILE_NAME)
}
