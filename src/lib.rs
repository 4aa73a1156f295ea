//! mirrorshim - Maven build shim with a mirror policy compiler
//!
//! Given a mirror specification such as
//! `central|https://repo.example.com/maven2;*|https://nexus.example.com/m2`,
//! mirrorshim probes every mirror, drops or rejects unreachable ones, and
//! writes a Maven settings document the build can be pointed at with `-s`.
//!
//! # Example
//!
//! ```no_run
//! use mirrorshim::mirror::{HttpProbe, MirrorPolicy, MirrorPolicyCompiler, DEFAULT_PROBE_TIMEOUT};
//!
//! # fn example() -> anyhow::Result<()> {
//! let compiler = MirrorPolicyCompiler::new(HttpProbe::new(DEFAULT_PROBE_TIMEOUT)?);
//! let compilation = compiler.compile(Some("central|https://repo.example.com/maven2"), false)?;
//!
//! if let MirrorPolicy::Mirrors(document) = &compilation.policy {
//!     document.write_to(std::path::Path::new("settings.xml"))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod maven;
pub mod mirror;
pub mod settings;
pub mod util;

pub use config::{ConfigError, ShimConfig};
pub use mirror::{
    Compilation, DroppedMirror, MirrorError, MirrorPolicy, MirrorPolicyCompiler, MirrorProbe,
    MirrorRule, ProbeStatus,
};
pub use settings::{SettingsDocument, SettingsError};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
