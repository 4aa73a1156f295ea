//! Output formatting for command results
//!
//! Human output is meant for build logs; JSON output for scripts that need
//! the settings path and build arguments.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use crate::cli::commands::OutputFormatArg;
use crate::mirror::{DroppedMirror, MirrorRule, ProbeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Human,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Result of `mirrorshim compile`
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    /// `None` when no document was written and default resolution applies
    pub settings_path: Option<PathBuf>,
    pub mirrors: Vec<MirrorRule>,
    pub dropped: Vec<DroppedMirror>,
    pub maven_args: Vec<String>,
}

/// Result of `mirrorshim probe`
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub status: ProbeStatus,
    pub reachable: bool,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_compile(&self, report: &CompileReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize compile report to JSON"),
            OutputFormat::Human => Ok(self.format_compile_human(report)),
        }
    }

    pub fn format_probe(&self, report: &ProbeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize probe report to JSON"),
            OutputFormat::Human => {
                let verdict = if report.reachable {
                    "reachable"
                } else {
                    "unreachable"
                };
                Ok(format!("{}: {} ({})", report.url, verdict, report.status))
            }
        }
    }

    fn format_compile_human(&self, report: &CompileReport) -> String {
        let mut out = String::new();

        match &report.settings_path {
            Some(path) => {
                let _ = writeln!(
                    out,
                    "Mirror settings: {} ({} mirror{})",
                    path.display(),
                    report.mirrors.len(),
                    if report.mirrors.len() == 1 { "" } else { "s" }
                );
                for rule in &report.mirrors {
                    let _ = writeln!(out, "  {} -> {}", rule.mirror_of, rule.url);
                }
            }
            None => {
                let _ = writeln!(out, "Mirror settings: none (default repository resolution)");
            }
        }

        if !report.dropped.is_empty() {
            let _ = writeln!(out, "Dropped:");
            for dropped in &report.dropped {
                let _ = writeln!(
                    out,
                    "  {} -> {} ({})",
                    dropped.mirror_of, dropped.url, dropped.status
                );
            }
        }

        let _ = write!(out, "Maven arguments: {}", report.maven_args.join(" "));
        out
    }
}
