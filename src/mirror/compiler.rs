//! Mirror policy compiler
//!
//! Turns a mirror specification into a settings document in a single forward
//! pass:
//!
//! 1. An absent or empty specification yields [`MirrorPolicy::Default`].
//! 2. Every descriptor is parsed up front; one malformed descriptor fails the
//!    whole compilation before any network traffic.
//! 3. Rules are probed strictly in input order. An unreachable mirror is fatal
//!    unless fallback is allowed, in which case only that rule is dropped.
//! 4. Surviving rules keep their input order in the document.

use super::error::MirrorError;
use super::probe::{MirrorProbe, ProbeStatus};
use super::rule::MirrorRule;
use super::spec::parse_descriptors;
use crate::settings::SettingsDocument;
use serde::Serialize;
use tracing::{debug, info, warn};

/// What the build should resolve dependencies against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorPolicy {
    /// No mirrors apply; the build tool keeps its built-in resolution
    Default,
    /// Mirrors apply; the document must be handed to the build tool
    Mirrors(SettingsDocument),
}

impl MirrorPolicy {
    pub fn document(&self) -> Option<&SettingsDocument> {
        match self {
            MirrorPolicy::Default => None,
            MirrorPolicy::Mirrors(document) => Some(document),
        }
    }
}

/// A rule excluded because its mirror was unreachable and fallback was allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedMirror {
    pub mirror_of: String,
    pub url: String,
    pub status: ProbeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub policy: MirrorPolicy,
    pub dropped: Vec<DroppedMirror>,
}

impl Compilation {
    fn default_policy() -> Self {
        Self {
            policy: MirrorPolicy::Default,
            dropped: Vec::new(),
        }
    }
}

pub struct MirrorPolicyCompiler<P: MirrorProbe> {
    probe: P,
}

impl<P: MirrorProbe> MirrorPolicyCompiler<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn compile(
        &self,
        spec: Option<&str>,
        allow_fallback: bool,
    ) -> Result<Compilation, MirrorError> {
        let raw = match spec {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!("No mirror spec given, keeping default repository resolution");
                return Ok(Compilation::default_policy());
            }
        };

        let descriptors = parse_descriptors(raw)?;
        if descriptors.is_empty() {
            debug!("Mirror spec has no descriptors, keeping default repository resolution");
            return Ok(Compilation::default_policy());
        }

        info!(count = descriptors.len(), allow_fallback, "Compiling mirror policy");

        let mut accepted = Vec::with_capacity(descriptors.len());
        let mut dropped = Vec::new();

        for descriptor in descriptors {
            let rule = MirrorRule::from(descriptor);
            let status = self.probe.probe(&rule.url);

            if status.is_reachable() {
                debug!(url = %rule.url, mirror_of = %rule.mirror_of, id = %rule.id, "Mirror accepted");
                accepted.push(rule);
                continue;
            }

            if !allow_fallback {
                return Err(MirrorError::Unreachable {
                    url: rule.url,
                    mirror_of: rule.mirror_of,
                    status,
                });
            }

            warn!(
                "Mirror {} (mirrorOf {}) is unreachable ({}), dropping it",
                rule.url, rule.mirror_of, status
            );
            dropped.push(DroppedMirror {
                mirror_of: rule.mirror_of,
                url: rule.url,
                status,
            });
        }

        if accepted.is_empty() {
            warn!("Every mirror was dropped, keeping default repository resolution");
            return Ok(Compilation {
                policy: MirrorPolicy::Default,
                dropped,
            });
        }

        Ok(Compilation {
            policy: MirrorPolicy::Mirrors(SettingsDocument::new(accepted)),
            dropped,
        })
    }
}
