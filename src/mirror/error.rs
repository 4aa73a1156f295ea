use super::probe::ProbeStatus;
use thiserror::Error;

/// Fatal outcomes of compiling a mirror specification.
///
/// Either variant aborts the whole compilation; no partial document is ever
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Malformed mirror descriptor '{descriptor}' in mirror spec '{spec}': expected <mirrorOf>|<url>")]
    MalformedDescriptor { descriptor: String, spec: String },

    #[error("Mirror {url} (mirrorOf {mirror_of}) is unreachable: {status}")]
    Unreachable {
        url: String,
        mirror_of: String,
        status: ProbeStatus,
    },
}

impl MirrorError {
    pub fn malformed(descriptor: &str, spec: &str) -> Self {
        MirrorError::MalformedDescriptor {
            descriptor: descriptor.to_string(),
            spec: spec.to_string(),
        }
    }
}
