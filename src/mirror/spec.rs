//! Parsing of the `mirrorOf|url;mirrorOf|url` mirror specification format
//!
//! Whitespace is removed from the whole input before splitting, so neither
//! patterns nor URLs may contain it. Empty descriptors produced by doubled or
//! trailing `;` are skipped.

use super::error::MirrorError;

const DESCRIPTOR_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = '|';

/// One `mirrorOf|url` pair, before an id is assigned or the URL is probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorDescriptor {
    pub mirror_of: String,
    pub url: String,
}

/// Removes every whitespace character from the raw specification
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits a raw specification into descriptors.
///
/// Every descriptor is validated before anything is returned: one malformed
/// descriptor fails the whole specification. The error carries the raw input
/// as given, not the normalized form.
pub fn parse_descriptors(raw: &str) -> Result<Vec<MirrorDescriptor>, MirrorError> {
    let normalized = normalize(raw);

    normalized
        .split(DESCRIPTOR_SEPARATOR)
        .filter(|descriptor| !descriptor.is_empty())
        .map(|descriptor| parse_descriptor(descriptor, raw))
        .collect()
}

fn parse_descriptor(descriptor: &str, raw: &str) -> Result<MirrorDescriptor, MirrorError> {
    let mut fields = descriptor.splitn(2, FIELD_SEPARATOR);

    let mirror_of = fields.next().unwrap_or_default();
    let url = fields.next().unwrap_or_default();

    if mirror_of.is_empty() || url.is_empty() {
        return Err(MirrorError::malformed(descriptor, raw));
    }

    Ok(MirrorDescriptor {
        mirror_of: mirror_of.to_string(),
        url: url.to_string(),
    })
}
