use super::spec::MirrorDescriptor;
use serde::Serialize;
use uuid::Uuid;

/// A mirror entry that will be emitted into the settings document.
///
/// The id carries no meaning beyond uniqueness within one document and doubles
/// as the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorRule {
    pub id: String,
    pub mirror_of: String,
    pub url: String,
}

impl MirrorRule {
    pub fn new(mirror_of: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mirror_of: mirror_of.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.id
    }
}

impl From<MirrorDescriptor> for MirrorRule {
    fn from(descriptor: MirrorDescriptor) -> Self {
        MirrorRule::new(descriptor.mirror_of, descriptor.url)
    }
}
