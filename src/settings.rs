//! Maven settings document holding the accepted mirror rules
//!
//! The document is built as an XML node tree and serialized by the XML
//! writer, so `mirrorOf` and URL values containing markup characters are
//! escaped rather than spliced into a string template.
//!
//! # Layout
//!
//! ```text
//! <settings>
//!   <mirrors>
//!     <mirror>
//!       <id>…</id>
//!       <name>…</name>
//!       <url>…</url>
//!       <mirrorOf>…</mirrorOf>
//!     </mirror>
//!   </mirrors>
//! </settings>
//! ```

use crate::mirror::MirrorRule;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use xot::output::xml::Parameters;
use xot::output::Indentation;
use xot::{NameId, Node, Xot};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to build settings document: {0}")]
    Xml(#[from] xot::Error),
}

/// Ordered set of mirror rules ready to be serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDocument {
    mirrors: Vec<MirrorRule>,
}

impl SettingsDocument {
    pub fn new(mirrors: Vec<MirrorRule>) -> Self {
        Self { mirrors }
    }

    pub fn mirrors(&self) -> &[MirrorRule] {
        &self.mirrors
    }

    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }

    pub fn render(&self) -> Result<String, SettingsError> {
        let mut xot = Xot::new();
        let names = Names::register(&mut xot);

        let settings = xot.new_element(names.settings);
        let mirrors = xot.new_element(names.mirrors);
        xot.append(settings, mirrors)?;

        for rule in &self.mirrors {
            let mirror = xot.new_element(names.mirror);
            append_field(&mut xot, mirror, names.id, &rule.id)?;
            append_field(&mut xot, mirror, names.name, rule.name())?;
            append_field(&mut xot, mirror, names.url, &rule.url)?;
            append_field(&mut xot, mirror, names.mirror_of, &rule.mirror_of)?;
            xot.append(mirrors, mirror)?;
        }

        let document = xot.new_document_with_element(settings)?;
        let parameters = Parameters {
            indentation: Some(Indentation::default()),
            ..Default::default()
        };

        Ok(xot.serialize_xml_string(parameters, document)?)
    }

    /// Renders the document and writes it to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let rendered = self.render()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        fs::write(path, rendered)
            .with_context(|| format!("Failed to write settings document to {}", path.display()))?;

        info!(
            path = %path.display(),
            mirrors = self.mirrors.len(),
            "Wrote mirror settings"
        );

        Ok(())
    }
}

struct Names {
    settings: NameId,
    mirrors: NameId,
    mirror: NameId,
    id: NameId,
    name: NameId,
    url: NameId,
    mirror_of: NameId,
}

impl Names {
    fn register(xot: &mut Xot) -> Self {
        Self {
            settings: xot.add_name("settings"),
            mirrors: xot.add_name("mirrors"),
            mirror: xot.add_name("mirror"),
            id: xot.add_name("id"),
            name: xot.add_name("name"),
            url: xot.add_name("url"),
            mirror_of: xot.add_name("mirrorOf"),
        }
    }
}

fn append_field(xot: &mut Xot, parent: Node, name: NameId, value: &str) -> Result<(), SettingsError> {
    let element = xot.new_element(name);
    let text = xot.new_text(value);
    xot.append(element, text)?;
    xot.append(parent, element)?;
    Ok(())
}
