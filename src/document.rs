//! XML document: a root entity plus version and encoding metadata.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::{
    entity::Entity,
    error::{ArgumentError, ErrorKind, Result, XmlError},
    utils::write_file,
};

/// A root entity with its XML declaration metadata.
#[derive(Debug)]
pub struct Document {
    root: Entity,
    version: String,
    encoding: String,
}

impl Document {
    /// Creates a document with a fresh root entity.
    pub fn new(root_name: &str, version: &str, encoding: &str) -> Result<Self> {
        Self::with_root(Entity::new(root_name)?, version, encoding)
    }

    /// Wraps an existing entity, detaching it from its parent if it has one.
    pub fn with_root(root: Entity, version: &str, encoding: &str) -> Result<Self> {
        validate_version(version)?;
        validate_encoding(encoding)?;

        if let Some(parent) = root.parent() {
            parent.remove_child_entity(&root);
        }

        Ok(Self {
            root,
            version: version.to_string(),
            encoding: encoding.to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_version(&mut self, version: &str) -> Result<()> {
        validate_version(version)?;
        self.version = version.to_string();
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        validate_encoding(encoding)?;
        self.encoding = encoding.to_string();
        Ok(())
    }

    /// Handle to the root entity. Mutations through it change the document.
    pub fn root_entity(&self) -> Entity {
        self.root.clone()
    }

    pub fn declaration(&self) -> String {
        format!(
            "<?xml version=\"{}\" encoding=\"{}\"?>",
            self.version, self.encoding
        )
    }

    /// The declaration line followed by the serialized root.
    pub fn pretty_print(&self) -> String {
        format!("{}\n{}", self.declaration(), self.root.pretty_print(0))
    }

    #[instrument(skip(self), fields(root = %self.root.name()))]
    pub fn write_to_file(&self, path: &str) -> Result<()> {
        let contents = self.pretty_print();
        debug!("Writing {} bytes", contents.len());
        write_file(path, &contents).map_err(|e| e.with_context("writing XML document"))?;
        info!("Document written to {}", path);
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_print())
    }
}

fn validate_version(version: &str) -> Result<()> {
    let well_formed = version
        .split('.')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Err(XmlError::new(ErrorKind::InvalidArgument(
            ArgumentError::Version(version.to_string()),
        )));
    }
    Ok(())
}

fn validate_encoding(encoding: &str) -> Result<()> {
    if encoding.trim().is_empty() {
        return Err(XmlError::new(ErrorKind::InvalidArgument(
            ArgumentError::Encoding(encoding.to_string()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(validate_version("1.0").is_ok());
        assert!(validate_version("1").is_ok());
        assert!(validate_version("1.0.12").is_ok());
        for bad in ["", "1.", ".1", "1..0", "v1.0", "1.a"] {
            assert!(validate_version(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_declaration() {
        let doc = Document::new("plano", "1.0", "UTF-8").unwrap();
        assert_eq!(
            doc.pretty_print(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano></plano>"
        );
    }
}
