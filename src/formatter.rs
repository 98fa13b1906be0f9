mod xml;

pub use self::xml::XmlFormatter;
use crate::{
    entity::Entity,
    error::{ArgumentError, ErrorKind, Result, XmlError},
};

/// Default indentation step, in spaces
pub const DEFAULT_INDENT_SPACES: usize = 4;
/// Largest accepted indentation step
pub const MAX_INDENT_SPACES: usize = 8;

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: DEFAULT_INDENT_SPACES,
        }
    }
}

impl FormatConfig {
    pub fn with_indent(indent_spaces: usize) -> Result<Self> {
        let config = Self { indent_spaces };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent_spaces > MAX_INDENT_SPACES {
            return Err(XmlError::new(ErrorKind::InvalidArgument(
                ArgumentError::Indentation(format!(
                    "Indentation of {} spaces exceeds maximum allowed ({})",
                    self.indent_spaces, MAX_INDENT_SPACES
                )),
            ))
            .with_context("Invalid formatting configuration"));
        }
        Ok(())
    }

    /// Indentation string for a nesting level
    pub fn indentation(&self, level: usize) -> String {
        " ".repeat(level * self.indent_spaces)
    }
}

/// Trait for rendering an entity tree as text
pub trait Formatter {
    /// Formats `entity` at the given nesting level.
    fn format_at(&self, entity: &Entity, level: usize, config: &FormatConfig) -> Result<String>;

    fn format(&self, entity: &Entity, config: &FormatConfig) -> Result<String> {
        self.format_at(entity, 0, config)
    }
}
