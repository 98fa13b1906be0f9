//! Error handling types for the entity model
//!
//! This module provides the error type returned by every fallible operation,
//! from name validation up to document persistence.

use std::{error::Error, fmt};

use thiserror::Error;

/// Main error type for entity, document and translation operations
#[derive(Debug)]
pub struct XmlError {
    /// The specific kind of error
    kind: ErrorKind,
    /// Additional context for the error
    context: Option<String>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// Top-level error categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error(transparent)]
    InvalidName(NameError),
    #[error(transparent)]
    InvalidArgument(ArgumentError),
    #[error(transparent)]
    NotFound(LookupError),
    #[error("Not a supported type: {0}")]
    NotASupportedType(String),
    #[error("Cyclic reference: {0}")]
    CyclicReference(String),
    #[error(transparent)]
    IO(IOError),
}

/// Name validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Invalid entity name: '{0}'")]
    Entity(String),
    #[error("Invalid attribute name: '{0}'")]
    Attribute(String),
}

/// Errors for malformed document metadata or configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Invalid version: '{0}'")]
    Version(String),
    #[error("Invalid encoding: '{0}'")]
    Encoding(String),
    #[error("Invalid indentation: {0}")]
    Indentation(String),
    #[error("Invalid rename mapping: '{0}'")]
    Mapping(String),
}

/// Lookup errors raised by the DSL and attribute renames
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Child entity '{0}' not found")]
    Child(String),
    #[error("Attribute '{0}' not found")]
    Attribute(String),
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

impl XmlError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    pub fn invalid_entity_name(name: &str) -> Self {
        Self::new(ErrorKind::InvalidName(NameError::Entity(name.to_string())))
    }

    pub fn invalid_attribute_name(name: &str) -> Self {
        Self::new(ErrorKind::InvalidName(NameError::Attribute(name.to_string())))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<ErrorKind> for XmlError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.kind)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl Error for XmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

pub type Result<T> = std::result::Result<T, XmlError>;
