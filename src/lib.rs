//! xentity: an in-memory XML entity tree
//!
//! This crate provides functionality to:
//! - Build trees of named entities with ordered attributes and children
//! - Pretty print them as indented XML
//! - Query and mutate whole trees (global renames, removals, path search)
//! - Translate annotated records into entity trees
//!
//! # Examples
//! ```
//! use xentity::{Document, Entity, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = Document::new("plano", "1.0", "UTF-8")?;
//!     let curso = Entity::new("curso")?;
//!     curso.add_text("Mestrado em Engenharia Informática");
//!     doc.root_entity().add_child_entity(&curso)?;
//!
//!     assert_eq!(
//!         doc.pretty_print(),
//!         "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
//!          <plano>\n    <curso>Mestrado em Engenharia Informática</curso>\n</plano>"
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod document;
pub mod dsl;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod name;
pub mod sample;
pub mod test_utils;
pub mod translator;
pub mod utils;

// Re-exports
pub use document::Document;
pub use entity::{Attributes, Entity, PreOrder, NO_TEXT};
pub use error::{ErrorKind, Result, XmlError};
pub use formatter::{FormatConfig, Formatter, XmlFormatter};
pub use name::{is_valid_attribute_name, is_valid_entity_name};
pub use translator::{
    translate, translate_to_document, Adapter, Element, FieldSchema, FieldValue, RecordSchema,
    ToEntity, Transformer, XmlRecord,
};
