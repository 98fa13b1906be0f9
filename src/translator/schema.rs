//! Per-type registration of translatable fields and their annotations.
//!
//! A record type describes itself once through [`XmlRecord::schema`]; the
//! translator reads that description instead of inspecting the value at
//! runtime.

use std::{fmt, sync::Arc};

use crate::{entity::Entity, error::Result};

/// Rewrites a field value before it is placed in the tree.
pub trait Transformer: Send + Sync {
    fn transform(&self, input: &str) -> String;
}

/// Post-processes an entity once it has been built.
pub trait Adapter: Send + Sync {
    fn adapt(&self, input: Entity) -> Result<Entity>;
}

/// A record that can be translated into an [`Entity`].
///
/// The schema lives in a `static`, so implementors must be `'static`.
pub trait XmlRecord: Sized + 'static {
    fn schema() -> &'static RecordSchema<Self>;
}

/// Object-safe view of a record, used for nested collections.
pub trait ToEntity {
    fn to_entity(&self) -> Result<Entity>;
}

impl<T: XmlRecord> ToEntity for T {
    fn to_entity(&self) -> Result<Entity> {
        super::translate(self)
    }
}

/// Runtime value of one field.
pub enum FieldValue<'a> {
    /// A single value, written as text or as an inline attribute.
    Scalar(String),
    /// An ordered collection, written as a wrapper entity.
    Many(Vec<Element<'a>>),
}

/// One item of a [`FieldValue::Many`] collection.
pub enum Element<'a> {
    Record(&'a dyn ToEntity),
    /// Plain values cannot become entities and are rejected.
    Scalar(String),
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(_) => write!(f, "Record(..)"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

impl<'a> FieldValue<'a> {
    /// Stringified single value.
    pub fn scalar(value: impl ToString) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Collection of nested records.
    pub fn records<R: ToEntity>(items: &'a [R]) -> Self {
        Self::Many(
            items
                .iter()
                .map(|item| Element::Record(item as &dyn ToEntity))
                .collect(),
        )
    }
}

/// Type-level annotations.
#[derive(Clone, Default)]
pub struct TypeAnnotations {
    pub entity_name: Option<String>,
    pub adapter: Option<Arc<dyn Adapter>>,
}

/// Field-level annotations.
#[derive(Clone, Default)]
pub struct FieldAnnotations {
    pub xml_name: Option<String>,
    pub inline: bool,
    pub excluded: bool,
    pub transformer: Option<Arc<dyn Transformer>>,
    pub adapter: Option<Arc<dyn Adapter>>,
}

impl fmt::Debug for TypeAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeAnnotations")
            .field("entity_name", &self.entity_name)
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

impl fmt::Debug for FieldAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAnnotations")
            .field("xml_name", &self.xml_name)
            .field("inline", &self.inline)
            .field("excluded", &self.excluded)
            .field("transformer", &self.transformer.is_some())
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

/// Accessor and annotations of one declared field.
pub struct FieldSchema<T> {
    name: &'static str,
    accessor: for<'a> fn(&'a T) -> FieldValue<'a>,
    annotations: FieldAnnotations,
}

impl<T> FieldSchema<T> {
    pub fn new(name: &'static str, accessor: for<'a> fn(&'a T) -> FieldValue<'a>) -> Self {
        Self {
            name,
            accessor,
            annotations: FieldAnnotations::default(),
        }
    }

    /// Renames the field in the generated XML.
    pub fn xml_name(mut self, name: &str) -> Self {
        self.annotations.xml_name = Some(name.to_string());
        self
    }

    /// Writes the field as an attribute of the owning entity.
    pub fn inline(mut self) -> Self {
        self.annotations.inline = true;
        self
    }

    pub fn exclude(mut self) -> Self {
        self.annotations.excluded = true;
        self
    }

    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.annotations.transformer = Some(Arc::new(transformer));
        self
    }

    /// Post-processes the entity built for this field.
    pub fn adapter(mut self, adapter: impl Adapter + 'static) -> Self {
        self.annotations.adapter = Some(Arc::new(adapter));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn annotations(&self) -> &FieldAnnotations {
        &self.annotations
    }

    pub fn value<'a>(&self, record: &'a T) -> FieldValue<'a> {
        (self.accessor)(record)
    }
}

impl<T> fmt::Debug for FieldSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("annotations", &self.annotations)
            .finish()
    }
}

/// The registered description of a record type.
pub struct RecordSchema<T> {
    type_name: &'static str,
    annotations: TypeAnnotations,
    fields: Vec<FieldSchema<T>>,
}

impl<T> Default for RecordSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordSchema<T> {
    /// Starts a schema named after the simple name of `T`.
    pub fn new() -> Self {
        Self {
            type_name: simple_type_name(std::any::type_name::<T>()),
            annotations: TypeAnnotations::default(),
            fields: Vec::new(),
        }
    }

    pub fn entity_name(mut self, name: &str) -> Self {
        self.annotations.entity_name = Some(name.to_string());
        self
    }

    pub fn adapter(mut self, adapter: impl Adapter + 'static) -> Self {
        self.annotations.adapter = Some(Arc::new(adapter));
        self
    }

    /// Declares the next field. Declaration order is output order.
    pub fn field(mut self, field: FieldSchema<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn annotations(&self) -> &TypeAnnotations {
        &self.annotations
    }

    pub fn fields(&self) -> &[FieldSchema<T>] {
        &self.fields
    }
}

impl<T> fmt::Debug for RecordSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("type_name", &self.type_name)
            .field("annotations", &self.annotations)
            .field("fields", &self.fields)
            .finish()
    }
}

/// `my_crate::plan::Fuc<u8>` becomes `Fuc`.
fn simple_type_name(full: &'static str) -> &'static str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("xentity::plan::Fuc"), "Fuc");
        assert_eq!(simple_type_name("Fuc"), "Fuc");
        assert_eq!(simple_type_name("a::Wrapper<b::Inner>"), "Wrapper");
    }
}
