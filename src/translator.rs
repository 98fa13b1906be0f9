//! Record → entity translation.
//!
//! Each field of a registered record becomes, in declaration order, either
//! an inline attribute, a text child, or a wrapper entity holding one child
//! per collection element.

mod schema;

pub use schema::{
    Adapter, Element, FieldAnnotations, FieldSchema, FieldValue, RecordSchema, ToEntity,
    Transformer, TypeAnnotations, XmlRecord,
};

use tracing::{instrument, trace};

use crate::{
    document::Document,
    entity::Entity,
    error::{ErrorKind, Result, XmlError},
    name::{is_valid_attribute_name, is_valid_entity_name},
};

/// Translates a record into a new, parentless entity tree.
#[instrument(skip_all, fields(record = T::schema().type_name()))]
pub fn translate<T: XmlRecord>(record: &T) -> Result<Entity> {
    let schema = T::schema();
    let entity = Entity::new(&entity_name(schema)?)?;

    for field in schema.fields() {
        let annotations = field.annotations();
        if annotations.excluded {
            trace!("Skipping excluded field '{}'", field.name());
            continue;
        }
        build_field(&entity, field, record)
            .map_err(|e| e.with_context(format!("in field '{}'", field.name())))?;
    }

    match &schema.annotations().adapter {
        Some(adapter) => adapter.adapt(entity),
        None => Ok(entity),
    }
}

/// Translates a record and wraps the result in a [`Document`].
pub fn translate_to_document<T: XmlRecord>(
    record: &T,
    version: &str,
    encoding: &str,
) -> Result<Document> {
    Document::with_root(translate(record)?, version, encoding)
}

fn entity_name<T>(schema: &RecordSchema<T>) -> Result<String> {
    if let Some(name) = &schema.annotations().entity_name {
        if is_valid_entity_name(name) {
            return Ok(name.clone());
        }
        trace!("Ignoring invalid entity name annotation '{}'", name);
    }
    let type_name = schema.type_name();
    if is_valid_entity_name(type_name) {
        Ok(type_name.to_string())
    } else {
        Err(XmlError::invalid_entity_name(type_name))
    }
}

fn xml_name<T>(field: &FieldSchema<T>) -> Result<String> {
    if let Some(name) = &field.annotations().xml_name {
        if is_valid_attribute_name(name) {
            return Ok(name.clone());
        }
    }
    if is_valid_attribute_name(field.name()) {
        Ok(field.name().to_string())
    } else {
        Err(XmlError::invalid_attribute_name(field.name()))
    }
}

fn build_field<T>(parent: &Entity, field: &FieldSchema<T>, record: &T) -> Result<()> {
    let annotations = field.annotations();
    let name = xml_name(field)?;

    match field.value(record) {
        FieldValue::Many(elements) => {
            let wrapper = Entity::new(&name)?;
            for element in elements {
                let child = match element {
                    Element::Record(record) => record.to_entity()?,
                    Element::Scalar(value) => {
                        return Err(XmlError::new(ErrorKind::NotASupportedType(format!(
                            "collection element '{}' is not a record",
                            value
                        ))));
                    }
                };
                wrapper.add_child_entity(&child)?;
            }
            attach(parent, wrapper, annotations)
        }
        FieldValue::Scalar(raw) => {
            let value = match &annotations.transformer {
                Some(transformer) => transformer.transform(&raw),
                None => raw,
            };
            if annotations.inline {
                parent.add_attribute(&name, &value);
                Ok(())
            } else {
                let child = Entity::new(&name)?;
                child.add_text(&value);
                attach(parent, child, annotations)
            }
        }
    }
}

fn attach(parent: &Entity, child: Entity, annotations: &FieldAnnotations) -> Result<()> {
    let child = match &annotations.adapter {
        Some(adapter) => adapter.adapt(child)?,
        None => child,
    };
    parent.add_child_entity(&child)
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;
    use crate::error::NameError;

    // The simple name of a tuple type is not a valid entity name.
    impl XmlRecord for (u32, u32) {
        fn schema() -> &'static RecordSchema<Self> {
            static SCHEMA: OnceLock<RecordSchema<(u32, u32)>> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                RecordSchema::new()
                    .entity_name("1par")
                    .field(FieldSchema::new("first", |p: &(u32, u32)| {
                        FieldValue::scalar(p.0)
                    }))
            })
        }
    }

    #[test]
    fn test_record_without_valid_entity_name_fails() {
        let err = translate(&(1u32, 2u32)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidName(NameError::Entity(_))
        ));
    }

    #[test]
    fn test_valid_annotation_overrides_type_name() {
        let schema = RecordSchema::<(u32, u32)>::new().entity_name("par");
        assert_eq!(entity_name(&schema).unwrap(), "par");
    }
}
