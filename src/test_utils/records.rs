//! Records used only by the translator tests.

use std::sync::OnceLock;

use crate::translator::{Element, FieldSchema, FieldValue, RecordSchema, XmlRecord};

/// A curricular unit without type-level annotations.
#[derive(Debug, Clone)]
pub struct Fuc {
    pub codigo: String,
    pub nome: String,
    pub ects: f64,
}

impl XmlRecord for Fuc {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: OnceLock<RecordSchema<Fuc>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new()
                .field(
                    FieldSchema::new("codigo", |f: &Fuc| FieldValue::scalar(&f.codigo)).inline(),
                )
                .field(FieldSchema::new("nome", |f: &Fuc| FieldValue::scalar(&f.nome)))
                .field(FieldSchema::new("ects", |f: &Fuc| {
                    FieldValue::Scalar(format!("{:?}", f.ects))
                }))
        })
    }
}

/// A record whose collection holds plain strings instead of records.
#[derive(Debug, Clone)]
pub struct Unregistered {
    pub tags: Vec<String>,
}

impl XmlRecord for Unregistered {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: OnceLock<RecordSchema<Unregistered>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new().field(FieldSchema::new("tags", |u: &Unregistered| {
                FieldValue::Many(u.tags.iter().cloned().map(Element::Scalar).collect())
            }))
        })
    }
}
