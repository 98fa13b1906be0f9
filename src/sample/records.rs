//! Annotated records of the sample plan, with their transformers and adapters.

use std::sync::OnceLock;

use crate::{
    entity::Entity,
    error::Result,
    translator::{Adapter, FieldSchema, FieldValue, RecordSchema, Transformer, XmlRecord},
};

/// Appends `%`.
pub struct AddPercentage;

impl Transformer for AddPercentage {
    fn transform(&self, input: &str) -> String {
        format!("{input}%")
    }
}

/// Wraps the value in parentheses.
pub struct AddParenthesis;

impl Transformer for AddParenthesis {
    fn transform(&self, input: &str) -> String {
        format!("({input})")
    }
}

/// Globally renames an entity inside the adapted tree.
pub struct RenameEntity {
    pub from: &'static str,
    pub to: &'static str,
}

impl Adapter for RenameEntity {
    fn adapt(&self, input: Entity) -> Result<Entity> {
        input.global_rename_entity(self.from, self.to)?;
        Ok(input)
    }
}

/// Overwrites an existing attribute value.
pub struct ChangeAttribute {
    pub name: &'static str,
    pub value: &'static str,
}

impl Adapter for ChangeAttribute {
    fn adapt(&self, input: Entity) -> Result<Entity> {
        input.change_attribute(self.name, self.value);
        Ok(input)
    }
}

/// One assessment component, rendered as `<component name=".." weight=".."/>`.
#[derive(Debug, Clone)]
pub struct ComponenteAvaliacao {
    pub nome: String,
    pub peso: u32,
}

impl XmlRecord for ComponenteAvaliacao {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: OnceLock<RecordSchema<ComponenteAvaliacao>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new()
                .entity_name("component")
                .field(
                    FieldSchema::new("nome", |c: &ComponenteAvaliacao| {
                        FieldValue::scalar(&c.nome)
                    })
                    .xml_name("name")
                    .inline()
                    .transformer(AddParenthesis),
                )
                .field(
                    FieldSchema::new("peso", |c: &ComponenteAvaliacao| FieldValue::scalar(c.peso))
                        .xml_name("weight")
                        .inline()
                        .transformer(AddPercentage),
                )
        })
    }
}

/// A curricular unit with its assessment, renamed by its adapter.
#[derive(Debug, Clone)]
pub struct FucPlan {
    pub codigo: String,
    pub nome: String,
    pub ects: f64,
    pub observacoes: String,
    pub avaliacao: Vec<ComponenteAvaliacao>,
}

impl XmlRecord for FucPlan {
    fn schema() -> &'static RecordSchema<Self> {
        static SCHEMA: OnceLock<RecordSchema<FucPlan>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new()
                .entity_name("fuc")
                .adapter(RenameEntity {
                    from: "avaliacao",
                    to: "X",
                })
                .field(
                    FieldSchema::new("codigo", |f: &FucPlan| FieldValue::scalar(&f.codigo))
                        .xml_name("code")
                        .inline(),
                )
                .field(
                    FieldSchema::new("nome", |f: &FucPlan| FieldValue::scalar(&f.nome))
                        .xml_name("name"),
                )
                .field(FieldSchema::new("ects", |f: &FucPlan| {
                    FieldValue::Scalar(format!("{:?}", f.ects))
                }))
                .field(
                    FieldSchema::new("observacoes", |f: &FucPlan| {
                        FieldValue::scalar(&f.observacoes)
                    })
                    .exclude(),
                )
                .field(FieldSchema::new("avaliacao", |f: &FucPlan| {
                    FieldValue::records(f.avaliacao.as_slice())
                }))
        })
    }
}

/// The `M4310` unit with two assessment components.
pub fn sample_fuc_plan() -> FucPlan {
    FucPlan {
        codigo: "M4310".to_string(),
        nome: "Programação Avançada".to_string(),
        ects: 6.0,
        observacoes: "la la la".to_string(),
        avaliacao: vec![
            ComponenteAvaliacao {
                nome: "Quizzes".to_string(),
                peso: 20,
            },
            ComponenteAvaliacao {
                nome: "Projeto".to_string(),
                peso: 80,
            },
        ],
    }
}
