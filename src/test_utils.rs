mod fixtures;
mod helpers;
mod records;

pub use fixtures::{PLAN_ENTITY_LIST, PLAN_XPATH_COMPONENTS};
pub use helpers::{count_entities, tmp_file_path};
pub use records::{Fuc, Unregistered};

// Re-export common test types/traits
pub use crate::{
    document::Document,
    dsl::entity,
    entity::{Entity, NO_TEXT},
    error::{
        ArgumentError, ErrorKind, IOError, LookupError, NameError, Result, XmlError,
    },
    formatter::{FormatConfig, Formatter, XmlFormatter},
    name::{is_valid_attribute_name, is_valid_entity_name},
    sample::{
        create_plan_document, sample_fuc_plan, AddParenthesis, AddPercentage, ChangeAttribute,
        ComponenteAvaliacao, FucPlan, RenameEntity,
    },
    translator::{
        translate, translate_to_document, Adapter, Element, FieldSchema, FieldValue,
        RecordSchema, ToEntity, Transformer, XmlRecord,
    },
    utils::{read_file, write_file},
};
