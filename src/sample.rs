//! The sample study plan used by the binary, the benchmarks and the tests.

mod plan;
mod records;

pub use plan::create_plan_document;
pub use records::{
    sample_fuc_plan, AddParenthesis, AddPercentage, ChangeAttribute, ComponenteAvaliacao,
    FucPlan, RenameEntity,
};
