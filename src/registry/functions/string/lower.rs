//! lowerCase() operator - converts to lowercase

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::OperatorDescriptor;

/// lowerCase() operator - converts to lowercase
pub struct LowerCaseFunction;

impl OperatorFunction for LowerCaseFunction {
    fn name(&self) -> &'static str {
        "lowerCase"
    }
    fn human_friendly_name(&self) -> &str {
        "Lower Case"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "lowerCase",
                    vec![super::text_arg()],
                    TypeInfo::String,
                    "Transform a string to lower case",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let text = ArgReader::new(self.name(), args).string("text")?;
        Ok(Value::String(text.to_lowercase()))
    }
}
