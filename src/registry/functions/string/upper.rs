//! upperCase() operator - converts to uppercase

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::OperatorDescriptor;

/// upperCase() operator - converts to uppercase
pub struct UpperCaseFunction;

impl OperatorFunction for UpperCaseFunction {
    fn name(&self) -> &'static str {
        "upperCase"
    }
    fn human_friendly_name(&self) -> &str {
        "Upper Case"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "upperCase",
                    vec![super::text_arg()],
                    TypeInfo::String,
                    "Transform a string to upper case",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let text = ArgReader::new(self.name(), args).string("text")?;
        Ok(Value::String(text.to_uppercase()))
    }
}
