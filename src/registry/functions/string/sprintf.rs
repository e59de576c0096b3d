//! sprintf() operator - replaces placeholders inside a string

use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::functions::string::format::format_printf;
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// sprintf() operator - replaces placeholders inside a string
pub struct SprintfFunction;

impl OperatorFunction for SprintfFunction {
    fn name(&self) -> &'static str {
        "sprintf"
    }
    fn human_friendly_name(&self) -> &str {
        "Sprintf"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "sprintf",
                    vec![
                        ArgSpec::required(
                            "string",
                            TypeInfo::String,
                            "The string containing the placeholders",
                        ),
                        ArgSpec::required(
                            "values",
                            TypeInfo::array_of(TypeInfo::String),
                            "The values to replace the placeholders with inside the string",
                        ),
                    ],
                    TypeInfo::String,
                    "Replace placeholders inside a string with provided values",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let template = reader.string("string")?;
        let values: Vec<Value> = reader.elements("values")?.into_iter().cloned().collect();

        format_printf(&template, &values)
            .map(Value::String)
            .map_err(|err| EvaluationError::Format {
                operator: self.name().to_string(),
                message: err.to_string(),
            })
    }
}
