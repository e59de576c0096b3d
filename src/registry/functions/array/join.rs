//! arrayJoin() operator - joins array elements into a string

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayJoin() operator - joins array elements into a string
pub struct ArrayJoinFunction;

impl OperatorFunction for ArrayJoinFunction {
    fn name(&self) -> &'static str {
        "arrayJoin"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Join"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayJoin",
                    vec![
                        ArgSpec::required(
                            "array",
                            TypeInfo::array_of(TypeInfo::String),
                            "Array of strings to be joined all together",
                        ),
                        ArgSpec::optional(
                            "separator",
                            TypeInfo::String,
                            "Separator with which to join all strings in the array",
                        ),
                    ],
                    TypeInfo::String,
                    "Join all the strings in an array, using a provided separator",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let separator = match reader.optional("separator")? {
            Some(value) => reader.text_of("separator", value)?,
            None => String::new(),
        };
        let strings = reader.strings("array")?;
        Ok(Value::String(strings.join(&separator)))
    }
}
