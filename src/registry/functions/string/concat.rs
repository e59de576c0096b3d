//! concat() operator - concatenates strings

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// concat() operator - concatenates strings
pub struct ConcatFunction;

impl OperatorFunction for ConcatFunction {
    fn name(&self) -> &'static str {
        "concat"
    }
    fn human_friendly_name(&self) -> &str {
        "Concat"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "concat",
                    vec![ArgSpec::required(
                        "values",
                        TypeInfo::array_of(TypeInfo::String),
                        "Strings to concatenate",
                    )],
                    TypeInfo::String,
                    "Concatenate two or more strings",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let joined = reader
            .strings("values")?
            .into_iter()
            .fold(String::new(), |mut acc, item| {
                acc.push_str(&item);
                acc
            });
        Ok(Value::String(joined))
    }
}
