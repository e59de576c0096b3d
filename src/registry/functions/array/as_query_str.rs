//! arrayAsQueryStr() operator - represents an array as a query string

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayAsQueryStr() operator - represents an array as a query string
pub struct ArrayAsQueryStrFunction;

impl OperatorFunction for ArrayAsQueryStrFunction {
    fn name(&self) -> &'static str {
        "arrayAsQueryStr"
    }
    fn human_friendly_name(&self) -> &str {
        "Array As Query String"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayAsQueryStr",
                    vec![ArgSpec::required(
                        "array",
                        TypeInfo::array_of(TypeInfo::Mixed),
                        "The array to represented as a string",
                    )],
                    TypeInfo::String,
                    "Represent an array as a string",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let array = ArgReader::new(self.name(), args).array("array")?;
        context.serializer.serialize(array).map(Value::String)
    }
}
