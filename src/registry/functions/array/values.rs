//! arrayValues() operator - drops the keys of an associative array

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayValues() operator - drops the keys of an associative array
pub struct ArrayValuesFunction;

impl OperatorFunction for ArrayValuesFunction {
    fn name(&self) -> &'static str {
        "arrayValues"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Values"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayValues",
                    vec![ArgSpec::required(
                        "array",
                        TypeInfo::array_of(TypeInfo::Mixed),
                        "The array from which to retrieve the values",
                    )],
                    TypeInfo::array_of(TypeInfo::Mixed),
                    "Return the values from a two-dimensional array",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let elements = ArgReader::new(self.name(), args).elements("array")?;
        Ok(Value::List(elements.into_iter().cloned().collect()))
    }
}
