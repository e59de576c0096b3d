//! arrayRandom() operator - picks a random element

use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayRandom() operator - picks a random element
pub struct ArrayRandomFunction;

impl OperatorFunction for ArrayRandomFunction {
    fn name(&self) -> &'static str {
        "arrayRandom"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Random"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayRandom",
                    vec![ArgSpec::required(
                        "array",
                        TypeInfo::array_of(TypeInfo::Mixed),
                        "Array of elements from which to randomly select one",
                    )],
                    TypeInfo::Mixed,
                    "Randomly select one element from the provided ones",
                )
            });
        &DESCRIPTOR
    }

    fn is_pure(&self) -> bool {
        false
    }

    fn evaluate(&self, args: &FieldArgs, context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let elements = ArgReader::new(self.name(), args).elements("array")?;
        if elements.is_empty() {
            return Err(EvaluationError::EmptyArray {
                operator: self.name().to_string(),
                argument: "array".to_string(),
            });
        }
        let index = context.random.pick_index(elements.len());
        Ok(elements[index].clone())
    }
}
