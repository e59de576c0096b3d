//! arraySearch() operator - finds the position of an element

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arraySearch() operator - finds the position of an element
pub struct ArraySearchFunction;

impl OperatorFunction for ArraySearchFunction {
    fn name(&self) -> &'static str {
        "arraySearch"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Search"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arraySearch",
                    vec![
                        ArgSpec::required(
                            "array",
                            TypeInfo::array_of(TypeInfo::Mixed),
                            "Array containing the element to search",
                        ),
                        ArgSpec::required(
                            "element",
                            TypeInfo::String,
                            "Element to search in the array and retrieve its position",
                        ),
                    ],
                    TypeInfo::Mixed,
                    "Search in what position is an element placed in the array. If found, it returns its position (integer), otherwise it returns `false` (boolean)",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let array = reader.array("array")?;
        let element = reader.required("element")?;

        let position = array
            .entries()
            .unwrap_or_default()
            .into_iter()
            .find(|(_, item)| item.loose_eq(element))
            .map(|(key, _)| key);

        Ok(position.unwrap_or(Value::Boolean(false)))
    }
}
