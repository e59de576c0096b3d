//! arrayUnique() operator - filters out duplicated elements

use std::collections::HashSet;

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayUnique() operator - filters out duplicated elements
pub struct ArrayUniqueFunction;

impl OperatorFunction for ArrayUniqueFunction {
    fn name(&self) -> &'static str {
        "arrayUnique"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Unique"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayUnique",
                    vec![ArgSpec::required(
                        "array",
                        TypeInfo::array_of(TypeInfo::Mixed),
                        "The array to operate on",
                    )],
                    TypeInfo::array_of(TypeInfo::Mixed),
                    "Filters out all duplicated elements in the array",
                )
            });
        &DESCRIPTOR
    }

    fn documentation(&self) -> &str {
        "Removes duplicates, comparing elements by their string representation. The first occurrence of each element is kept, in its original order; associative arrays keep the keys of the surviving elements."
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let array = ArgReader::new(self.name(), args).array("array")?;
        let mut seen = HashSet::new();

        let unique = match array {
            Value::Map(entries) => Value::Map(
                entries
                    .iter()
                    .filter(|(_, v)| seen.insert(v.comparison_key()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            other => Value::List(
                other
                    .elements()
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|v| seen.insert(v.comparison_key()))
                    .cloned()
                    .collect(),
            ),
        };
        Ok(unique)
    }
}
