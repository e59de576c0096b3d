//! arrayDiff() operator - elements of the first array missing from all others

use std::collections::HashSet;

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::config::RegistryConfig;
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayDiff() operator - elements of the first array missing from all others
pub struct ArrayDiffFunction;

impl OperatorFunction for ArrayDiffFunction {
    fn name(&self) -> &'static str {
        "arrayDiff"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Diff"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayDiff",
                    vec![ArgSpec::required(
                        "arrays",
                        TypeInfo::array_of(TypeInfo::Mixed),
                        "The array containing all the arrays. It must have at least 2 elements",
                    )],
                    TypeInfo::array_of(TypeInfo::Mixed),
                    "Return an array containing all the elements from the first array which are not present on any of the other arrays",
                )
            });
        &DESCRIPTOR
    }

    fn validate(&self, args: &FieldArgs, _config: &RegistryConfig) -> Option<String> {
        let arrays = args.literal("arrays")?;
        let len = arrays.array_len()?;
        (len < 2).then(|| format!("The array must contain at least 2 elements: '{arrays}'"))
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let arrays = reader.elements("arrays")?;
        let Some((first, rest)) = arrays.split_first() else {
            return Ok(Value::List(Vec::new()));
        };

        let mut excluded = HashSet::new();
        for other in rest {
            let elements = other
                .elements()
                .ok_or_else(|| reader.mismatch("arrays", "array of arrays", other))?;
            excluded.extend(elements.into_iter().map(Value::comparison_key));
        }

        let kept = |value: &Value| !excluded.contains(&value.comparison_key());
        match first {
            Value::List(items) => Ok(Value::List(
                items.iter().filter(|v| kept(*v)).cloned().collect(),
            )),
            Value::Map(entries) => Ok(Value::Map(
                entries
                    .iter()
                    .filter(|(_, v)| kept(*v))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )),
            other => Err(reader.mismatch("arrays", "array of arrays", other)),
        }
    }
}
