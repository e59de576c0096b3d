//! arrayItem() operator - accesses the element at a position

use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::config::{BoundsCheck, RegistryConfig};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayItem() operator - accesses the element at a position
pub struct ArrayItemFunction;

impl OperatorFunction for ArrayItemFunction {
    fn name(&self) -> &'static str {
        "arrayItem"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Item"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayItem",
                    vec![
                        ArgSpec::required(
                            "array",
                            TypeInfo::array_of(TypeInfo::Mixed),
                            "Array containing the element to retrieve",
                        ),
                        ArgSpec::required(
                            "position",
                            TypeInfo::String,
                            "Position where the element is placed in the array, starting from 0",
                        ),
                    ],
                    TypeInfo::Mixed,
                    "Access the element on the given position in the array",
                )
            });
        &DESCRIPTOR
    }

    fn documentation(&self) -> &str {
        "Returns the element at the 0-based `position` of a list, or under the key `position` of an associative array."
    }

    fn validate(&self, args: &FieldArgs, config: &RegistryConfig) -> Option<String> {
        let array = args.literal("array")?;
        let position = args.literal("position")?;
        let len = array.array_len()? as i64;

        let missing = match (array, position.as_index()) {
            (Value::Map(entries), _) if config.array_item_bounds == BoundsCheck::Strict => {
                !entries.contains_key(&position.to_text()?)
            }
            (_, Some(index)) => match config.array_item_bounds {
                BoundsCheck::Strict => index < 0 || len <= index,
                BoundsCheck::Legacy => {
                    if len == index {
                        log::warn!(
                            "arrayItem position {index} equals the array length; legacy bounds let it through to evaluation"
                        );
                    }
                    len < index
                }
            },
            (_, None) => false,
        };

        missing.then(|| {
            format!(
                "The array contains no element at position '{}'",
                position.to_text().unwrap_or_default()
            )
        })
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let array = reader.array("array")?;
        let position = reader.required("position")?;

        let found = match array {
            Value::List(items) => position
                .as_index()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| items.get(i)),
            Value::Map(entries) => position.to_text().and_then(|key| entries.get(&key)),
            _ => None,
        };

        found.cloned().ok_or_else(|| EvaluationError::IndexOutOfRange {
            operator: self.name().to_string(),
            position: position.to_text().unwrap_or_else(|| position.to_string()),
            size: array.array_len().unwrap_or(0),
        })
    }
}
