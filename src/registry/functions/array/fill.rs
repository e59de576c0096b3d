//! arrayFill() operator - copies properties between arrays matched on an index property

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayFill() operator - copies properties between arrays matched on an index property
pub struct ArrayFillFunction;

impl OperatorFunction for ArrayFillFunction {
    fn name(&self) -> &'static str {
        "arrayFill"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Fill"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayFill",
                    vec![
                        ArgSpec::required(
                            "target",
                            TypeInfo::array_of(TypeInfo::Mixed),
                            "Array to be added elements coming from the source array",
                        ),
                        ArgSpec::required(
                            "source",
                            TypeInfo::array_of(TypeInfo::Mixed),
                            "Array whose elements will be added to the target array",
                        ),
                        ArgSpec::required(
                            "index",
                            TypeInfo::String,
                            "Property whose value must be the same on both arrays",
                        ),
                        ArgSpec::optional(
                            "properties",
                            TypeInfo::array_of(TypeInfo::String),
                            "Properties to copy from the source to the target array. If empty, all properties in the source array will be copied",
                        ),
                    ],
                    TypeInfo::array_of(TypeInfo::Mixed),
                    "Fill a target array with elements from a source array, where a certain property is the same",
                )
            });
        &DESCRIPTOR
    }

    fn documentation(&self) -> &str {
        "For every target element holding the `index` property, copies `properties` (or every property when none are given) from each source element whose `index` value is loosely equal. Later matches overwrite earlier ones."
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let mut filled = reader.array("target")?.clone();
        let source = reader.elements("source")?;
        let index = reader.string("index")?;
        let properties = match reader.optional("properties")? {
            Some(_) => reader.strings("properties")?,
            None => Vec::new(),
        };

        let mut sources = Vec::with_capacity(source.len());
        for element in source {
            match element {
                Value::Map(props) => sources.push(props),
                other => return Err(reader.mismatch("source", "array of maps", other)),
            }
        }

        for target in filled.elements_mut().unwrap_or_default() {
            let Value::Map(target_props) = target else {
                return Err(reader.mismatch("target", "array of maps", target));
            };
            for source_props in &sources {
                let matches = target_props.get(&index).is_some_and(|value| {
                    value.loose_eq(source_props.get(&index).unwrap_or(&Value::Null))
                });
                if !matches {
                    continue;
                }
                let copied: Vec<&String> = if properties.is_empty() {
                    source_props.keys().collect()
                } else {
                    properties.iter().collect()
                };
                for property in copied {
                    let value = source_props.get(property).cloned().unwrap_or_default();
                    target_props.insert(property.clone(), value);
                }
            }
        }

        Ok(filled)
    }
}
