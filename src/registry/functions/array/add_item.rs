//! arrayAddItem() operator - adds an element to an array

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::config::KeyPolicy;
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// arrayAddItem() operator - adds an element to an array
pub struct ArrayAddItemFunction;

impl OperatorFunction for ArrayAddItemFunction {
    fn name(&self) -> &'static str {
        "arrayAddItem"
    }
    fn human_friendly_name(&self) -> &str {
        "Array Add Item"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "arrayAddItem",
                    vec![
                        ArgSpec::required(
                            "array",
                            TypeInfo::array_of(TypeInfo::Mixed),
                            "The array to add an item on",
                        ),
                        ArgSpec::required(
                            "value",
                            TypeInfo::Mixed,
                            "The value to add to the array",
                        ),
                        ArgSpec::optional(
                            "key",
                            TypeInfo::Mixed,
                            "Key (string or integer) under which to add the value to the array. If not provided, the value is added without key",
                        ),
                    ],
                    TypeInfo::array_of(TypeInfo::Mixed),
                    "Adds an element to the array",
                )
            });
        &DESCRIPTOR
    }

    fn evaluate(&self, args: &FieldArgs, context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let mut array = reader.array("array")?.clone();
        let value = reader.required("value")?.clone();
        let key = match reader.optional("key")? {
            Some(key) if key_supplied(key, context.config.add_item_key) => {
                Some(reader.text_of("key", key)?)
            }
            _ => None,
        };

        match key {
            Some(key) => insert_keyed(&mut array, key, value),
            None => append(&mut array, value),
        }
        Ok(array)
    }
}

fn key_supplied(key: &Value, policy: KeyPolicy) -> bool {
    match policy {
        KeyPolicy::Presence => true,
        KeyPolicy::Truthy => key.is_truthy(),
    }
}

/// Set `array[key] = value`; a list becomes a map when the key is not a list slot
fn insert_keyed(array: &mut Value, key: String, value: Value) {
    if let Value::List(items) = array {
        match list_slot(&key, items.len()) {
            Some(index) if index < items.len() => {
                items[index] = value;
                return;
            }
            Some(_) => {
                items.push(value);
                return;
            }
            None => {
                let entries = std::mem::take(items)
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect();
                *array = Value::Map(entries);
            }
        }
    }
    if let Value::Map(entries) = array {
        entries.insert(key, value);
    }
}

/// Existing index of `key` in a list of length `len`, or `len` itself
fn list_slot(key: &str, len: usize) -> Option<usize> {
    match Value::from_key(key) {
        Value::Integer(i) => usize::try_from(i).ok().filter(|&i| i <= len),
        _ => None,
    }
}

/// Append `value`; maps use the next integer key
fn append(array: &mut Value, value: Value) {
    match array {
        Value::List(items) => items.push(value),
        Value::Map(entries) => {
            let next = entries
                .keys()
                .filter_map(|k| match Value::from_key(k) {
                    Value::Integer(i) => Some(i),
                    _ => None,
                })
                .max()
                .map_or(0, |i| i + 1);
            entries.insert(next.to_string(), value);
        }
        _ => {}
    }
}
