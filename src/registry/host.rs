// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Collaborators supplied by the host query engine
//!
//! The registry never looks these up globally; they are injected through
//! [`OperatorRegistryBuilder`](crate::registry::OperatorRegistryBuilder).

use crate::evaluator::EvaluationResult;
use crate::model::Value;
use crate::registry::args::FieldArgs;

/// Reports whether any argument is a nested field expression
pub trait FieldExpressionDetector: Send + Sync {
    /// Check if any argument value is a field expression rather than a literal
    fn contains_field_expression(&self, args: &FieldArgs) -> bool;
}

/// Default detector: an argument is a field expression when it is marked deferred
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredMarkerDetector;

impl FieldExpressionDetector for DeferredMarkerDetector {
    fn contains_field_expression(&self, args: &FieldArgs) -> bool {
        args.iter().any(|(_, value)| value.is_deferred())
    }
}

/// Serializes an array into the host's query-string notation
pub trait ArrayQuerySerializer: Send + Sync {
    /// Render `array` as it would be written inside a query
    fn serialize(&self, array: &Value) -> EvaluationResult<String>;
}

/// Default serializer using field-argument array syntax
///
/// Lists render as `[a,b]`, maps as `[key:value,...]`, nested arrays
/// recursively. Scalars render through their string form, unquoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldQuerySerializer;

impl FieldQuerySerializer {
    const OPENING: char = '[';
    const CLOSING: char = ']';
    const SEPARATOR: &'static str = ",";
    const KEY_VALUE_DELIMITER: char = ':';

    fn render(value: &Value, out: &mut String) {
        match value {
            Value::List(items) => {
                out.push(Self::OPENING);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(Self::SEPARATOR);
                    }
                    Self::render(item, out);
                }
                out.push(Self::CLOSING);
            }
            Value::Map(entries) => {
                out.push(Self::OPENING);
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(Self::SEPARATOR);
                    }
                    out.push_str(key);
                    out.push(Self::KEY_VALUE_DELIMITER);
                    Self::render(item, out);
                }
                out.push(Self::CLOSING);
            }
            scalar => out.push_str(&scalar.to_text().unwrap_or_default()),
        }
    }
}

impl ArrayQuerySerializer for FieldQuerySerializer {
    fn serialize(&self, array: &Value) -> EvaluationResult<String> {
        let mut out = String::new();
        Self::render(array, &mut out);
        Ok(out)
    }
}
