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

//! Field arguments as supplied by the host engine

use indexmap::IndexMap;
use std::fmt;

use crate::evaluator::{EvaluationError, EvaluationResult};
use crate::model::Value;

/// A nested field expression whose value is not yet known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExpression(String);

impl FieldExpression {
    /// Wrap the source text of a nested field, e.g. `posts()`
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Source text of the expression
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One argument slot: a literal value or a deferred field expression
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Concrete value
    Literal(Value),
    /// Value produced by a nested field, resolved later by the host
    Deferred(FieldExpression),
}

impl ArgValue {
    /// Check if this argument is deferred
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The literal value, if resolved
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// Arguments of a single field invocation, keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    values: IndexMap<String, ArgValue>,
}

impl FieldArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal argument
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values
            .insert(name.into(), ArgValue::Literal(value.into()));
        self
    }

    /// Add a deferred argument
    pub fn with_deferred(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.values.insert(
            name.into(),
            ArgValue::Deferred(FieldExpression::new(expression)),
        );
        self
    }

    /// Insert or replace an argument
    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    /// Get an argument slot by name
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Get a literal argument by name; absent and deferred arguments yield `None`
    pub fn literal(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(ArgValue::as_literal)
    }

    /// Check if an argument was supplied
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over arguments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of supplied arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build literal arguments from a JSON object; non-objects yield no arguments
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(entries) => entries
                .into_iter()
                .map(|(k, v)| (k, ArgValue::Literal(Value::from(v))))
                .collect(),
            _ => Self::new(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ArgValue)> for FieldArgs {
    fn from_iter<I: IntoIterator<Item = (K, ArgValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Typed access to an operator's arguments during evaluation
///
/// Every accessor reports failures as evaluation errors attributed to the
/// operator.
#[derive(Clone, Copy)]
pub struct ArgReader<'a> {
    operator: &'static str,
    args: &'a FieldArgs,
}

impl<'a> ArgReader<'a> {
    /// Create a reader for the given operator
    pub fn new(operator: &'static str, args: &'a FieldArgs) -> Self {
        Self { operator, args }
    }

    /// Required argument value
    pub fn required(&self, name: &str) -> EvaluationResult<&'a Value> {
        match self.args.get(name) {
            Some(ArgValue::Literal(value)) => Ok(value),
            Some(ArgValue::Deferred(expression)) => Err(self.unresolved(name, expression)),
            None => Err(EvaluationError::MissingArgument {
                operator: self.operator.to_string(),
                argument: name.to_string(),
            }),
        }
    }

    /// Optional argument value; absent and null arguments yield `None`
    pub fn optional(&self, name: &str) -> EvaluationResult<Option<&'a Value>> {
        match self.args.get(name) {
            Some(ArgValue::Literal(Value::Null)) | None => Ok(None),
            Some(ArgValue::Literal(value)) => Ok(Some(value)),
            Some(ArgValue::Deferred(expression)) => Err(self.unresolved(name, expression)),
        }
    }

    /// Required array argument (list or map)
    pub fn array(&self, name: &str) -> EvaluationResult<&'a Value> {
        let value = self.required(name)?;
        if value.is_array() {
            Ok(value)
        } else {
            Err(self.mismatch(name, "array", value))
        }
    }

    /// Required array argument as its elements, keys discarded
    pub fn elements(&self, name: &str) -> EvaluationResult<Vec<&'a Value>> {
        let value = self.required(name)?;
        value
            .elements()
            .ok_or_else(|| self.mismatch(name, "array", value))
    }

    /// Required scalar argument coerced to a string
    pub fn string(&self, name: &str) -> EvaluationResult<String> {
        let value = self.required(name)?;
        self.text_of(name, value)
    }

    /// Required numeric argument
    pub fn float(&self, name: &str) -> EvaluationResult<f64> {
        let value = self.required(name)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(name, "Float", value))
    }

    /// Required array of scalars, each coerced to a string
    pub fn strings(&self, name: &str) -> EvaluationResult<Vec<String>> {
        self.elements(name)?
            .into_iter()
            .map(|value| self.text_of(name, value))
            .collect()
    }

    /// Coerce an element of argument `name` to a string
    pub fn text_of(&self, name: &str, value: &Value) -> EvaluationResult<String> {
        value
            .to_text()
            .ok_or_else(|| self.mismatch(name, "String", value))
    }

    /// Build a type mismatch error for argument `name`
    pub fn mismatch(&self, name: &str, expected: &str, actual: &Value) -> EvaluationError {
        EvaluationError::type_mismatch(self.operator, name, expected, actual.type_name())
    }

    fn unresolved(&self, name: &str, expression: &FieldExpression) -> EvaluationError {
        EvaluationError::UnresolvedArgument {
            operator: self.operator.to_string(),
            argument: name.to_string(),
            expression: expression.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_lookup() {
        let args = FieldArgs::new()
            .with("array", Value::from(json!([1, 2])))
            .with_deferred("position", "count()");

        assert_eq!(args.len(), 2);
        assert!(args.contains("position"));
        assert_eq!(args.literal("array"), Some(&Value::from(json!([1, 2]))));
        assert_eq!(args.literal("position"), None);
        assert!(args.get("position").is_some_and(ArgValue::is_deferred));
    }

    #[test]
    fn test_from_json_object() {
        let args = FieldArgs::from_json(json!({"text": "hi", "n": 3}));
        assert_eq!(args.literal("text"), Some(&Value::from("hi")));
        assert_eq!(args.literal("n"), Some(&Value::Integer(3)));
        assert!(FieldArgs::from_json(json!([1])).is_empty());
    }

    #[test]
    fn test_reader_errors() {
        let args = FieldArgs::new()
            .with("text", 5i64)
            .with("list", Value::from(json!([[1]])))
            .with_deferred("later", "posts()");
        let reader = ArgReader::new("upperCase", &args);

        assert_eq!(reader.string("text").unwrap(), "5");
        assert!(matches!(
            reader.required("missing"),
            Err(EvaluationError::MissingArgument { .. })
        ));
        assert!(matches!(
            reader.required("later"),
            Err(EvaluationError::UnresolvedArgument { ref expression, .. }) if expression == "posts()"
        ));
        assert!(matches!(
            reader.array("text"),
            Err(EvaluationError::TypeMismatch { .. })
        ));
        assert!(matches!(
            reader.strings("list"),
            Err(EvaluationError::TypeMismatch { .. })
        ));
        assert_eq!(reader.optional("missing").unwrap(), None);
    }
}
