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

//! Core value type for operator arguments and results

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Literal value passed to or produced by an operator
///
/// Arrays come in two shapes: `List` for sequential arrays and `Map` for
/// associative arrays. Map entries keep their insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// String value
    String(String),

    /// Sequential array
    List(Vec<Value>),

    /// Associative array with ordered keys
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Create a list value
    pub fn list(values: Vec<Value>) -> Self {
        Self::List(values)
    }

    /// Create a map value from key/value pairs, keeping their order
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Name of the value's kind, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Check if the value is an array (list or map)
    pub fn is_array(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Borrow the string content, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements, if this is an array
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Array elements in order, discarding keys
    pub fn elements(&self) -> Option<Vec<&Value>> {
        match self {
            Self::List(items) => Some(items.iter().collect()),
            Self::Map(entries) => Some(entries.values().collect()),
            _ => None,
        }
    }

    /// Mutable array elements in order
    pub fn elements_mut(&mut self) -> Option<Vec<&mut Value>> {
        match self {
            Self::List(items) => Some(items.iter_mut().collect()),
            Self::Map(entries) => Some(entries.values_mut().collect()),
            _ => None,
        }
    }

    /// Array entries as (key, element) pairs; list keys are their indices
    pub fn entries(&self) -> Option<Vec<(Value, &Value)>> {
        match self {
            Self::List(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (Value::Integer(i as i64), v))
                    .collect(),
            ),
            Self::Map(entries) => Some(
                entries
                    .iter()
                    .map(|(k, v)| (Value::from_key(k), v))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Numeric view of the value: numbers and numeric strings
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Integral view of the value: integers, integral floats and integer strings
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Self::String(s) => s.trim().parse::<i64>().ok().or_else(|| {
                parse_numeric(s)
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    /// String form of a scalar value; arrays have none
    ///
    /// `true` becomes "1", `false` and null become "", integral floats drop
    /// their fraction.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => Some(String::new()),
            Self::Boolean(true) => Some("1".to_string()),
            Self::Boolean(false) => Some(String::new()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(format_float(*f)),
            Self::String(s) => Some(s.clone()),
            Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Truthiness: null, false, 0, 0.0, "", "0" and empty arrays are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !(s.is_empty() || s == "0"),
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }

    /// Loose (coercive) equality
    ///
    /// Numbers and numeric strings compare numerically, booleans compare by
    /// truthiness, null equals any falsy non-string value and the empty
    /// string, arrays compare entry by entry.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Boolean(a), b) | (b, Boolean(a)) => *a == b.is_truthy(),
            (Null, String(s)) | (String(s), Null) => s.is_empty(),
            (Null, v) | (v, Null) => !v.is_truthy(),
            (Integer(a), Integer(b)) => a == b,
            (Integer(_) | Float(_), Integer(_) | Float(_)) => self.as_f64() == other.as_f64(),
            (String(a), String(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (String(s), n @ (Integer(_) | Float(_))) | (n @ (Integer(_) | Float(_)), String(s)) => {
                match parse_numeric(s) {
                    Some(x) => n.as_f64() == Some(x),
                    None => n.to_text().as_deref() == Some(s.as_str()),
                }
            }
            (List(_) | Map(_), List(_) | Map(_)) => arrays_loose_eq(self, other),
            _ => false,
        }
    }

    /// Key used for string-representation comparisons (unique, diff)
    pub(crate) fn comparison_key(&self) -> String {
        self.to_text().unwrap_or_else(|| self.to_string())
    }

    /// Value form of an associative array key: integer-like keys become integers
    pub fn from_key(key: &str) -> Value {
        match key.parse::<i64>() {
            Ok(i) if i.to_string() == key => Value::Integer(i),
            _ => Value::String(key.to_string()),
        }
    }

    /// Convert into a `serde_json::Value`; non-finite floats become null
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    fn keyed_pairs(&self) -> Vec<(String, &Value)> {
        match self {
            Self::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            Self::Map(entries) => entries.iter().map(|(k, v)| (k.clone(), v)).collect(),
            _ => Vec::new(),
        }
    }
}

fn arrays_loose_eq(left: &Value, right: &Value) -> bool {
    let left = left.keyed_pairs();
    let right: HashMap<String, &Value> = right.keyed_pairs().into_iter().collect();
    left.len() == right.len()
        && left
            .iter()
            .all(|(k, v)| right.get(k).is_some_and(|other| v.loose_eq(other)))
}

/// Parse a numeric string (optional surrounding whitespace, sign, fraction, exponent)
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let well_formed = trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "INF" } else { "-INF" };
        text.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}
