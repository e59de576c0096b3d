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

//! Operator catalog and the trait implemented by every operator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OperatorError;
use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::Value;
use crate::registry::args::FieldArgs;
use crate::registry::config::RegistryConfig;
use crate::registry::functions::array::*;
use crate::registry::functions::math::*;
use crate::registry::functions::string::*;
use crate::registry::signature::OperatorDescriptor;

/// Trait for implementing operator fields
pub trait OperatorFunction: Send + Sync {
    /// Get the field name
    fn name(&self) -> &'static str;

    /// Get the human-friendly name for the operator (for documentation)
    fn human_friendly_name(&self) -> &str;

    /// Get the schema descriptor
    fn descriptor(&self) -> &OperatorDescriptor;

    /// Get operator documentation
    fn documentation(&self) -> &str {
        &self.descriptor().description
    }

    /// Check if this operator is pure (deterministic with no side effects)
    fn is_pure(&self) -> bool {
        true
    }

    /// Schema-level validation of literal arguments
    ///
    /// Only called when no argument is a field expression. Returns the
    /// user-facing error message, if any.
    fn validate(&self, _args: &FieldArgs, _config: &RegistryConfig) -> Option<String> {
        None
    }

    /// Evaluate the operator with fully resolved arguments
    fn evaluate(&self, args: &FieldArgs, context: &EvaluationContext<'_>) -> EvaluationResult<Value>;
}

/// The fixed set of operators, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// `sprintf(string, values)`
    Sprintf,
    /// `concat(values)`
    Concat,
    /// `divide(number, by)`
    Divide,
    /// `arrayRandom(array)`
    ArrayRandom,
    /// `arrayJoin(array, separator)`
    ArrayJoin,
    /// `arrayItem(array, position)`
    ArrayItem,
    /// `arraySearch(array, element)`
    ArraySearch,
    /// `arrayFill(target, source, index, properties)`
    ArrayFill,
    /// `arrayValues(array)`
    ArrayValues,
    /// `arrayUnique(array)`
    ArrayUnique,
    /// `arrayDiff(arrays)`
    ArrayDiff,
    /// `arrayAddItem(array, value, key)`
    ArrayAddItem,
    /// `arrayAsQueryStr(array)`
    ArrayAsQueryStr,
    /// `upperCase(text)`
    UpperCase,
    /// `lowerCase(text)`
    LowerCase,
    /// `titleCase(text)`
    TitleCase,
}

impl Operator {
    /// All operators in stable schema order
    pub const ALL: [Operator; 16] = [
        Operator::Sprintf,
        Operator::Concat,
        Operator::Divide,
        Operator::ArrayRandom,
        Operator::ArrayJoin,
        Operator::ArrayItem,
        Operator::ArraySearch,
        Operator::ArrayFill,
        Operator::ArrayValues,
        Operator::ArrayUnique,
        Operator::ArrayDiff,
        Operator::ArrayAddItem,
        Operator::ArrayAsQueryStr,
        Operator::UpperCase,
        Operator::LowerCase,
        Operator::TitleCase,
    ];

    /// Field name of the operator
    pub fn name(self) -> &'static str {
        self.function().name()
    }

    /// Implementation of the operator
    pub fn function(self) -> &'static dyn OperatorFunction {
        match self {
            Operator::Sprintf => &SprintfFunction,
            Operator::Concat => &ConcatFunction,
            Operator::Divide => &DivideFunction,
            Operator::ArrayRandom => &ArrayRandomFunction,
            Operator::ArrayJoin => &ArrayJoinFunction,
            Operator::ArrayItem => &ArrayItemFunction,
            Operator::ArraySearch => &ArraySearchFunction,
            Operator::ArrayFill => &ArrayFillFunction,
            Operator::ArrayValues => &ArrayValuesFunction,
            Operator::ArrayUnique => &ArrayUniqueFunction,
            Operator::ArrayDiff => &ArrayDiffFunction,
            Operator::ArrayAddItem => &ArrayAddItemFunction,
            Operator::ArrayAsQueryStr => &ArrayAsQueryStrFunction,
            Operator::UpperCase => &UpperCaseFunction,
            Operator::LowerCase => &LowerCaseFunction,
            Operator::TitleCase => &TitleCaseFunction,
        }
    }

    /// Schema descriptor of the operator
    pub fn descriptor(self) -> &'static OperatorDescriptor {
        self.function().descriptor()
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| OperatorError::unknown(name))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for op in Operator::ALL {
            assert_eq!(op.name().parse::<Operator>().unwrap(), op);
            assert_eq!(op.descriptor().name, op.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "arrayReverse".parse::<Operator>().unwrap_err();
        assert_eq!(err, OperatorError::unknown("arrayReverse"));
    }

    #[test]
    fn test_serde_uses_field_names() {
        assert_eq!(
            serde_json::to_string(&Operator::ArrayAsQueryStr).unwrap(),
            "\"arrayAsQueryStr\""
        );
        let op: Operator = serde_json::from_str("\"titleCase\"").unwrap();
        assert_eq!(op, Operator::TitleCase);
    }

    #[test]
    fn test_only_random_is_impure() {
        for op in Operator::ALL {
            assert_eq!(op.function().is_pure(), op != Operator::ArrayRandom, "{op}");
        }
    }
}
