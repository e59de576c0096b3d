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

//! Operator descriptors for schema generation and documentation

use crate::model::TypeInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema descriptor of one operator field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorDescriptor {
    /// Field name
    pub name: String,
    /// Arguments in documentation order
    pub parameters: Vec<ArgSpec>,
    /// Return type
    pub return_type: TypeInfo,
    /// Whether the field never resolves to null
    pub non_nullable: bool,
    /// Human-readable description
    pub description: String,
}

/// Argument declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Argument name
    pub name: String,
    /// Argument type
    pub arg_type: TypeInfo,
    /// Whether the argument is mandatory
    pub required: bool,
    /// Human-readable description
    pub description: String,
}

impl OperatorDescriptor {
    /// Create a non-nullable operator descriptor
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ArgSpec>,
        return_type: TypeInfo,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
            non_nullable: true,
            description: description.into(),
        }
    }

    /// Mark the field as nullable
    pub fn nullable(mut self) -> Self {
        self.non_nullable = false;
        self
    }

    /// Look up an argument declaration by name
    pub fn parameter(&self, name: &str) -> Option<&ArgSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Mandatory arguments in declaration order
    pub fn required_parameters(&self) -> impl Iterator<Item = &ArgSpec> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ArgSpec {
    /// Create a required argument
    pub fn required(
        name: impl Into<String>,
        arg_type: TypeInfo,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arg_type,
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional argument
    pub fn optional(
        name: impl Into<String>,
        arg_type: TypeInfo,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arg_type,
            required: false,
            description: description.into(),
        }
    }
}

impl fmt::Display for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.arg_type)?;
        if self.required {
            write!(f, "!")?;
        }
        Ok(())
    }
}

impl fmt::Display for OperatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, "): {}", self.return_type)?;
        if self.non_nullable {
            write!(f, "!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        let descriptor = OperatorDescriptor::new(
            "arrayJoin",
            vec![
                ArgSpec::required("array", TypeInfo::array_of(TypeInfo::String), ""),
                ArgSpec::optional("separator", TypeInfo::String, ""),
            ],
            TypeInfo::String,
            "Join all the strings in an array",
        );

        assert_eq!(
            descriptor.to_string(),
            "arrayJoin(array: [String]!, separator: String): String!"
        );
        assert_eq!(
            descriptor.clone().nullable().to_string(),
            "arrayJoin(array: [String]!, separator: String): String"
        );
    }

    #[test]
    fn test_required_parameters() {
        let descriptor = OperatorDescriptor::new(
            "arrayAddItem",
            vec![
                ArgSpec::required("array", TypeInfo::array_of(TypeInfo::Mixed), ""),
                ArgSpec::required("value", TypeInfo::Mixed, ""),
                ArgSpec::optional("key", TypeInfo::Mixed, ""),
            ],
            TypeInfo::array_of(TypeInfo::Mixed),
            "",
        );

        let names: Vec<&str> = descriptor
            .required_parameters()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["array", "value"]);
        assert!(descriptor.parameter("key").is_some_and(|p| !p.required));
        assert!(descriptor.parameter("missing").is_none());
    }
}
