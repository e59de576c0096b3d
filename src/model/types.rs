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

//! Schema type system for operator arguments and return values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type information declared in operator schemas
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    /// Boolean value (true/false)
    Boolean,
    /// Integer numeric value
    Integer,
    /// Floating point numeric value
    Float,
    /// String value
    String,
    /// Any value (used for polymorphic operators)
    Mixed,
    /// Array with element type
    Array(Box<TypeInfo>),
}

impl TypeInfo {
    /// Create an array type of the given element type
    pub fn array_of(element: TypeInfo) -> Self {
        TypeInfo::Array(Box::new(element))
    }

    /// Get the element type if this is an array
    pub fn element_type(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Check if this type is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, TypeInfo::Array(_))
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Boolean => write!(f, "Boolean"),
            TypeInfo::Integer => write!(f, "Int"),
            TypeInfo::Float => write!(f, "Float"),
            TypeInfo::String => write!(f, "String"),
            TypeInfo::Mixed => write!(f, "Mixed"),
            TypeInfo::Array(elem) => write!(f, "[{elem}]"),
        }
    }
}
