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

// Error types for operator evaluation

use thiserror::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors that can occur while computing an operator's value
///
/// Each error is fatal to the resolution of a single field only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A required argument was not supplied
    #[error("Operator '{operator}' requires argument '{argument}'")]
    MissingArgument {
        /// Operator name
        operator: String,
        /// Argument name
        argument: String,
    },

    /// An argument is still an unresolved field expression
    #[error("Operator '{operator}' argument '{argument}' is an unresolved field expression: {expression}")]
    UnresolvedArgument {
        /// Operator name
        operator: String,
        /// Argument name
        argument: String,
        /// Source text of the field expression
        expression: String,
    },

    /// No element at the requested position
    #[error("Operator '{operator}': no element at position '{position}' in array of size {size}")]
    IndexOutOfRange {
        /// Operator name
        operator: String,
        /// Requested position or key
        position: String,
        /// Array size
        size: usize,
    },

    /// The operator needs at least one element but the array is empty
    #[error("Operator '{operator}' argument '{argument}' must not be an empty array")]
    EmptyArray {
        /// Operator name
        operator: String,
        /// Argument name
        argument: String,
    },

    /// Argument value has the wrong kind
    #[error("Operator '{operator}' argument '{argument}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// Operator name
        operator: String,
        /// Argument name
        argument: String,
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Division by zero
    #[error("Operator '{operator}' cannot divide by 0")]
    DivisionByZero {
        /// Operator name
        operator: String,
    },

    /// Invalid format string or too few values for it
    #[error("Operator '{operator}' format error: {message}")]
    Format {
        /// Operator name
        operator: String,
        /// Error message
        message: String,
    },
}

impl EvaluationError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        operator: impl Into<String>,
        argument: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            operator: operator.into(),
            argument: argument.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Name of the operator that failed
    pub fn operator(&self) -> &str {
        match self {
            Self::MissingArgument { operator, .. }
            | Self::UnresolvedArgument { operator, .. }
            | Self::IndexOutOfRange { operator, .. }
            | Self::EmptyArray { operator, .. }
            | Self::TypeMismatch { operator, .. }
            | Self::DivisionByZero { operator }
            | Self::Format { operator, .. } => operator,
        }
    }
}
