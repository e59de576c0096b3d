//! Top-level error types

use thiserror::Error;

use crate::evaluator::EvaluationError;

/// Result type for registry operations
pub type OperatorResult<T> = Result<T, OperatorError>;

/// Errors surfaced by the operator registry
///
/// Schema errors and evaluation errors are kept in separate variants: the
/// former come from pre-execution validation, the latter from computing a
/// value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    /// The operator name is not registered
    #[error("Unknown operator '{name}'")]
    UnknownOperator {
        /// Requested operator name
        name: String,
    },

    /// Schema-level validation rejected the arguments
    #[error("Schema error: {0}")]
    Schema(String),

    /// Evaluation failed after validation
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl OperatorError {
    /// Create an unknown operator error
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }

    /// Check whether this is a schema (validation) error
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Errors raised while loading registry configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration text could not be parsed
    #[error("Invalid registry configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
