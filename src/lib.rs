//! Operator fields for query engines
//!
//! A fixed catalog of utility operators (string formatting, arithmetic and
//! array manipulation) exposed as schema fields. Each operator declares its
//! argument schema, validates literal arguments before execution and computes
//! its value once all arguments are resolved.
//!
//! ```
//! use operator_fields::{FieldArgs, OperatorRegistry, Value};
//! use serde_json::json;
//!
//! let registry = OperatorRegistry::new();
//! let args = FieldArgs::new()
//!     .with("array", Value::from(json!(["a", "b"])))
//!     .with("separator", "-");
//! assert_eq!(registry.resolve("arrayJoin", &args).unwrap(), Value::from("a-b"));
//! ```

pub mod error;
pub mod evaluator;
pub mod model;
pub mod registry;

// Re-export main types
pub use error::{ConfigError, OperatorError, OperatorResult};
pub use evaluator::{EvaluationContext, EvaluationError, EvaluationResult, RandomSource};
pub use model::{TypeInfo, Value};
pub use registry::{
    ArgSpec, ArgValue, ArrayQuerySerializer, BoundsCheck, DeferredMarkerDetector, FieldArgs,
    FieldExpression, FieldExpressionDetector, FieldQuerySerializer, KeyPolicy, Operator,
    OperatorDescriptor, OperatorFunction, OperatorRegistry, OperatorRegistryBuilder,
    RegistryConfig, ValidationOutcome,
};
