//! Operator registry
//!
//! This module exposes the fixed operator catalog as schema descriptors and
//! runs the two phases of a field invocation: validation before execution
//! and evaluation once arguments are resolved.

#![warn(missing_docs)]

pub mod args;
pub mod config;
pub mod functions;
pub mod host;
pub mod operator;
pub mod signature;
pub mod validation;

pub use args::{ArgReader, ArgValue, FieldArgs, FieldExpression};
pub use config::{BoundsCheck, KeyPolicy, RegistryConfig};
pub use host::{
    ArrayQuerySerializer, DeferredMarkerDetector, FieldExpressionDetector, FieldQuerySerializer,
};
pub use operator::{Operator, OperatorFunction};
pub use signature::{ArgSpec, OperatorDescriptor};
pub use validation::{ValidationOutcome, validate_field_args};

use std::sync::Arc;

use crate::error::{OperatorError, OperatorResult};
use crate::evaluator::{EvaluationContext, RandomSource};
use crate::model::{TypeInfo, Value};

/// Registry of operator fields
///
/// Holds the configuration and the host collaborators. Lookups go through
/// the static [`Operator`] catalog, so the registry itself carries no
/// per-operator state and is cheap to share across threads.
pub struct OperatorRegistry {
    config: RegistryConfig,
    detector: Arc<dyn FieldExpressionDetector>,
    serializer: Arc<dyn ArrayQuerySerializer>,
    random: RandomSource,
}

impl std::fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operator_count", &Operator::ALL.len())
            .field("config", &self.config)
            .field("random", &self.random)
            .finish_non_exhaustive()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorRegistry {
    /// Create a registry with default configuration and collaborators
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a registry with custom configuration and default collaborators
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start building a registry with custom collaborators
    pub fn builder() -> OperatorRegistryBuilder {
        OperatorRegistryBuilder::default()
    }

    /// Get the active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Names of all operator fields, in schema order
    pub fn list_operator_names(&self) -> Vec<&'static str> {
        Operator::ALL.iter().map(|op| op.name()).collect()
    }

    /// All operators, in schema order
    pub fn operators(&self) -> impl Iterator<Item = Operator> {
        Operator::ALL.into_iter()
    }

    /// Resolve a field name to its operator
    pub fn lookup(&self, name: &str) -> OperatorResult<Operator> {
        name.parse()
    }

    /// Get the schema descriptor of a field
    pub fn schema_for(&self, name: &str) -> OperatorResult<&'static OperatorDescriptor> {
        Ok(self.lookup(name)?.descriptor())
    }

    /// Get the return type of a field
    pub fn schema_field_type(&self, name: &str) -> OperatorResult<&'static TypeInfo> {
        Ok(&self.schema_for(name)?.return_type)
    }

    /// Check if a field never resolves to null
    pub fn is_non_nullable(&self, name: &str) -> OperatorResult<bool> {
        Ok(self.schema_for(name)?.non_nullable)
    }

    /// Get the description of a field
    pub fn description(&self, name: &str) -> OperatorResult<&'static str> {
        Ok(&self.schema_for(name)?.description)
    }

    /// Get the long-form documentation of a field
    ///
    /// Falls back to the schema description for operators without extra prose.
    pub fn documentation(&self, name: &str) -> OperatorResult<&'static str> {
        Ok(self.lookup(name)?.function().documentation())
    }

    /// Get the display name of a field, e.g. `Array Item`
    pub fn human_friendly_name(&self, name: &str) -> OperatorResult<&'static str> {
        Ok(self.lookup(name)?.function().human_friendly_name())
    }

    /// Get the argument schema of a field
    pub fn schema_field_args(&self, name: &str) -> OperatorResult<&'static [ArgSpec]> {
        Ok(&self.schema_for(name)?.parameters)
    }

    /// Validate the arguments of a field before execution
    ///
    /// An unknown name is an error; rejected arguments are reported through
    /// [`ValidationOutcome::Invalid`].
    pub fn validate(&self, name: &str, args: &FieldArgs) -> OperatorResult<ValidationOutcome> {
        let op = self.lookup(name)?;
        Ok(validate_field_args(
            op.function(),
            args,
            self.detector.as_ref(),
            &self.config,
        ))
    }

    /// Evaluate a field with fully resolved arguments
    pub fn evaluate(&self, name: &str, args: &FieldArgs) -> OperatorResult<Value> {
        let op = self.lookup(name)?;
        log::trace!("Evaluating '{}' with {} argument(s)", op, args.len());

        let context = EvaluationContext::new(&self.config, self.serializer.as_ref(), &self.random);
        Ok(op.function().evaluate(args, &context)?)
    }

    /// Validate and then evaluate a field
    ///
    /// Rejected arguments surface as [`OperatorError::Schema`]; evaluation
    /// failures as [`OperatorError::Evaluation`].
    pub fn resolve(&self, name: &str, args: &FieldArgs) -> OperatorResult<Value> {
        match self.validate(name, args)? {
            ValidationOutcome::Invalid(message) => Err(OperatorError::Schema(message)),
            ValidationOutcome::Valid | ValidationOutcome::Deferred => self.evaluate(name, args),
        }
    }
}

/// Builder for [`OperatorRegistry`]
#[derive(Default)]
pub struct OperatorRegistryBuilder {
    config: RegistryConfig,
    detector: Option<Arc<dyn FieldExpressionDetector>>,
    serializer: Option<Arc<dyn ArrayQuerySerializer>>,
}

impl OperatorRegistryBuilder {
    /// Set the configuration
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the field expression detector
    pub fn field_expression_detector(
        mut self,
        detector: impl FieldExpressionDetector + 'static,
    ) -> Self {
        self.detector = Some(Arc::new(detector));
        self
    }

    /// Set the array serializer used by `arrayAsQueryStr`
    pub fn array_serializer(mut self, serializer: impl ArrayQuerySerializer + 'static) -> Self {
        self.serializer = Some(Arc::new(serializer));
        self
    }

    /// Build the registry
    pub fn build(self) -> OperatorRegistry {
        let random = RandomSource::from_seed(self.config.random_seed);
        log::debug!(
            "Built operator registry with {} operators ({:?})",
            Operator::ALL.len(),
            self.config
        );

        OperatorRegistry {
            config: self.config,
            detector: self
                .detector
                .unwrap_or_else(|| Arc::new(DeferredMarkerDetector)),
            serializer: self
                .serializer
                .unwrap_or_else(|| Arc::new(FieldQuerySerializer)),
            random,
        }
    }
}
