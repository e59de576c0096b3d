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

//! Schema-level validation run before evaluation

use crate::registry::args::FieldArgs;
use crate::registry::config::RegistryConfig;
use crate::registry::host::FieldExpressionDetector;
use crate::registry::operator::OperatorFunction;

/// Result of validating one field invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Arguments are acceptable
    Valid,
    /// A field expression is present; value checks were skipped
    Deferred,
    /// Arguments were rejected with a user-facing message
    Invalid(String),
}

impl ValidationOutcome {
    /// The error message, if validation failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            Self::Valid | Self::Deferred => None,
        }
    }

    /// Check if evaluation may proceed
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Validate a field invocation
///
/// Mandatory arguments are checked first since their presence is known even
/// for field expressions. Operator-specific checks inspect values and
/// therefore never run while any argument is a field expression.
pub fn validate_field_args(
    function: &dyn OperatorFunction,
    args: &FieldArgs,
    detector: &dyn FieldExpressionDetector,
    config: &RegistryConfig,
) -> ValidationOutcome {
    let descriptor = function.descriptor();
    if let Some(missing) = descriptor
        .required_parameters()
        .find(|param| !args.contains(&param.name))
    {
        return ValidationOutcome::Invalid(format!(
            "Mandatory argument '{}' in field '{}' has not been provided",
            missing.name, descriptor.name
        ));
    }

    if detector.contains_field_expression(args) {
        log::debug!(
            "Deferring validation of '{}': argument contains a field expression",
            function.name()
        );
        return ValidationOutcome::Deferred;
    }

    match function.validate(args, config) {
        Some(message) => ValidationOutcome::Invalid(message),
        None => ValidationOutcome::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::registry::host::DeferredMarkerDetector;
    use crate::registry::operator::Operator;
    use serde_json::json;

    fn check(op: Operator, args: &FieldArgs) -> ValidationOutcome {
        validate_field_args(
            op.function(),
            args,
            &DeferredMarkerDetector,
            &RegistryConfig::default(),
        )
    }

    #[test]
    fn test_missing_mandatory_argument() {
        let outcome = check(Operator::Divide, &FieldArgs::new().with("number", 4i64));
        assert_eq!(
            outcome.error_message(),
            Some("Mandatory argument 'by' in field 'divide' has not been provided")
        );
    }

    #[test]
    fn test_missing_argument_reported_even_when_deferred() {
        let args = FieldArgs::new().with_deferred("number", "count()");
        assert!(!check(Operator::Divide, &args).is_ok());
    }

    #[test]
    fn test_field_expression_skips_value_checks() {
        let args = FieldArgs::new()
            .with_deferred("number", "count()")
            .with("by", 0.0);
        assert_eq!(check(Operator::Divide, &args), ValidationOutcome::Deferred);
    }

    #[test]
    fn test_value_checks_run_on_literals() {
        let args = FieldArgs::new().with("number", 1i64).with("by", 0.0);
        assert_eq!(
            check(Operator::Divide, &args),
            ValidationOutcome::Invalid("Cannot divide by 0".to_string())
        );

        let args = FieldArgs::new().with("arrays", Value::from(json!([[1], [2]])));
        assert_eq!(check(Operator::ArrayDiff, &args), ValidationOutcome::Valid);
    }
}
