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

//! Schema-level validation before execution

use operator_fields::{
    ArgValue, EvaluationError, FieldArgs, FieldExpression, Operator, OperatorError,
    OperatorRegistry, RegistryConfig, ValidationOutcome, Value,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

mod utils;
use utils::{args, test_registry, validation_error};

#[rstest]
#[case(json!(2.0), None)]
#[case(json!(-1), None)]
#[case(json!(0.0), Some("Cannot divide by 0"))]
#[case(json!(0), Some("Cannot divide by 0"))]
fn test_divide_rejects_zero(#[case] by: serde_json::Value, #[case] expected: Option<&str>) {
    let registry = test_registry();
    let args = args(json!({"number": 10, "by": by}));
    assert_eq!(
        validation_error(&registry, "divide", &args).as_deref(),
        expected
    );
}

#[test]
fn test_array_diff_needs_two_arrays() {
    let registry = test_registry();

    let single = args(json!({"arrays": [[1, 2]]}));
    assert_eq!(
        validation_error(&registry, "arrayDiff", &single).as_deref(),
        Some("The array must contain at least 2 elements: '[[1,2]]'")
    );

    let pair = args(json!({"arrays": [[1, 2], [2]]}));
    assert_eq!(validation_error(&registry, "arrayDiff", &pair), None);
}

#[rstest]
#[case(0, true)]
#[case(2, true)]
#[case(3, false)]
#[case(4, false)]
fn test_array_item_strict_bounds(#[case] position: i64, #[case] valid: bool) {
    let registry = test_registry();
    let args = args(json!({"array": ["a", "b", "c"], "position": position}));
    let error = validation_error(&registry, "arrayItem", &args);
    assert_eq!(error.is_none(), valid);
    if !valid {
        assert_eq!(
            error.unwrap(),
            format!("The array contains no element at position '{position}'")
        );
    }
}

#[test]
fn test_array_item_legacy_bounds_let_length_through() {
    let registry = OperatorRegistry::with_config(RegistryConfig::legacy());
    let at_len = args(json!({"array": ["a", "b", "c"], "position": 3}));
    assert_eq!(validation_error(&registry, "arrayItem", &at_len), None);

    let past_len = args(json!({"array": ["a", "b", "c"], "position": 4}));
    assert!(validation_error(&registry, "arrayItem", &past_len).is_some());

    // Validation passed, so the miss surfaces from evaluation instead
    assert!(matches!(
        registry.resolve("arrayItem", &at_len),
        Err(OperatorError::Evaluation(EvaluationError::IndexOutOfRange { size: 3, .. }))
    ));
}

#[test]
fn test_array_item_string_position() {
    let registry = test_registry();
    let valid = args(json!({"array": ["a", "b"], "position": "1"}));
    assert_eq!(validation_error(&registry, "arrayItem", &valid), None);

    let map = args(json!({"array": {"en": "Hello"}, "position": "fr"}));
    assert_eq!(
        validation_error(&registry, "arrayItem", &map).as_deref(),
        Some("The array contains no element at position 'fr'")
    );
}

#[rstest]
#[case("divide", FieldArgs::new().with("number", 1i64).with_deferred("by", "count()"))]
#[case("arrayDiff", FieldArgs::new().with_deferred("arrays", "lists()"))]
#[case(
    "arrayItem",
    FieldArgs::new()
        .with("array", Value::from(json!([])))
        .with_deferred("position", "first()")
)]
fn test_deferred_arguments_skip_value_checks(#[case] name: &str, #[case] args: FieldArgs) {
    let registry = test_registry();
    assert_eq!(
        registry.validate(name, &args).unwrap(),
        ValidationOutcome::Deferred
    );
}

#[test]
fn test_any_deferred_argument_defers_every_operator() {
    let registry = test_registry();

    for op in Operator::ALL {
        let params = registry.schema_field_args(op.name()).unwrap();
        for deferred in params.iter().filter(|param| param.required) {
            // Empty arrays stand in for the remaining literal arguments
            let args: FieldArgs = params
                .iter()
                .filter(|param| param.required)
                .map(|param| {
                    let value = if param.name == deferred.name {
                        ArgValue::Deferred(FieldExpression::new("pending()"))
                    } else {
                        ArgValue::Literal(Value::from(json!([])))
                    };
                    (param.name.clone(), value)
                })
                .collect();

            assert_eq!(
                registry.validate(op.name(), &args).unwrap(),
                ValidationOutcome::Deferred,
                "{op} with '{}' deferred",
                deferred.name
            );
        }
    }
}

#[test]
fn test_mandatory_arguments() {
    let registry = test_registry();
    let only_array = args(json!({"array": ["a"]}));
    assert_eq!(
        validation_error(&registry, "arrayItem", &only_array).as_deref(),
        Some("Mandatory argument 'position' in field 'arrayItem' has not been provided")
    );

    // Optional arguments may be omitted
    assert_eq!(validation_error(&registry, "arrayJoin", &only_array), None);
}

#[test]
fn test_operators_without_checks_are_valid() {
    let registry = test_registry();
    let args = args(json!({"text": "hello"}));
    assert_eq!(
        registry.validate("upperCase", &args).unwrap(),
        ValidationOutcome::Valid
    );
}

#[test]
fn test_resolve_reports_schema_errors() {
    let registry = test_registry();
    let err = registry
        .resolve("divide", &args(json!({"number": 1, "by": 0})))
        .unwrap_err();
    assert_eq!(err, OperatorError::Schema("Cannot divide by 0".to_string()));
    assert!(err.is_schema_error());
}
