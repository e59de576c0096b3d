//! Shared helpers for integration tests

#![allow(dead_code)]

use operator_fields::{FieldArgs, OperatorRegistry, RegistryConfig, Value};

/// Registry with the testing preset (strict checks, fixed seed)
pub fn test_registry() -> OperatorRegistry {
    let _ = env_logger::builder().is_test(true).try_init();
    OperatorRegistry::with_config(RegistryConfig::testing())
}

/// Literal arguments from a JSON object
pub fn args(value: serde_json::Value) -> FieldArgs {
    FieldArgs::from_json(value)
}

/// Evaluate a field, panicking on any error
pub fn eval(registry: &OperatorRegistry, name: &str, value: serde_json::Value) -> Value {
    registry
        .resolve(name, &args(value))
        .unwrap_or_else(|err| panic!("{name} failed: {err}"))
}

/// Validation error message, if any
pub fn validation_error(
    registry: &OperatorRegistry,
    name: &str,
    args: &FieldArgs,
) -> Option<String> {
    registry
        .validate(name, args)
        .unwrap_or_else(|err| panic!("{name} is not registered: {err}"))
        .error_message()
        .map(str::to_string)
}
