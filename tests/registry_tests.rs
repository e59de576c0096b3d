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

//! Registry construction, injected collaborators and concurrent use

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use operator_fields::{
    ArgValue, ArrayQuerySerializer, BoundsCheck, EvaluationResult, FieldArgs,
    FieldExpressionDetector, KeyPolicy, Operator, OperatorRegistry, RegistryConfig,
    ValidationOutcome, Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;

mod utils;
use utils::{args, eval, test_registry};

/// Treats string literals starting with `$` as host variables
struct DollarDetector;

impl FieldExpressionDetector for DollarDetector {
    fn contains_field_expression(&self, args: &FieldArgs) -> bool {
        args.iter().any(|(_, value)| match value {
            ArgValue::Literal(Value::String(s)) => s.starts_with('$'),
            ArgValue::Literal(_) => false,
            ArgValue::Deferred(_) => true,
        })
    }
}

/// Renders arrays as JSON and counts calls
#[derive(Default)]
struct JsonSerializer {
    calls: Arc<AtomicUsize>,
}

impl ArrayQuerySerializer for JsonSerializer {
    fn serialize(&self, array: &Value) -> EvaluationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(array.to_string())
    }
}

#[test]
fn test_custom_detector() {
    let registry = OperatorRegistry::builder()
        .field_expression_detector(DollarDetector)
        .build();

    let args = args(json!({"number": 1, "by": "$divisor"}));
    assert_eq!(
        registry.validate("divide", &args).unwrap(),
        ValidationOutcome::Deferred
    );
}

#[test]
fn test_custom_serializer() {
    let serializer = JsonSerializer::default();
    let calls = Arc::clone(&serializer.calls);
    let registry = OperatorRegistry::builder()
        .array_serializer(serializer)
        .build();

    let rendered = eval(
        &registry,
        "arrayAsQueryStr",
        json!({"array": {"lang": "en", "ids": [1, 2]}}),
    );
    assert_eq!(rendered, Value::from(r#"{"lang":"en","ids":[1,2]}"#));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_config_from_json() {
    let config = RegistryConfig::from_json_str(
        r#"{"array_item_bounds": "legacy", "add_item_key": "truthy", "random_seed": 7}"#,
    )
    .unwrap();
    assert_eq!(config.array_item_bounds, BoundsCheck::Legacy);
    assert_eq!(config.add_item_key, KeyPolicy::Truthy);
    assert_eq!(config.random_seed, Some(7));

    let registry = OperatorRegistry::with_config(config.clone());
    assert_eq!(registry.config(), &config);

    assert!(RegistryConfig::from_json_str("not json").is_err());
}

#[test]
fn test_operator_lookup() {
    let registry = test_registry();
    assert_eq!(registry.lookup("arrayDiff").unwrap(), Operator::ArrayDiff);
    assert_eq!(registry.operators().count(), 16);
    assert_eq!(
        registry.operators().map(|op| op.name()).collect::<Vec<_>>(),
        registry.list_operator_names()
    );
}

#[test]
fn test_shared_across_threads() {
    let registry = Arc::new(OperatorRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for j in 0..50 {
                    let n = i * 100 + j;
                    let joined = registry
                        .resolve(
                            "arrayJoin",
                            &args(json!({"array": [n, n + 1], "separator": ","})),
                        )
                        .unwrap();
                    assert_eq!(joined, Value::String(format!("{n},{}", n + 1)));

                    let picked = registry
                        .resolve("arrayRandom", &args(json!({"array": [n, n + 1]})))
                        .unwrap();
                    assert!(picked == Value::Integer(n) || picked == Value::Integer(n + 1));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_seeded_registry_shared_across_threads() {
    let registry = Arc::new(test_registry());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..25)
                    .map(|_| eval(&registry, "arrayRandom", json!({"array": ["a", "b", "c"]})))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let picks = handle.join().unwrap();
        assert_eq!(picks.len(), 25);
        assert!(picks.iter().all(|p| ["a", "b", "c"].contains(&p.as_str().unwrap_or(""))));
    }
}

#[test]
fn test_random_seed_preset() {
    let config = RegistryConfig::legacy().with_random_seed(99);
    assert_eq!(config.random_seed, Some(99));
    assert_eq!(config.array_item_bounds, BoundsCheck::Legacy);

    let input = json!({"array": ["a", "b", "c", "d", "e"]});
    let first = OperatorRegistry::with_config(config.clone());
    let second = OperatorRegistry::with_config(config);
    let a: Vec<Value> = (0..12).map(|_| eval(&first, "arrayRandom", input.clone())).collect();
    let b: Vec<Value> = (0..12).map(|_| eval(&second, "arrayRandom", input.clone())).collect();
    assert_eq!(a, b);
}
