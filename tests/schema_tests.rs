//! Schema discovery and introspection

use operator_fields::{OperatorError, TypeInfo};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod utils;
use utils::test_registry;

#[test]
fn test_operator_names_are_stable() {
    let registry = test_registry();
    assert_eq!(
        registry.list_operator_names(),
        vec![
            "sprintf",
            "concat",
            "divide",
            "arrayRandom",
            "arrayJoin",
            "arrayItem",
            "arraySearch",
            "arrayFill",
            "arrayValues",
            "arrayUnique",
            "arrayDiff",
            "arrayAddItem",
            "arrayAsQueryStr",
            "upperCase",
            "lowerCase",
            "titleCase",
        ]
    );
}

#[rstest]
#[case("sprintf", TypeInfo::String)]
#[case("concat", TypeInfo::String)]
#[case("divide", TypeInfo::Float)]
#[case("arrayRandom", TypeInfo::Mixed)]
#[case("arrayJoin", TypeInfo::String)]
#[case("arrayItem", TypeInfo::Mixed)]
#[case("arraySearch", TypeInfo::Mixed)]
#[case("arrayFill", TypeInfo::array_of(TypeInfo::Mixed))]
#[case("arrayValues", TypeInfo::array_of(TypeInfo::Mixed))]
#[case("arrayUnique", TypeInfo::array_of(TypeInfo::Mixed))]
#[case("arrayDiff", TypeInfo::array_of(TypeInfo::Mixed))]
#[case("arrayAddItem", TypeInfo::array_of(TypeInfo::Mixed))]
#[case("arrayAsQueryStr", TypeInfo::String)]
#[case("upperCase", TypeInfo::String)]
#[case("lowerCase", TypeInfo::String)]
#[case("titleCase", TypeInfo::String)]
fn test_return_types(#[case] name: &str, #[case] expected: TypeInfo) {
    let registry = test_registry();
    assert_eq!(registry.schema_field_type(name).unwrap(), &expected);
    assert!(registry.is_non_nullable(name).unwrap());
    assert!(!registry.description(name).unwrap().is_empty());
}

#[rstest]
#[case("sprintf", "sprintf(string: String!, values: [String]!): String!")]
#[case("divide", "divide(number: Float!, by: Float!): Float!")]
#[case("arrayJoin", "arrayJoin(array: [String]!, separator: String): String!")]
#[case("arrayItem", "arrayItem(array: [Mixed]!, position: String!): Mixed!")]
#[case(
    "arrayFill",
    "arrayFill(target: [Mixed]!, source: [Mixed]!, index: String!, properties: [String]): [Mixed]!"
)]
#[case(
    "arrayAddItem",
    "arrayAddItem(array: [Mixed]!, value: Mixed!, key: Mixed): [Mixed]!"
)]
#[case("titleCase", "titleCase(text: String!): String!")]
fn test_signatures(#[case] name: &str, #[case] expected: &str) {
    let registry = test_registry();
    assert_eq!(registry.schema_for(name).unwrap().to_string(), expected);
}

#[test]
fn test_every_listed_name_has_a_schema() {
    let registry = test_registry();
    for name in registry.list_operator_names() {
        let descriptor = registry.schema_for(name).unwrap();
        assert_eq!(descriptor.name, name);
        assert_eq!(
            registry.schema_field_args(name).unwrap().len(),
            descriptor.parameters.len()
        );
    }
}

#[test]
fn test_unknown_operator() {
    let registry = test_registry();
    let err = registry.schema_for("arrayReverse").unwrap_err();
    assert_eq!(
        err,
        OperatorError::UnknownOperator {
            name: "arrayReverse".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown operator 'arrayReverse'");
}

#[test]
fn test_documentation() {
    let registry = test_registry();
    assert_eq!(
        registry.documentation("arrayItem").unwrap(),
        "Returns the element at the 0-based `position` of a list, or under the key `position` of an associative array."
    );
    assert!(
        registry
            .documentation("arrayUnique")
            .unwrap()
            .contains("string representation")
    );

    // Operators without extra prose fall back to the schema description
    assert_eq!(
        registry.documentation("concat").unwrap(),
        registry.description("concat").unwrap()
    );
    assert!(registry.documentation("arrayReverse").is_err());
}

#[rstest]
#[case("arrayItem", "Array Item")]
#[case("arrayAsQueryStr", "Array As Query String")]
#[case("titleCase", "Title Case")]
#[case("divide", "Divide")]
fn test_human_friendly_names(#[case] name: &str, #[case] expected: &str) {
    let registry = test_registry();
    assert_eq!(registry.human_friendly_name(name).unwrap(), expected);
}
