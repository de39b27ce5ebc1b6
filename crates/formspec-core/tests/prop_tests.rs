//! Property-based tests for schema validation
//!
//! These tests verify that the validator behaves correctly across a wide
//! range of inputs: it never panics, its verdict is stable, and its report
//! shape holds for every candidate.

use proptest::prelude::*;
use serde_json::{json, Value};

use formspec_core::{compile_validation_rules, validate_schema, Schema};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,50}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map(
                    "[a-zA-Z_][a-zA-Z0-9_]{0,20}",
                    inner,
                    0..5
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for generating field type names, including invalid ones
fn type_name_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("text"),
        Just("email"),
        Just("textarea"),
        Just("number"),
        Just("checkbox"),
        Just("date"),
        Just("file"),
    ]
}

/// Strategy for generating fields that are valid for non-choice types
fn field_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z][a-z0-9_]{0,15}",
        type_name_strategy(),
        "[a-zA-Z ]{1,30}",
        any::<bool>(),
    )
        .prop_map(|(id, ty, label, required)| {
            json!({
                "id": id,
                "type": ty,
                "label": label,
                "required": required,
            })
        })
}

proptest! {
    #[test]
    fn validate_never_panics(candidate in json_value_strategy()) {
        let _ = validate_schema(&candidate);
    }

    #[test]
    fn validate_is_idempotent(candidate in json_value_strategy()) {
        let first = validate_schema(&candidate);
        let second = validate_schema(&candidate);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn report_shape_is_consistent(candidate in json_value_strategy()) {
        let report = validate_schema(&candidate);
        prop_assert_eq!(report.is_valid, report.errors.is_empty());
    }

    #[test]
    fn schemas_with_known_types_validate(
        title in "[a-zA-Z ]{1,20}",
        description in "[a-zA-Z ]{1,40}",
        fields in proptest::collection::vec(field_strategy(), 0..6),
    ) {
        let candidate = json!({
            "formTitle": title,
            "formDescription": description,
            "fields": fields,
        });
        let report = validate_schema(&candidate);

        let all_types_known = candidate["fields"]
            .as_array()
            .unwrap()
            .iter()
            .all(|f| matches!(
                f["type"].as_str(),
                Some("text" | "email" | "textarea" | "number" | "checkbox")
            ));
        prop_assert_eq!(report.is_valid, all_types_known);
    }

    #[test]
    fn valid_schemas_always_compile(
        title in "[a-zA-Z ]{1,20}",
        description in "[a-zA-Z ]{1,40}",
        fields in proptest::collection::vec(field_strategy(), 0..6),
    ) {
        let candidate = json!({
            "formTitle": title,
            "formDescription": description,
            "fields": fields,
        });
        if validate_schema(&candidate).is_valid {
            let schema: Schema = serde_json::from_value(candidate).unwrap();
            let rules = compile_validation_rules(&schema).unwrap();
            prop_assert_eq!(rules.len(), schema.fields.len());
        }
    }
}
