//! Unit tests for form schema validation
//!
//! These tests exercise the structural validator across well-formed and
//! malformed candidate documents, checking both the verdict and the exact
//! diagnostic messages so editor surfaces can rely on them.

use formspec_core::{validate_schema, Schema};
use serde_json::json;

/// Helper to build a minimal valid schema document
fn minimal_valid_schema() -> serde_json::Value {
    json!({
        "formTitle": "T",
        "formDescription": "D",
        "fields": [
            {"id": "name", "type": "text", "label": "Name", "required": true}
        ]
    })
}

#[cfg(test)]
mod root_structure {
    use super::*;

    #[test]
    fn test_minimal_schema_is_valid() {
        let report = validate_schema(&minimal_valid_schema());
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_title_and_description_both_reported() {
        let report = validate_schema(&json!({"fields": []}));
        assert!(!report.is_valid);
        assert!(report
            .errors
            .contains(&"formTitle is required and must be a string".to_string()));
        assert!(report
            .errors
            .contains(&"formDescription is required and must be a string".to_string()));
    }

    #[test]
    fn test_non_string_title_reported() {
        let mut candidate = minimal_valid_schema();
        candidate["formTitle"] = json!(12);
        let report = validate_schema(&candidate);
        assert_eq!(
            report.errors,
            vec!["formTitle is required and must be a string"]
        );
    }

    #[test]
    fn test_array_root_rejected() {
        let report = validate_schema(&json!([]));
        assert_eq!(report.errors, vec!["Schema must be an object"]);
    }

    #[test]
    fn test_missing_fields_short_circuits_field_checks() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": {"not": "an array"}
        }));
        assert_eq!(report.errors, vec!["fields must be an array"]);
    }

    #[test]
    fn test_empty_fields_array_is_valid() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": []
        }));
        assert!(report.is_valid);
    }
}

#[cfg(test)]
mod field_checks {
    use super::*;

    #[test]
    fn test_all_field_problems_accumulate() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [
                {},
                {"id": "ok", "type": "text", "label": "Ok"}
            ]
        }));
        assert_eq!(
            report.errors,
            vec![
                "Field at index 0 must have an id",
                "Field at index 0 must have a type",
                "Field at index 0 must have a label",
            ]
        );
    }

    #[test]
    fn test_unknown_type_echoes_value() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{"id": "dob", "type": "date", "label": "Birthday"}]
        }));
        assert_eq!(
            report.errors,
            vec!["Field at index 0 has invalid type: date"]
        );
    }

    #[test]
    fn test_every_field_type_name_accepted() {
        for name in ["text", "email", "select", "radio", "textarea", "number", "checkbox"] {
            let mut field = json!({"id": "f", "type": name, "label": "F"});
            if name == "select" || name == "radio" {
                field["options"] = json!([{"value": "a", "label": "A"}]);
            }
            let report = validate_schema(&json!({
                "formTitle": "T",
                "formDescription": "D",
                "fields": [field]
            }));
            assert!(report.is_valid, "type {} rejected: {:?}", name, report.errors);
        }
    }
}

#[cfg(test)]
mod choice_fields {
    use super::*;

    #[test]
    fn test_select_requires_non_empty_options() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{"id": "plan", "type": "select", "label": "Plan", "required": true, "options": []}]
        }));
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Field plan must have non-empty options array"]
        );
    }

    #[test]
    fn test_radio_missing_options_named_by_index_without_id() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{"type": "radio", "label": "Choice"}]
        }));
        assert!(report
            .errors
            .contains(&"Field at index 0 must have non-empty options array".to_string()));
    }

    #[test]
    fn test_each_bad_option_piece_reported() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "color",
                "type": "radio",
                "label": "Color",
                "options": [
                    {"value": "", "label": "Red"},
                    {"value": "green"},
                    {"value": "blue", "label": "Blue"}
                ]
            }]
        }));
        assert_eq!(
            report.errors,
            vec![
                "Option 0 in field color must have a value",
                "Option 1 in field color must have a label",
            ]
        );
    }
}

#[cfg(test)]
mod validation_blocks {
    use super::*;

    #[test]
    fn test_number_min_greater_than_max_rejected() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "age",
                "type": "number",
                "label": "Age",
                "required": true,
                "validation": {"min": 10, "max": 5}
            }]
        }));
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Min value cannot be greater than max value in field age"]
        );
    }

    #[test]
    fn test_length_bounds_checked_for_any_string_type() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "bio",
                "type": "textarea",
                "label": "Bio",
                "validation": {"minLength": 100, "maxLength": 10}
            }]
        }));
        assert_eq!(
            report.errors,
            vec!["MinLength cannot be greater than maxLength in field bio"]
        );
    }

    #[test]
    fn test_valid_email_pattern_accepted() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "mail",
                "type": "email",
                "label": "Mail",
                "validation": {"pattern": r"^[a-z]+@example\.com$"}
            }]
        }));
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn test_broken_email_pattern_rejected() {
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "mail",
                "type": "email",
                "label": "Mail",
                "validation": {"pattern": "["}
            }]
        }));
        assert_eq!(report.errors, vec!["Invalid email pattern in field mail"]);
    }

    #[test]
    fn test_pattern_on_text_field_not_vetted() {
        // Only email patterns are compiled during schema validation
        let report = validate_schema(&json!({
            "formTitle": "T",
            "formDescription": "D",
            "fields": [{
                "id": "zip",
                "type": "text",
                "label": "Zip",
                "validation": {"pattern": "["}
            }]
        }));
        assert!(report.is_valid);
    }
}

#[cfg(test)]
mod contract {
    use super::*;

    #[test]
    fn test_validation_is_idempotent() {
        let candidates = [
            minimal_valid_schema(),
            json!({"fields": []}),
            json!(null),
            json!({"formTitle": 1, "formDescription": [], "fields": [{}]}),
        ];
        for candidate in candidates {
            let first = validate_schema(&candidate);
            let second = validate_schema(&candidate);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_from_value_round_trip() {
        let schema = Schema::from_value(&minimal_valid_schema()).unwrap();
        assert_eq!(schema.form_title, "T");
        assert_eq!(schema.fields[0].id, "name");

        let err = Schema::from_value(&json!({"fields": []})).unwrap_err();
        assert!(err.to_string().contains("formTitle"));
    }
}
