//! Structural validation of candidate form schemas
//!
//! The validator inspects an arbitrary decoded JSON value and reports every
//! violation it finds as a human-readable diagnostic. Checks accumulate into
//! a shared list rather than stopping at the first failure; the only two
//! short-circuits are a non-object root and a non-array `fields` value,
//! where nothing further can be inspected.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::schema::FieldType;
use crate::validation::error::ValidationReport;
use regex::Regex;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

/// Validator for candidate form schemas
#[derive(Debug, Default, Clone, Copy)]
pub struct FormSchemaValidator;

impl FormSchemaValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate an arbitrary decoded JSON value as a form schema
    ///
    /// Never panics across this boundary: any unexpected panic during
    /// introspection is contained and reported as the single diagnostic
    /// `Invalid JSON format`, discarding partial results for that call.
    pub fn validate(&self, candidate: &Value) -> ValidationReport {
        match panic::catch_unwind(AssertUnwindSafe(|| self.run_checks(candidate))) {
            Ok(report) => report,
            Err(_) => ValidationReport::from_errors(vec!["Invalid JSON format".to_string()]),
        }
    }

    fn run_checks(&self, candidate: &Value) -> ValidationReport {
        let mut errors = Vec::new();

        let root = match candidate.as_object() {
            Some(root) => root,
            None => {
                errors.push("Schema must be an object".to_string());
                return ValidationReport::from_errors(errors);
            }
        };

        if !matches!(root.get("formTitle"), Some(Value::String(s)) if !s.is_empty()) {
            errors.push("formTitle is required and must be a string".to_string());
        }

        if !matches!(root.get("formDescription"), Some(Value::String(s)) if !s.is_empty()) {
            errors.push("formDescription is required and must be a string".to_string());
        }

        let fields = match root.get("fields").and_then(Value::as_array) {
            Some(fields) => fields,
            None => {
                errors.push("fields must be an array".to_string());
                return ValidationReport::from_errors(errors);
            }
        };

        for (index, field) in fields.iter().enumerate() {
            validate_field(field, index, &mut errors);
        }

        ValidationReport::from_errors(errors)
    }
}

/// Convenience entry point: validate a candidate schema value
pub fn validate_schema(candidate: &Value) -> ValidationReport {
    FormSchemaValidator::new().validate(candidate)
}

/// How a field is referred to in diagnostics: by id when it has one,
/// by position otherwise
fn field_ref(field: &Value, index: usize) -> String {
    match non_empty_str(field.get("id")) {
        Some(id) => id.to_string(),
        None => format!("at index {}", index),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Validate one element of `fields`, accumulating diagnostics
///
/// Checks within a field never short-circuit each other: a field missing
/// its label still has its options and validation block inspected.
fn validate_field(field: &Value, index: usize, errors: &mut Vec<String>) {
    if non_empty_str(field.get("id")).is_none() {
        errors.push(format!("Field at index {} must have an id", index));
    }

    let field_type = match field.get("type") {
        None | Some(Value::Null) => {
            errors.push(format!("Field at index {} must have a type", index));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(format!("Field at index {} must have a type", index));
            None
        }
        Some(Value::String(s)) => {
            let parsed = FieldType::from_name(s);
            if parsed.is_none() {
                errors.push(format!("Field at index {} has invalid type: {}", index, s));
            }
            parsed
        }
        Some(other) => {
            errors.push(format!(
                "Field at index {} has invalid type: {}",
                index, other
            ));
            None
        }
    };

    if non_empty_str(field.get("label")).is_none() {
        errors.push(format!("Field at index {} must have a label", index));
    }

    if field_type.is_some_and(|t| t.has_options()) {
        validate_options(field, index, errors);
    }

    if let Some(validation) = field.get("validation").filter(|v| v.is_object()) {
        validate_rule_block(validation, field_type, &field_ref(field, index), errors);
    }
}

/// Check the `options` array of a choice field, reporting each missing
/// piece individually
fn validate_options(field: &Value, index: usize, errors: &mut Vec<String>) {
    let reference = field_ref(field, index);

    let options = match field.get("options").and_then(Value::as_array) {
        Some(options) if !options.is_empty() => options,
        _ => {
            errors.push(format!(
                "Field {} must have non-empty options array",
                reference
            ));
            return;
        }
    };

    for (option_index, option) in options.iter().enumerate() {
        if non_empty_str(option.get("value")).is_none() {
            errors.push(format!(
                "Option {} in field {} must have a value",
                option_index, reference
            ));
        }
        if non_empty_str(option.get("label")).is_none() {
            errors.push(format!(
                "Option {} in field {} must have a label",
                option_index, reference
            ));
        }
    }
}

/// Check a field's `validation` block against its declared type
fn validate_rule_block(
    validation: &Value,
    field_type: Option<FieldType>,
    reference: &str,
    errors: &mut Vec<String>,
) {
    if field_type == Some(FieldType::Email) {
        if let Some(pattern) = validation.get("pattern").and_then(Value::as_str) {
            if Regex::new(pattern).is_err() {
                errors.push(format!("Invalid email pattern in field {}", reference));
            }
        }
    }

    if field_type == Some(FieldType::Number) {
        let min = validation.get("min");
        let max = validation.get("max");

        if min.is_some() && min.and_then(Value::as_f64).is_none() {
            errors.push(format!("Invalid min value in field {}", reference));
        }
        if max.is_some() && max.and_then(Value::as_f64).is_none() {
            errors.push(format!("Invalid max value in field {}", reference));
        }
        if let (Some(min), Some(max)) = (
            min.and_then(Value::as_f64),
            max.and_then(Value::as_f64),
        ) {
            if min > max {
                errors.push(format!(
                    "Min value cannot be greater than max value in field {}",
                    reference
                ));
            }
        }
    }

    if let (Some(min_length), Some(max_length)) = (
        validation.get("minLength").and_then(Value::as_f64),
        validation.get("maxLength").and_then(Value::as_f64),
    ) {
        if min_length > max_length {
            errors.push(format!(
                "MinLength cannot be greater than maxLength in field {}",
                reference
            ));
        }
    }
}
