//! Compilation of form schemas into executable rule sets
//!
//! Given a schema that already passed structural validation, the compiler
//! derives one executable [`FieldRule`] per field. The resulting [`RuleSet`]
//! checks a submitted value map field-by-field and reports every failure.
//! A rule set is derived data: recompile it whenever the schema changes.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod field;

pub use field::{FieldCheck, FieldRule, NumberChecks, PatternCheck, StringChecks, REQUIRED_MESSAGE};

use crate::schema::{Field, FieldType, Schema, ValidationRule};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Error raised while compiling a schema into rules
///
/// Callers that validate schemas before compiling only ever see
/// `Pattern` for a non-email field carrying a pattern the validator does
/// not vet; everything else is ruled out by the typed schema.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A `pattern` in a validation block failed to compile
    #[error("invalid pattern in field {field}: {source}")]
    Pattern {
        /// Id of the offending field
        field: String,
        /// Underlying regex error
        source: regex::Error,
    },
}

/// One failed rule check for a submitted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    /// Id of the field that failed
    pub field: String,
    /// Human-readable failure message
    pub message: String,
}

/// Outcome of checking a submission against a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    /// Failures in schema field order; empty when the submission passes
    pub failures: Vec<FieldFailure>,
}

impl SubmissionReport {
    /// Whether every rule passed
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compiled validation rules for a schema, keyed by field id
///
/// Iteration follows schema field order so failure reports line up with
/// the rendered form.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    order: Vec<String>,
    rules: HashMap<String, FieldRule>,
}

impl RuleSet {
    /// Compile every field of a validated schema into a rule set
    pub fn compile(schema: &Schema) -> Result<Self, CompileError> {
        let mut order = Vec::with_capacity(schema.fields.len());
        let mut rules = HashMap::with_capacity(schema.fields.len());

        for field in &schema.fields {
            let rule = compile_field(field)?;
            order.push(field.id.clone());
            rules.insert(field.id.clone(), rule);
        }

        Ok(Self { order, rules })
    }

    /// Look up the rule for a field id
    pub fn rule(&self, id: &str) -> Option<&FieldRule> {
        self.rules.get(id)
    }

    /// Field ids in schema order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of compiled rules
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check a submitted value map against every rule
    ///
    /// Values for ids the schema does not define are ignored; every defined
    /// field is checked whether or not the submission mentions it.
    pub fn check(&self, values: &Map<String, Value>) -> SubmissionReport {
        let mut failures = Vec::new();

        for id in &self.order {
            let rule = match self.rules.get(id) {
                Some(rule) => rule,
                None => continue,
            };
            if let Err(message) = rule.check(values.get(id)) {
                failures.push(FieldFailure {
                    field: id.clone(),
                    message,
                });
            }
        }

        SubmissionReport { failures }
    }
}

/// Convenience entry point: compile a validated schema into a rule set
pub fn compile_validation_rules(schema: &Schema) -> Result<RuleSet, CompileError> {
    RuleSet::compile(schema)
}

fn compile_field(field: &Field) -> Result<FieldRule, CompileError> {
    let validation = field.validation.as_ref();

    let check = match field.field_type {
        FieldType::Email => FieldCheck::Email {
            message: validation.and_then(|v| v.message.clone()),
            checks: string_checks(field, validation)?,
        },
        FieldType::Number => FieldCheck::Number(NumberChecks {
            min: validation.and_then(|v| v.min),
            max: validation.and_then(|v| v.max),
        }),
        FieldType::Text
        | FieldType::Select
        | FieldType::Radio
        | FieldType::Textarea
        | FieldType::Checkbox => FieldCheck::Text(string_checks(field, validation)?),
    };

    Ok(FieldRule {
        required: field.required,
        check,
    })
}

fn string_checks(
    field: &Field,
    validation: Option<&ValidationRule>,
) -> Result<StringChecks, CompileError> {
    let validation = match validation {
        Some(validation) => validation,
        None => return Ok(StringChecks::default()),
    };

    let pattern = match &validation.pattern {
        Some(source) => Some(PatternCheck {
            regex: Regex::new(source).map_err(|source| CompileError::Pattern {
                field: field.id.clone(),
                source,
            })?,
            message: validation.message.clone(),
        }),
        None => None,
    };

    Ok(StringChecks {
        pattern,
        min_length: validation.min_length,
        max_length: validation.max_length,
    })
}
