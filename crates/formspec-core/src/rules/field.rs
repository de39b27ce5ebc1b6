//! Executable per-field validation rules
//!
//! A `FieldRule` is the compiled form of one field definition. It exposes a
//! single capability: check a submitted value and either pass or fail with
//! a message. The base check is chosen from the field type; declarative
//! refinements (pattern, length and numeric bounds) are layered on top, and
//! the whole rule is wrapped as optional unless the field is required.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Failure message for a missing required value
pub const REQUIRED_MESSAGE: &str = "This field is required";

fn email_format() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // HTML5-style address shape: one @, no whitespace, dotted domain
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    })
}

/// A compiled pattern refinement
#[derive(Debug, Clone)]
pub struct PatternCheck {
    /// Compiled regular expression
    pub regex: Regex,
    /// Failure message override
    pub message: Option<String>,
}

/// Refinements shared by all string-based field types
#[derive(Debug, Clone, Default)]
pub struct StringChecks {
    /// Pattern the value must match
    pub pattern: Option<PatternCheck>,
    /// Minimum length in characters
    pub min_length: Option<f64>,
    /// Maximum length in characters
    pub max_length: Option<f64>,
}

/// Numeric bound refinements for `number` fields
#[derive(Debug, Clone, Default)]
pub struct NumberChecks {
    /// Lower bound, inclusive
    pub min: Option<f64>,
    /// Upper bound, inclusive
    pub max: Option<f64>,
}

/// Base check variants, one per validation semantic
///
/// `select`, `radio`, `textarea`, `checkbox`, and `text` all validate as
/// plain strings; only `email` and `number` carry extra semantics.
#[derive(Debug, Clone)]
pub enum FieldCheck {
    /// Plain string value
    Text(StringChecks),
    /// String value that must look like an email address
    Email {
        /// Failure message override for the format check
        message: Option<String>,
        /// String refinements, applied after the format check
        checks: StringChecks,
    },
    /// Numeric value with optional bounds
    Number(NumberChecks),
}

/// The compiled validation rule for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Whether absence or an empty string is itself a failure
    pub required: bool,
    /// The type-specific check
    pub check: FieldCheck,
}

impl FieldRule {
    /// Check a submitted value against this rule
    ///
    /// An absent value, JSON null, or empty string satisfies an optional
    /// rule; for a required field it fails with [`REQUIRED_MESSAGE`].
    pub fn check(&self, value: Option<&Value>) -> Result<(), String> {
        let value = match value {
            Some(v) if !is_empty_value(v) => v,
            _ => {
                return if self.required {
                    Err(REQUIRED_MESSAGE.to_string())
                } else {
                    Ok(())
                };
            }
        };

        match &self.check {
            FieldCheck::Text(checks) => check_string(value, checks),
            FieldCheck::Email { message, checks } => {
                let text = as_string(value)?;
                if !email_format().is_match(text) {
                    return Err(message.clone().unwrap_or_else(|| "Invalid email".to_string()));
                }
                check_string(value, checks)
            }
            FieldCheck::Number(checks) => check_number(value, checks),
        }
    }
}

/// Absent-equivalent values: null and the empty string
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn as_string(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| "Expected a string".to_string())
}

fn check_string(value: &Value, checks: &StringChecks) -> Result<(), String> {
    let text = as_string(value)?;

    if let Some(pattern) = &checks.pattern {
        if !pattern.regex.is_match(text) {
            return Err(pattern
                .message
                .clone()
                .unwrap_or_else(|| "Invalid format".to_string()));
        }
    }

    let length = text.chars().count() as f64;
    if let Some(min_length) = checks.min_length {
        if length < min_length {
            return Err(format!("Minimum length is {}", min_length));
        }
    }
    if let Some(max_length) = checks.max_length {
        if length > max_length {
            return Err(format!("Maximum length is {}", max_length));
        }
    }

    Ok(())
}

fn check_number(value: &Value, checks: &NumberChecks) -> Result<(), String> {
    let number = value
        .as_f64()
        .ok_or_else(|| "Expected a number".to_string())?;

    if let Some(min) = checks.min {
        if number < min {
            return Err(format!("Value must be at least {}", min));
        }
    }
    if let Some(max) = checks.max {
        if number > max {
            return Err(format!("Value must be at most {}", max));
        }
    }

    Ok(())
}
