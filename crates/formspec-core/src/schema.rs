//! Core types for form schemas
//!
//! This module defines the data model for a form schema: the form-level
//! metadata, the typed field definitions, and the declarative validation
//! rules attached to fields. A `Schema` is value data reconstructed from
//! decoded JSON on every edit; it carries no identity beyond structural
//! equality and is never persisted.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::validation::{validate_schema, SchemaError};

/// The closed set of supported field types
///
/// Adding a variant here is a compile-time decision point: the rule
/// compiler matches exhaustively on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Select,
    Radio,
    Textarea,
    Number,
    Checkbox,
}

impl FieldType {
    /// All wire names accepted for `type`, in declaration order
    pub const NAMES: [&'static str; 7] = [
        "text", "email", "select", "radio", "textarea", "number", "checkbox",
    ];

    /// Parse a wire name into a field type
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "email" => Some(Self::Email),
            "select" => Some(Self::Select),
            "radio" => Some(Self::Radio),
            "textarea" => Some(Self::Textarea),
            "number" => Some(Self::Number),
            "checkbox" => Some(Self::Checkbox),
            _ => None,
        }
    }

    /// Whether fields of this type take their values from an options list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
        };
        f.write_str(name)
    }
}

/// One selectable choice for a `select` or `radio` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Submitted value
    pub value: String,

    /// Text shown to the user
    pub label: String,
}

/// Declarative validation rule attached to a field
///
/// `min`/`max` are only meaningful for `number` fields; `minLength`/
/// `maxLength` apply to any string-based type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Regular expression source string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Override for the failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Lower numeric bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper numeric bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Minimum string length; any JSON number the validator admits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,

    /// Maximum string length; any JSON number the validator admits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
}

/// One form input definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Identifier, unique within the schema
    pub id: String,

    /// Field type, drives the base validation semantics
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Text shown to the user
    pub label: String,

    /// Whether a value must be supplied on submit
    #[serde(default)]
    pub required: bool,

    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Choices for `select`/`radio` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,

    /// Declarative validation rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,

    /// Initial value; inert metadata, never validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Help text; inert metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A complete form schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Form title
    pub form_title: String,

    /// Form description
    pub form_description: String,

    /// Field definitions, in display order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Validate a decoded JSON value and deserialize it into a `Schema`
    ///
    /// Runs the structural validator first so the returned error carries
    /// every diagnostic, not just the first deserialization failure.
    pub fn from_value(candidate: &Value) -> Result<Self, SchemaError> {
        let report = validate_schema(candidate);
        if !report.is_valid {
            return Err(SchemaError::Invalid {
                errors: report.errors,
            });
        }
        serde_json::from_value(candidate.clone()).map_err(SchemaError::Deserialize)
    }
}
