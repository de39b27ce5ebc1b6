//! Validation report and error types for form schemas
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome of validating a candidate schema
///
/// `errors` is empty exactly when `is_valid` is true; otherwise it lists
/// every violation found, each message self-contained and naming the
/// offending field by id when known, else by positional index. The list is
/// omitted from serialized output when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether the candidate is a well-formed schema
    pub is_valid: bool,

    /// Diagnostics, in check order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A passing report with no diagnostics
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a report from accumulated diagnostics
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert to a result, Ok when the candidate passed
    pub fn into_result(self) -> Result<(), SchemaError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                errors: self.errors,
            })
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "schema is valid")
        } else {
            write!(f, "schema is invalid:")?;
            for error in &self.errors {
                write!(f, "\n  - {}", error)?;
            }
            Ok(())
        }
    }
}

/// Error produced when turning a candidate value into a typed `Schema`
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The candidate failed structural validation
    #[error("invalid schema ({} error{}): {}", errors.len(), if errors.len() == 1 { "" } else { "s" }, errors.join("; "))]
    Invalid {
        /// Diagnostics from the validator
        errors: Vec<String>,
    },

    /// The candidate passed validation but could not be deserialized
    #[error("failed to deserialize schema: {0}")]
    Deserialize(#[from] serde_json::Error),
}
