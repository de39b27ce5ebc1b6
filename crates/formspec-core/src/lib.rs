//! Formspec Core - form schema validation and rule compilation
//!
//! This crate holds the UI-independent core of Formspec:
//!
//! - **Schema validation**: decide whether an arbitrary decoded JSON value
//!   is a well-formed form schema, reporting every structural problem found
//!   as a human-readable diagnostic
//! - **Rule compilation**: derive an executable, per-field rule set from a
//!   valid schema, used to validate submitted value maps
//!
//! Both components are pure, synchronous functions with no shared state;
//! they can be called on every editor keystroke and from concurrent UI
//! events without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use formspec_core::{compile_validation_rules, validate_schema, Schema};
//! use serde_json::json;
//!
//! let candidate = json!({
//!     "formTitle": "Contact",
//!     "formDescription": "Get in touch",
//!     "fields": [
//!         {"id": "name", "type": "text", "label": "Name", "required": true}
//!     ]
//! });
//!
//! let report = validate_schema(&candidate);
//! assert!(report.is_valid);
//!
//! let schema: Schema = serde_json::from_value(candidate).unwrap();
//! let rules = compile_validation_rules(&schema).unwrap();
//!
//! let mut submission = serde_json::Map::new();
//! submission.insert("name".to_string(), json!("Jane"));
//! assert!(rules.check(&submission).is_ok());
//! ```
//!
//! Always validate before compiling: the compiler's precondition is a
//! structurally valid schema.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod export;
pub mod rules;
pub mod schema;
pub mod session;
pub mod validation;

pub use rules::{
    compile_validation_rules, CompileError, FieldFailure, FieldRule, RuleSet, SubmissionReport,
};
pub use schema::{Field, FieldOption, FieldType, Schema, ValidationRule};
pub use session::{FormSession, SubmissionRecord};
pub use validation::{validate_schema, FormSchemaValidator, SchemaError, ValidationReport};
