//! Schema validation for candidate form documents
//!
//! This module decides whether an arbitrary decoded JSON value is a
//! well-formed form schema, reporting every structural problem found as a
//! self-contained diagnostic string. Validation is pure and synchronous:
//! it may be called on every editor keystroke without coordination.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod form_schema;

pub use error::{SchemaError, ValidationReport};
pub use form_schema::{validate_schema, FormSchemaValidator};
