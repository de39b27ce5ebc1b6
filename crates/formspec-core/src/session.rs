//! Editing-session state: last-valid schema and captured submissions
//!
//! A `FormSession` mirrors the lifecycle of the editing surface: every
//! content change is revalidated, the last structurally valid schema is
//! retained while the editor holds broken JSON, and submissions are
//! captured in memory for the duration of the session only.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::Schema;
use crate::validation::{SchemaError, ValidationReport};

/// One captured form submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    /// Submitted field values, keyed by field id
    #[serde(flatten)]
    pub values: Map<String, Value>,

    /// Capture time
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Capture a submission now
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values,
            timestamp: Utc::now(),
        }
    }
}

/// In-memory state for one editing session
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: Schema,
    report: ValidationReport,
    submissions: Vec<SubmissionRecord>,
}

impl FormSession {
    /// Start a session from a known-good schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            report: ValidationReport::valid(),
            submissions: Vec::new(),
        }
    }

    /// Revalidate an edited candidate value
    ///
    /// A valid candidate replaces the current schema; an invalid one leaves
    /// the previous valid schema in place so the preview keeps rendering
    /// while the editor shows the diagnostics. The stored report is always
    /// consistent with the stored schema: a candidate that passes the
    /// structural checks but cannot be represented by the typed model is
    /// reported as invalid, never silently dropped.
    pub fn update(&mut self, candidate: &Value) -> &ValidationReport {
        self.report = match Schema::from_value(candidate) {
            Ok(schema) => {
                self.schema = schema;
                ValidationReport::valid()
            }
            Err(SchemaError::Invalid { errors }) => ValidationReport::from_errors(errors),
            Err(SchemaError::Deserialize(e)) => {
                ValidationReport::from_errors(vec![format!("Schema could not be loaded: {}", e)])
            }
        };
        &self.report
    }

    /// Capture a submission with the current timestamp
    pub fn record(&mut self, values: Map<String, Value>) {
        self.submissions.push(SubmissionRecord::new(values));
    }

    /// The last valid schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The report from the most recent update
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Whether the most recent update was valid
    pub fn is_valid(&self) -> bool {
        self.report.is_valid
    }

    /// Submissions captured so far, oldest first
    pub fn submissions(&self) -> &[SubmissionRecord] {
        &self.submissions
    }
}
