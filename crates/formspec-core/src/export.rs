//! Export conventions shared with existing tooling
//!
//! Schema text and submission exports are pretty-printed JSON with 2-space
//! indentation, and submission downloads use the
//! `form-submissions-<ISO8601>.json` filename pattern. These conventions
//! predate this crate; they are preserved so exported data stays
//! interchangeable with files produced by earlier versions of the tool.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::session::SubmissionRecord;

/// Serialize a value as pretty-printed JSON, 2-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Filename for a submission export taken at `now`
///
/// Matches the `form-submissions-<ISO8601 timestamp>.json` pattern of
/// previously exported data.
pub fn submission_export_filename(now: DateTime<Utc>) -> String {
    format!(
        "form-submissions-{}.json",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Render captured submissions as an exportable JSON array
pub fn export_submissions(submissions: &[SubmissionRecord]) -> Result<String, serde_json::Error> {
    to_pretty_json(&submissions)
}
