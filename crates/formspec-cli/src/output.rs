//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output in
//! various formats (JSON, YAML, human-readable) with specialized support
//! for validation reports and submission check results.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use formspec_core::{SubmissionReport, ValidationReport};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a schema validation report
    fn format_validation_report(&self, report: &ValidationReport) -> Result<String>;

    /// Format a submission check report
    fn format_submission_report(&self, report: &SubmissionReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_submission_report(&self, report: &SubmissionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_submission_report_human(report)),
            _ => self.format(report),
        }
    }
}

fn format_validation_report_human(report: &ValidationReport) -> String {
    if report.is_valid {
        return "Schema is valid".to_string();
    }

    let mut lines = vec![format!(
        "Schema is invalid ({} error{}):",
        report.errors.len(),
        if report.errors.len() == 1 { "" } else { "s" }
    )];
    for error in &report.errors {
        lines.push(format!("  - {}", error));
    }
    lines.join("\n")
}

fn format_submission_report_human(report: &SubmissionReport) -> String {
    if report.is_ok() {
        return "Submission passes all rules".to_string();
    }

    let mut lines = vec![format!(
        "Submission failed {} rule{}:",
        report.failures.len(),
        if report.failures.len() == 1 { "" } else { "s" }
    )];
    for failure in &report.failures {
        lines.push(format!("  - {}: {}", failure.field, failure.message));
    }
    lines.join("\n")
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(&formatted)
    }

    /// Write a schema validation report with specialized formatting
    pub fn validation_report(&mut self, report: &ValidationReport) -> Result<()> {
        let formatted = self.format.format_validation_report(report)?;
        self.writeln(&formatted)
    }

    /// Write a submission check report with specialized formatting
    pub fn submission_report(&mut self, report: &SubmissionReport) -> Result<()> {
        let formatted = self.format.format_submission_report(report)?;
        self.writeln(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_validation_report() {
        let report = ValidationReport::from_errors(vec![
            "formTitle is required and must be a string".to_string(),
        ]);
        let text = OutputFormat::Human.format_validation_report(&report).unwrap();
        assert!(text.starts_with("Schema is invalid (1 error):"));
        assert!(text.contains("  - formTitle is required and must be a string"));

        let text = OutputFormat::Human
            .format_validation_report(&ValidationReport::valid())
            .unwrap();
        assert_eq!(text, "Schema is valid");
    }

    #[test]
    fn test_json_validation_report_matches_wire_contract() {
        let report = ValidationReport::valid();
        let text = OutputFormat::Json.format_validation_report(&report).unwrap();
        assert_eq!(text, r#"{"isValid":true}"#);
    }
}
