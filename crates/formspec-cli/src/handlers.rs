//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

use crate::cli::{CheckArgs, CompletionsArgs, ExportArgs, ValidateArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use chrono::Utc;
use clap::CommandFactory;
use formspec_core::export::{submission_export_filename, to_pretty_json};
use formspec_core::{compile_validation_rules, validate_schema, Schema};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Handle the validate command
pub fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    output.info(&format!("Validating schema: {}", args.schema.display()))?;

    let candidate = read_document(&args.schema)?;
    let report = validate_schema(&candidate);

    output.validation_report(&report)?;

    if report.is_valid {
        info!(path = %args.schema.display(), "schema is valid");
        if args.detailed {
            output.section("Schema")?;
            output.data(&candidate)?;
        }
        Ok(())
    } else {
        Err(Error::other(format!(
            "Validation failed with {} error(s)",
            report.errors.len()
        )))
    }
}

/// Handle the check command
pub fn handle_check(args: CheckArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    output.info(&format!("Validating schema: {}", args.schema.display()))?;

    let candidate = read_document(&args.schema)?;
    let schema = Schema::from_value(&candidate).map_err(|e| {
        // Show the full diagnostics before failing, the way the editor
        // surface would
        if let formspec_core::SchemaError::Invalid { errors } = &e {
            let report = formspec_core::ValidationReport::from_errors(errors.clone());
            let _ = output.validation_report(&report);
        }
        Error::from(e)
    })?;

    let rules = compile_validation_rules(&schema)?;
    info!(fields = rules.len(), "compiled validation rules");

    output.info(&format!(
        "Checking submission: {}",
        args.submission.display()
    ))?;
    let values = read_submission(&args.submission)?;

    let report = rules.check(&values);
    output.submission_report(&report)?;

    if report.is_ok() {
        Ok(())
    } else {
        Err(Error::other(format!(
            "Submission failed {} rule(s)",
            report.failures.len()
        )))
    }
}

/// Handle the export command
pub fn handle_export(args: ExportArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let submissions = read_document(&args.submissions)?;
    if !submissions.is_array() {
        return Err(Error::InvalidFormat {
            path: args.submissions.clone(),
            expected: "JSON array of submissions".to_string(),
        });
    }

    let out_dir = args
        .out_dir
        .or_else(|| config.export.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let target = out_dir.join(submission_export_filename(Utc::now()));

    fs::write(&target, to_pretty_json(&submissions)?)?;
    info!(path = %target.display(), "wrote submission export");
    output.success(&format!("Exported submissions to {}", target.display()))?;

    if output.format() != crate::cli::OutputFormat::Human {
        output.data(&serde_json::json!({ "path": target }))?;
    }

    Ok(())
}

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(
        args.shell.to_clap_shell(),
        &mut cmd,
        name,
        &mut std::io::stdout(),
    );
    Ok(())
}

/// Read a schema or submissions document, JSON or YAML by extension
fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}

/// Read a submission file: a JSON object mapping field ids to values
fn read_submission(path: &Path) -> Result<serde_json::Map<String, Value>> {
    match read_document(path)? {
        Value::Object(values) => Ok(values),
        _ => Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON object of field values".to_string(),
        }),
    }
}
