//! Validate command implementation
//!
//! Validates a parameter file and reports errors and warnings.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use texweave_spec::{canonical_params_hash, validate_params, ValidationResult};

use super::json_output::{
    error_codes, validation_error_to_json, validation_warning_to_json, JsonError, ValidateOutput,
    ValidateResult,
};
use crate::input::{load_params, InputError, LoadResult};

/// Run the validate command.
///
/// Exit code: 0 if valid, 1 if invalid.
pub fn run(params_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(params_path)
    } else {
        run_human(params_path)
    }
}

fn input_error_to_json(error: &InputError, params_path: &str) -> JsonError {
    let code = match error {
        InputError::Io { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension(_) => error_codes::UNKNOWN_EXTENSION,
        InputError::Parse(_) => error_codes::JSON_PARSE,
    };
    JsonError::new(code, error.to_string()).with_file(params_path)
}

fn run_human(params_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), params_path);

    let LoadResult {
        params,
        source_hash,
    } = load_params(Path::new(params_path))?;

    println!("{} json ({})", "Source:".dimmed(), &source_hash[..16]);

    let params_hash = canonical_params_hash(&params).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Params hash:".dimmed(), &params_hash[..16]);

    let result = validate_params(&params);
    let duration_ms = start.elapsed().as_millis() as u64;

    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Parameters are valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Parameters have {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(params_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    let loaded = match load_params(Path::new(params_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput::failure(
                vec![input_error_to_json(&e, params_path)],
                vec![],
                None,
                None,
            );
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let params_hash =
        canonical_params_hash(&loaded.params).unwrap_or_else(|_| "unknown".to_string());
    let result = validate_params(&loaded.params);
    let duration_ms = start.elapsed().as_millis() as u64;

    let warnings = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect::<Vec<_>>();

    let output = if result.is_ok() {
        ValidateOutput::success(
            ValidateResult {
                name: loaded.params.name.clone(),
                shape_type: loaded.params.shape_type.as_str().to_string(),
                arrangement: loaded.params.arrangement.as_str().to_string(),
                quantity: loaded.params.quantity,
                duration_ms,
            },
            params_hash,
            loaded.source_hash,
            warnings,
        )
    } else {
        let errors = result
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        ValidateOutput::failure(errors, warnings, Some(params_hash), Some(loaded.source_hash))
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.code(),
            path.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.code(),
            path.dimmed(),
            warning.message
        );
    }
}
