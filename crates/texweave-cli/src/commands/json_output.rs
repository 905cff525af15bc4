//! JSON output types for machine-readable CLI output.
//!
//! Structured output for the `--json` flag on `init`, `validate`, and
//! `generate` so other tools can parse CLI results programmatically.

use serde::{Deserialize, Serialize};
use texweave_spec::{ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// These codes are stable. Validation errors pass through their own E###
/// codes unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Generation error
    pub const GENERATION_ERROR: &str = "CLI_005";
    /// Export error
    pub const EXPORT_ERROR: &str = "CLI_006";
    /// Unsupported export format
    pub const UNSUPPORTED_FORMAT: &str = "CLI_007";
    /// Output file already exists
    pub const OUTPUT_EXISTS: &str = "CLI_008";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a validation error to its JSON form.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let mut json = JsonError::new(error.code.code(), error.message.clone());
    if let Some(path) = &error.path {
        json = json.with_path(path.clone());
    }
    json
}

/// Converts a validation warning to its JSON form.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    let mut json = JsonWarning::new(warning.code.code(), warning.message.clone());
    if let Some(path) = &warning.path {
        json = json.with_path(path.clone());
    }
    json
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical parameter hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Name from the parameter record
    pub name: String,
    /// Shape kind
    pub shape_type: String,
    /// Arrangement strategy
    pub arrangement: String,
    /// Element count
    pub quantity: u32,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ValidateOutput {
    pub fn success(
        result: ValidateResult,
        params_hash: String,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            params_hash: Some(params_hash),
            source_hash: Some(source_hash),
        }
    }

    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        params_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            params_hash,
            source_hash,
        }
    }
}

/// One exported artifact in `generate` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedFile {
    /// Export format
    pub format: String,
    /// Path the artifact was written to
    pub path: String,
    /// BLAKE3 hash of the artifact bytes
    pub hash: String,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Result identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Canonical parameter hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    /// Whether the output is reproducible across calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reproducible: Option<bool>,
    /// Exported artifacts
    pub files: Vec<ExportedFile>,
    /// Duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl GenerateOutput {
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            id: None,
            params_hash: None,
            reproducible: None,
            files: Vec::new(),
            duration_ms: None,
        }
    }
}

/// JSON output for the `init` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitOutput {
    /// Whether the template was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Path written (absent when printed to stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
