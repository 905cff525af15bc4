//! Generate command implementation
//!
//! Loads a parameter file, validates it, runs generation, and exports the
//! requested artifact formats.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use texweave_backend_svg::export::{self, ExportFormat, RasterOptions};
use texweave_backend_svg::generate::{generate, is_reproducible};
use texweave_spec::validate_params;

use super::json_output::{
    error_codes, validation_error_to_json, validation_warning_to_json, ExportedFile,
    GenerateOutput, JsonError, JsonWarning,
};
use crate::input::load_params;

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the parameter file.
    pub params_path: String,
    /// Formats to export.
    pub formats: Vec<String>,
    /// Output directory for artifacts.
    pub output_dir: PathBuf,
    /// Seed override for reproducible output.
    pub seed: Option<u32>,
    /// Rasterize PNG at print resolution (300 DPI).
    pub hires: bool,
    /// Machine-readable JSON output.
    pub json: bool,
}

/// Run the generate command.
///
/// Exit code: 0 on success, 1 on validation or export failure.
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    if args.json {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn parse_formats(formats: &[String]) -> Result<Vec<ExportFormat>, JsonError> {
    let mut parsed = Vec::new();
    for raw in formats {
        let format = raw.parse::<ExportFormat>().map_err(|e| {
            JsonError::new(error_codes::UNSUPPORTED_FORMAT, e.to_string())
        })?;
        if !parsed.contains(&format) {
            parsed.push(format);
        }
    }
    if parsed.is_empty() {
        parsed.push(ExportFormat::Svg);
    }
    Ok(parsed)
}

fn raster_options(hires: bool) -> RasterOptions {
    if hires {
        RasterOptions::hires()
    } else {
        RasterOptions::default()
    }
}

fn run_human(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), args.params_path);

    let formats = parse_formats(&args.formats)
        .map_err(|e| anyhow::anyhow!("{}", e.message))?;

    let loaded = load_params(Path::new(&args.params_path))
        .with_context(|| format!("failed to load parameters: {}", args.params_path))?;
    let mut params = loaded.params;
    if args.seed.is_some() {
        params.seed = args.seed;
    }

    let validation = validate_params(&params);
    for warning in &validation.warnings {
        println!(
            "  {} [{}]: {}",
            "!".yellow(),
            warning.code.code(),
            warning.message
        );
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            println!(
                "  {} [{}]: {}",
                "x".red(),
                error.code.code(),
                error.message
            );
        }
        println!(
            "\n{} Parameters have {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let result = generate(&params)?;
    println!("{} {}", "Result:".dimmed(), result.id);
    println!("{} {}", "Params hash:".dimmed(), &result.params_hash[..16]);
    if let Some(at) = chrono::DateTime::from_timestamp_millis(result.timestamp_ms as i64) {
        println!("{} {}", "Generated:".dimmed(), at.to_rfc3339());
    }
    if !is_reproducible(&params) {
        println!(
            "  {} random arrangement without a seed is not reproducible",
            "!".yellow()
        );
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    let raster = raster_options(args.hires);
    for format in &formats {
        let path = args
            .output_dir
            .join(export::default_filename(&result, *format));
        let hash = export::export_to_file(&result, *format, &path, &raster)?;
        println!(
            "  {} {} ({})",
            "+".green(),
            path.display(),
            &hash[..16]
        );
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    println!(
        "\n{} Exported {} file(s) ({}ms)",
        "SUCCESS".green().bold(),
        formats.len(),
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();

    let formats = match parse_formats(&args.formats) {
        Ok(formats) => formats,
        Err(e) => {
            return emit_failure(GenerateOutput::failure(vec![e], vec![]));
        }
    };

    let loaded = match load_params(Path::new(&args.params_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = JsonError::new(error_codes::FILE_READ, e.to_string())
                .with_file(&args.params_path);
            return emit_failure(GenerateOutput::failure(vec![error], vec![]));
        }
    };
    let mut params = loaded.params;
    if args.seed.is_some() {
        params.seed = args.seed;
    }

    let validation = validate_params(&params);
    let warnings: Vec<JsonWarning> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();
    if !validation.is_ok() {
        let errors = validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        return emit_failure(GenerateOutput::failure(errors, warnings));
    }

    let result = match generate(&params) {
        Ok(result) => result,
        Err(e) => {
            let error = JsonError::new(error_codes::GENERATION_ERROR, e.to_string());
            return emit_failure(GenerateOutput::failure(vec![error], warnings));
        }
    };

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        let error = JsonError::new(error_codes::EXPORT_ERROR, e.to_string());
        return emit_failure(GenerateOutput::failure(vec![error], warnings));
    }

    let raster = raster_options(args.hires);
    let mut files = Vec::new();
    for format in &formats {
        let path = args
            .output_dir
            .join(export::default_filename(&result, *format));
        match export::export_to_file(&result, *format, &path, &raster) {
            Ok(hash) => files.push(ExportedFile {
                format: format.as_str().to_string(),
                path: path.display().to_string(),
                hash,
            }),
            Err(e) => {
                let error = JsonError::new(error_codes::EXPORT_ERROR, e.to_string())
                    .with_file(path.display().to_string());
                return emit_failure(GenerateOutput::failure(vec![error], warnings));
            }
        }
    }

    let output = GenerateOutput {
        success: true,
        errors: Vec::new(),
        warnings,
        id: Some(result.id.clone()),
        params_hash: Some(result.params_hash.clone()),
        reproducible: Some(is_reproducible(&params)),
        files,
        duration_ms: Some(start.elapsed().as_millis() as u64),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

fn emit_failure(output: GenerateOutput) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}
