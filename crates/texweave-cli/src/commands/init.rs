//! Init command implementation
//!
//! Writes a default parameter template to a file or stdout.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use texweave_spec::TextureParameters;

use super::json_output::{error_codes, InitOutput, JsonError};

/// Run the init command.
///
/// With no output path the template is printed to stdout. An existing file
/// is never overwritten unless `force` is set.
pub fn run(output: Option<&str>, name: Option<&str>, force: bool, json_output: bool) -> Result<ExitCode> {
    let mut params = TextureParameters::default();
    if let Some(name) = name {
        params.name = name.to_string();
    }
    let template = params.to_json_pretty()?;

    let Some(output) = output else {
        println!("{}", template);
        return Ok(ExitCode::SUCCESS);
    };

    let path = Path::new(output);
    if path.exists() && !force {
        if json_output {
            let error = JsonError::new(
                error_codes::OUTPUT_EXISTS,
                format!("{} already exists (use --force to overwrite)", output),
            )
            .with_file(output);
            let out = InitOutput {
                success: false,
                errors: vec![error],
                path: None,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!(
                "{} {} already exists (use --force to overwrite)",
                "FAILED".red().bold(),
                output
            );
        }
        return Ok(ExitCode::from(1));
    }

    std::fs::write(path, format!("{}\n", template))
        .with_context(|| format!("failed to write {}", output))?;

    if json_output {
        let out = InitOutput {
            success: true,
            errors: Vec::new(),
            path: Some(output.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} Wrote {}", "SUCCESS".green().bold(), output);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        run(path.to_str(), Some("demo"), false, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let params = TextureParameters::from_json(&text).unwrap();
        assert_eq!(params.name, "demo");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{}").unwrap();

        run(path.to_str(), None, false, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn force_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{}").unwrap();

        run(path.to_str(), None, true, false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("shapeType"));
    }
}
