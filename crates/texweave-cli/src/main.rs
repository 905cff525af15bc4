//! Texweave CLI - Command-line interface for procedural texture generation
//!
//! This binary provides commands for creating, validating, and generating
//! texture parameter files and their exported artifacts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use texweave_cli::commands;
use texweave_cli::commands::generate::GenerateArgs;

/// Texweave - Procedural SVG Texture Generator
#[derive(Parser)]
#[command(name = "texweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default parameter template
    Init {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Texture name to embed in the template
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter file
    Validate {
        /// Path to the parameter file (JSON)
        #[arg(short, long)]
        params: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a texture and export artifacts
    Generate {
        /// Path to the parameter file (JSON)
        #[arg(short, long)]
        params: String,

        /// Export formats (svg, png, css, html, json); repeatable
        #[arg(short, long = "format", value_name = "FORMAT")]
        formats: Vec<String>,

        /// Output directory for exported files
        #[arg(short, long, default_value = "out")]
        output_dir: PathBuf,

        /// Seed override for reproducible output
        #[arg(long)]
        seed: Option<u32>,

        /// Rasterize PNG at print resolution (300 DPI)
        #[arg(long)]
        hires: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            output,
            name,
            force,
            json,
        } => commands::init::run(output.as_deref(), name.as_deref(), force, json),
        Commands::Validate { params, json } => commands::validate::run(&params, json),
        Commands::Generate {
            params,
            formats,
            output_dir,
            seed,
            hires,
            json,
        } => commands::generate::run(&GenerateArgs {
            params_path: params,
            formats,
            output_dir,
            seed,
            hires,
            json,
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
