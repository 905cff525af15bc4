//! Texweave Procedural SVG Texture Backend
//!
//! This crate turns a validated parameter record into a self-contained SVG
//! texture document and exports it to SVG, PNG, CSS, HTML and JSON artifacts.
//! Every arrangement except unseeded `random` is fully deterministic: the
//! same parameters produce a byte-identical document on every call.
//!
//! # Features
//!
//! - **Placement**: grid, spiral, radial, random, and linear arrangements
//! - **Primitives**: circles, regular polygons, stars, waves, spirals,
//!   radial line fans, and sub-grids
//! - **Per-element rules**: incremental or jittered rotation, Fibonacci
//!   scale progression, gradient color interpolation
//! - **Deterministic PNG**: rasterization via `resvg` with fixed encoder
//!   settings for byte-identical output
//!
//! # Example
//!
//! ```
//! use texweave_backend_svg::generate::generate;
//! use texweave_spec::TextureParameters;
//!
//! let params = TextureParameters {
//!     quantity: 9,
//!     seed: Some(42),
//!     ..TextureParameters::default()
//! };
//!
//! let result = generate(&params).unwrap();
//! assert!(result.svg_data.contains("<svg"));
//! ```
//!
//! # Determinism
//!
//! - Same parameters + same seed = byte-identical SVG
//! - A linear congruential generator drives all random placement and jitter
//! - PNG encoding uses fixed compression and filter settings

pub mod color;
pub mod export;
pub mod generate;
pub mod noise;
pub mod png;
pub mod position;
pub mod rng;
pub mod shape;
pub mod transform;

// Re-export main types for convenience
pub use color::{ColorParseError, Rgb};
pub use export::{ExportError, ExportFormat, RasterOptions};
pub use generate::{generate, GenerateError, TextureGenerationResult};
pub use noise::PerlinNoise;
pub use png::{PngConfig, PngError};
pub use position::{plan_positions, Position};
pub use rng::Lcg;
