//! Texweave Parameter Library
//!
//! This crate provides the types, validation, and hashing for texweave
//! texture parameter records. A parameter record is a JSON document that
//! fully describes one procedural texture generation request; the SVG
//! backend consumes it as a trusted, pre-validated input.
//!
//! # Example
//!
//! ```
//! use texweave_spec::TextureParameters;
//! use texweave_spec::validation::validate_params;
//! use texweave_spec::hash::canonical_params_hash;
//!
//! let params = TextureParameters::default();
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//!
//! let hash = canonical_params_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`params`]: The parameter record and its enums
//! - [`validation`]: Parameter validation functions
//! - [`hash`]: Canonical hashing (RFC 8785 JCS + BLAKE3)

pub mod error;
pub mod hash;
pub mod params;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::canonical_params_hash;
pub use params::{
    AlgorithmKind, AlgorithmParams, Arrangement, ColorMode, RotationType, ScaleVariation,
    ShapeType, SpacingRange, TextureParameters,
};
pub use validation::validate_params;
