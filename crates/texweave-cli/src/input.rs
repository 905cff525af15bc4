//! Input abstraction for loading parameter files.
//!
//! Parameter records are stored as JSON. Loading returns the parsed record
//! together with a BLAKE3 hash of the source bytes for provenance output.

use std::path::{Path, PathBuf};

use texweave_spec::TextureParameters;
use thiserror::Error;

/// Recognized parameter file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors from loading a parameter file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized file extension: {0} (expected .json)")]
    UnknownExtension(String),

    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A loaded parameter file with source provenance.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The parsed parameter record.
    pub params: TextureParameters,
    /// BLAKE3 hash of the raw source bytes.
    pub source_hash: String,
}

/// Load a parameter record from a JSON file.
pub fn load_params(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !JSON_EXTENSIONS.contains(&extension.as_str()) {
        return Err(InputError::UnknownExtension(path.display().to_string()));
    }

    let bytes = std::fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source_hash = texweave_spec::hash::blake3_hash(&bytes);

    let text = String::from_utf8_lossy(&bytes);
    let params = TextureParameters::from_json(&text)?;

    Ok(LoadResult {
        params,
        source_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_parameter_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let json = TextureParameters::default().to_json_pretty().unwrap();
        std::fs::write(&path, &json).unwrap();

        let loaded = load_params(&path).unwrap();
        assert_eq!(loaded.params, TextureParameters::default());
        assert_eq!(
            loaded.source_hash,
            texweave_spec::hash::blake3_hash(json.as_bytes())
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_params(Path::new("params.yaml")).unwrap_err();
        assert!(matches!(err, InputError::UnknownExtension(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_params(Path::new("/nonexistent/params.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_params(&path).unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
    }
}
