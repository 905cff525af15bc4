//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixel data always encodes to
//! byte-identical output, which keeps exported files hashable and diffable.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // Adaptive filtering would make output depend on encoder heuristics.
            filter: FilterType::NoFilter,
        }
    }
}

fn check_rgba_len(data: &[u8], width: u32, height: u32) -> Result<(), PngError> {
    let expected = (width as usize) * (height as usize) * 4;
    if data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            data.len()
        )));
    }
    Ok(())
}

/// Write raw RGBA pixels to a PNG file.
pub fn write_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(data, width, height, writer, config)
}

/// Write raw RGBA pixels to any writer.
pub fn write_rgba_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_rgba_len(data, width, height)?;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // No timestamps or other variable metadata chunks are written.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return the bytes with their hash.
pub fn write_rgba_to_vec_with_hash(
    data: &[u8],
    width: u32,
    height: u32,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut out = Vec::new();
    write_rgba_to_writer(data, width, height, &mut out, config)?;
    let hash = hash_png(&out);
    Ok((out, hash))
}
