//! Export of generation results to SVG, PNG, CSS, HTML and JSON artifacts.
//!
//! SVG export writes the document verbatim. PNG export rasterizes the
//! document with `resvg` and encodes it with the deterministic writer from
//! [`crate::png`]. CSS and HTML exports are derived from the parameters
//! alone and do not consume the SVG data.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::generate::TextureGenerationResult;
use crate::png::{self, PngConfig, PngError};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Css,
    Html,
    Json,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Svg,
            ExportFormat::Png,
            ExportFormat::Css,
            ExportFormat::Html,
            ExportFormat::Json,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Css => "css",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "css" => Ok(ExportFormat::Css),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Errors from export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(#[from] usvg::Error),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("raster target is empty: {0}x{1} pixels")]
    EmptyRaster(u32, u32),
}

/// Rasterization settings for PNG export.
#[derive(Debug, Clone, Copy)]
pub struct RasterOptions {
    /// Uniform scale applied to the document size.
    pub scale: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RasterOptions {
    /// Print-resolution raster at 300 DPI against the 72 DPI document size.
    pub fn hires() -> Self {
        Self {
            scale: 300.0 / 72.0,
        }
    }
}

/// Rasterize an SVG document to straight-alpha RGBA pixels.
pub fn rasterize(svg_data: &str, options: &RasterOptions) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg_data.as_bytes(), &opts)?;

    let size = tree.size();
    let width = (size.width() as f64 * options.scale).round() as u32;
    let height = (size.height() as f64 * options.scale).round() as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::EmptyRaster(width, height))?;
    let transform =
        resvg::tiny_skia::Transform::from_scale(options.scale as f32, options.scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);
    Ok((rgba, width, height))
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

/// The SVG artifact is the document itself.
pub fn export_svg(result: &TextureGenerationResult) -> &str {
    &result.svg_data
}

/// Rasterize and encode the result as PNG bytes plus their hash.
pub fn export_png_to_vec(
    result: &TextureGenerationResult,
    raster: &RasterOptions,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), ExportError> {
    let (rgba, width, height) = rasterize(&result.svg_data, raster)?;
    let (bytes, hash) = png::write_rgba_to_vec_with_hash(&rgba, width, height, config)?;
    Ok((bytes, hash))
}

/// Serialize the full result record as pretty JSON.
pub fn export_json(result: &TextureGenerationResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Derive a CSS grid stylesheet from the parameters.
///
/// Uses the same column count as the grid arrangement. The item rule paints
/// a diagonal gradient between the two configured colors and rounds circles
/// into actual circles.
pub fn css_grid(result: &TextureGenerationResult) -> String {
    let params = &result.parameters;
    let cols = (params.quantity as f64).sqrt().ceil().max(1.0) as u32;
    let row_height = params.canvas_height as f64 / cols as f64;
    let secondary = params.secondary_color.as_deref().unwrap_or("#FFFFFF");
    let border_radius = if params.shape_type == texweave_spec::ShapeType::Circle {
        "50%"
    } else {
        "0"
    };

    format!(
        r#"/* Generated CSS grid texture */
.texture-grid {{
  display: grid;
  grid-template-columns: repeat({cols}, 1fr);
  grid-template-rows: repeat(auto-fit, minmax({row_height}px, 1fr));
  width: {width}px;
  height: {height}px;
  gap: 0;
  background-color: {background};
}}

.texture-item {{
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
  opacity: {opacity};
  border: {stroke}px solid {primary};
  border-radius: {border_radius};
}}

/* Responsive layout */
@media (max-width: 768px) {{
  .texture-grid {{
    width: 100%;
    height: auto;
    aspect-ratio: 1 / 1;
  }}
}}"#,
        cols = cols,
        row_height = row_height,
        width = params.canvas_width,
        height = params.canvas_height,
        background = params.background_color,
        primary = params.primary_color,
        secondary = secondary,
        opacity = params.opacity / 100.0,
        stroke = params.stroke_width,
        border_radius = border_radius,
    )
}

/// Build a standalone HTML page previewing the CSS grid texture.
pub fn html_preview(result: &TextureGenerationResult) -> String {
    let css = css_grid(result);
    let items = (0..result.parameters.quantity)
        .map(|_| r#"<div class="texture-item"></div>"#)
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Texture Preview - {id}</title>
  <style>
    {css}
    body {{
      margin: 0;
      padding: 20px;
      display: flex;
      align-items: center;
      justify-content: center;
      min-height: 100vh;
      background-color: #f5f5f5;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }}
    .preview-container {{
      background: white;
      padding: 20px;
      border-radius: 8px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }}
    .preview-title {{
      text-align: center;
      margin-bottom: 20px;
      color: #333;
      font-size: 18px;
      font-weight: 600;
    }}
  </style>
</head>
<body>
  <div class="preview-container">
    <div class="preview-title">Texture Preview</div>
    <div class="texture-grid">
      {items}
    </div>
  </div>
</body>
</html>"#,
        id = result.id,
        css = css,
        items = items,
    )
}

/// Default output filename for a result in the given format.
pub fn default_filename(result: &TextureGenerationResult, format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => format!("texture-{}-preview.html", result.id),
        other => format!("texture-{}.{}", result.id, other.as_str()),
    }
}

/// Export a result to a file in the given format.
///
/// Returns the BLAKE3 hash of the written artifact.
pub fn export_to_file(
    result: &TextureGenerationResult,
    format: ExportFormat,
    path: &Path,
    raster: &RasterOptions,
) -> Result<String, ExportError> {
    let bytes = match format {
        ExportFormat::Svg => export_svg(result).as_bytes().to_vec(),
        ExportFormat::Png => export_png_to_vec(result, raster, &PngConfig::default())?.0,
        ExportFormat::Css => css_grid(result).into_bytes(),
        ExportFormat::Html => html_preview(result).into_bytes(),
        ExportFormat::Json => export_json(result)?.into_bytes(),
    };
    std::fs::write(path, &bytes)?;
    Ok(png::hash_png(&bytes))
}
