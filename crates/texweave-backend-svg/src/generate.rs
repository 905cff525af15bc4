//! Main entry point for texture generation.
//!
//! [`generate`] runs the whole pipeline for one parameter record: placement
//! points, per-element scale/rotation/color resolution, primitive emission,
//! and document assembly. The call is synchronous, never mutates its input,
//! and touches no shared state beyond a process-wide counter used to keep
//! result identifiers unique within a session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use texweave_spec::{
    canonical_params_hash, AlgorithmKind, Arrangement, ColorMode, ShapeType, SpecError,
    TextureParameters,
};

use crate::color::Rgb;
use crate::noise::PerlinNoise;
use crate::position::{plan_positions, Position};
use crate::rng::Lcg;
use crate::shape;
use crate::transform;

#[cfg(test)]
mod tests;

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Parameter hashing failed.
    #[error("hash error: {0}")]
    Hash(#[from] SpecError),
}

/// Result of one generation call.
///
/// Superseded, not mutated, by the next call; the parameters travel with the
/// document so exports can be derived from either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureGenerationResult {
    /// Session-unique identifier for this generation.
    pub id: String,
    /// The complete, self-contained SVG document.
    pub svg_data: String,
    /// The exact input record, unmodified.
    pub parameters: TextureParameters,
    /// Canonical BLAKE3 hash of the input record.
    pub params_hash: String,
    /// Generation instant in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

static GENERATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a texture document from a parameter record.
///
/// Inputs are trusted (pre-validated by `texweave_spec::validate_params`);
/// `quantity == 0` degrades to an empty element group rather than an error.
/// Output is byte-identical across calls for every arrangement except
/// `random` without a top-level seed, which reseeds from entropy each call.
pub fn generate(params: &TextureParameters) -> Result<TextureGenerationResult, GenerateError> {
    let width = params.canvas_width as f64;
    let height = params.canvas_height as f64;

    let mut rng = match params.seed {
        Some(seed) => Lcg::new(seed),
        None => Lcg::from_entropy(),
    };
    let mut positions = plan_positions(params.arrangement, params.quantity, width, height, &mut rng);
    apply_noise_displacement(params, &mut positions);

    let primary = Rgb::parse_or_black(&params.primary_color);
    let secondary = params
        .secondary_color
        .as_deref()
        .map(Rgb::parse_or_black)
        .unwrap_or(Rgb::WHITE);
    let opacity_value = (params.opacity / 100.0) * (params.density / 100.0);

    let mut content = String::new();
    let count = (params.quantity as usize).min(positions.len());
    for (i, pos) in positions.iter().take(count).enumerate() {
        let current_scale = transform::resolve_scale(
            i,
            params.quantity,
            params.scale,
            params.scale_variation,
        );
        let current_rotation = transform::resolve_rotation(
            i,
            params.rotation,
            params.rotation_type,
            params.rotation_increment,
            params.rotation_random_range,
        );
        let color = resolve_color(params.color_mode, primary, secondary, i, params.quantity);

        let radius = 10.0 * current_scale;
        let element = shape::render(
            params.shape_type,
            *pos,
            radius,
            current_rotation,
            current_scale,
        );

        content.push_str(&apply_style(
            &element,
            params.shape_type,
            color,
            params.stroke_width,
            opacity_value,
        ));
    }

    let svg_data = assemble_document(params, &content);
    let params_hash = canonical_params_hash(params)?;
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let sequence = GENERATION_COUNTER.fetch_add(1, Ordering::Relaxed);

    Ok(TextureGenerationResult {
        id: format!("texture-{}-{}", timestamp_ms, sequence),
        svg_data,
        parameters: params.clone(),
        params_hash,
        timestamp_ms,
    })
}

/// Resolve the color of element `index`.
///
/// Gradient interpolates primary to secondary across the index range. The
/// palette and random modes are accepted but not consumed yet; they resolve
/// to the primary color through their own match arms so the no-op stays
/// visible.
fn resolve_color(mode: ColorMode, primary: Rgb, secondary: Rgb, index: usize, quantity: u32) -> Rgb {
    match mode {
        ColorMode::Single => primary,
        ColorMode::Gradient => {
            let t = index as f64 / (quantity.saturating_sub(1)).max(1) as f64;
            primary.lerp(secondary, t)
        }
        ColorMode::Palette => primary,
        ColorMode::Random => primary,
    }
}

/// Splice style attributes into every element of the primitive markup.
///
/// Open curves (wave, spiral) take `fill="none"`; everything else fills and
/// strokes with the same color. The effective opacity is the product of the
/// opacity and density percentages.
fn apply_style(
    markup: &str,
    shape_type: ShapeType,
    color: Rgb,
    stroke_width: f64,
    opacity: f64,
) -> String {
    let fill = if shape::is_open_path(shape_type) {
        "none".to_string()
    } else {
        color.to_hex()
    };
    let style = format!(
        r#"fill="{}" stroke="{}" stroke-width="{}" opacity="{}""#,
        fill,
        color.to_hex(),
        stroke_width,
        opacity
    );

    markup.replace(shape::ELEMENT_END, &format!(" {} />", style))
}

/// Wrap the element content in a complete, self-contained SVG document.
///
/// The background is painted twice on purpose: once through the inline CSS
/// rule and once through an explicit rect, so it survives regardless of how
/// a consumer extracts or rasterizes the document.
fn assemble_document(params: &TextureParameters, content: &str) -> String {
    let width = params.canvas_width;
    let height = params.canvas_height;
    let background = &params.background_color;

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      svg {{ background-color: {background}; }}
    </style>
  </defs>
  <rect width="{width}" height="{height}" fill="{background}" />
  <g id="texture">
    {content}
  </g>
</svg>"#
    )
}

/// Displace positions with seeded Perlin noise.
///
/// Active only when the algorithm block is present and a top-level seed is
/// set; without both, positions pass through untouched and the pipeline
/// matches the reference layout exactly.
fn apply_noise_displacement(params: &TextureParameters, positions: &mut [Position]) {
    let (Some(AlgorithmKind::Perlin), Some(algo), Some(seed)) = (
        params.algorithm,
        params.algorithm_params.as_ref(),
        params.seed,
    ) else {
        return;
    };

    let noise = PerlinNoise::new(seed);
    let reach = algo.amplitude * 10.0 * params.scale;
    // Frequency is normalized against a 100px feature size.
    let freq = algo.frequency / 100.0;

    for pos in positions.iter_mut() {
        let dx = noise.sample_octaves(pos.x * freq, pos.y * freq, algo.octaves);
        // Offset the second channel so x and y jitter independently.
        let dy = noise.sample_octaves(pos.x * freq + 131.7, pos.y * freq + 89.3, algo.octaves);
        pos.x += dx * reach;
        pos.y += dy * reach;
    }
}

/// Returns true when repeated calls with these parameters produce identical
/// documents.
pub fn is_reproducible(params: &TextureParameters) -> bool {
    params.arrangement != Arrangement::Random || params.seed.is_some()
}
