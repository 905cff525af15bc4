//! Texture parameter types.
//!
//! A [`TextureParameters`] record is the entire contract surface between the
//! parameter-editing UI and the generation core. It is created by the caller,
//! passed by value into the composer, and never mutated by generation.

use serde::{Deserialize, Serialize};

/// Geometric primitive families the renderer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Square,
    Triangle,
    Hexagon,
    Pentagon,
    Star,
    Wave,
    Spiral,
    Radial,
    Grid,
}

impl ShapeType {
    /// Returns the shape type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Square => "square",
            ShapeType::Triangle => "triangle",
            ShapeType::Hexagon => "hexagon",
            ShapeType::Pentagon => "pentagon",
            ShapeType::Star => "star",
            ShapeType::Wave => "wave",
            ShapeType::Spiral => "spiral",
            ShapeType::Radial => "radial",
            ShapeType::Grid => "grid",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout strategy used to place elements on the canvas.
///
/// Values outside this enumeration are rejected at deserialization time;
/// there is no default-arrangement fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    Grid,
    Spiral,
    Radial,
    Random,
    Linear,
}

impl Arrangement {
    /// Returns the arrangement as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arrangement::Grid => "grid",
            Arrangement::Spiral => "spiral",
            Arrangement::Radial => "radial",
            Arrangement::Random => "random",
            Arrangement::Linear => "linear",
        }
    }

    /// Returns all arrangements.
    pub fn all() -> &'static [Arrangement] {
        &[
            Arrangement::Grid,
            Arrangement::Spiral,
            Arrangement::Radial,
            Arrangement::Random,
            Arrangement::Linear,
        ]
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Policy for how per-element rotation varies across the index sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationType {
    /// Constant base rotation for every element.
    Fixed,
    /// Base rotation plus `i * rotation_increment` degrees, unwrapped.
    Incremental,
    /// Base rotation plus index-seeded jitter within `rotation_random_range`.
    Random,
}

/// Policy for how per-element size varies across the index sequence.
///
/// Only `fibonacci` alters the scale; the remaining values are accepted and
/// preserved but resolve to the uniform base scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleVariation {
    Uniform,
    Fibonacci,
    Arithmetic,
    Random,
}

/// Policy for how per-element color varies.
///
/// `palette` and `random` are accepted and preserved but resolve to the
/// primary color; validation surfaces the no-op as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Single,
    Gradient,
    Palette,
    Random,
}

/// Noise algorithm reserved for noise-driven generation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Perlin,
}

/// Numeric parameters for the noise algorithm block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmParams {
    /// Noise frequency (cycles per canvas unit scale).
    pub frequency: f64,
    /// Displacement amplitude as a fraction of element radius.
    pub amplitude: f64,
    /// Number of noise octaves to accumulate.
    pub octaves: u32,
}

/// Element spacing bounds. Preserved pass-through metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingRange {
    pub min: f64,
    pub max: f64,
}

/// Complete input record for one texture generation call.
///
/// Serialized as camelCase JSON to match the parameter-panel wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextureParameters {
    /// Opaque identifier label.
    pub id: String,

    /// Opaque display-name label.
    pub name: String,

    /// Which geometric primitive to place.
    pub shape_type: ShapeType,

    /// Number of elements to place. Valid range: 1 to 100 inclusive.
    pub quantity: u32,

    /// Layout strategy.
    pub arrangement: Arrangement,

    /// Rotation policy.
    pub rotation_type: RotationType,

    /// Base rotation in degrees, [0, 360).
    pub rotation: f64,

    /// Degrees added per index. Consumed only by incremental rotation.
    #[serde(default)]
    pub rotation_increment: f64,

    /// Jitter span in degrees. Consumed only by random rotation.
    #[serde(default)]
    pub rotation_random_range: f64,

    /// Base element scale. Must be positive; typical range 0.1 to 5.0.
    pub scale: f64,

    /// Optional scale variation policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_variation: Option<ScaleVariation>,

    /// Color policy.
    pub color_mode: ColorMode,

    /// Primary color as a `#RRGGBB` hex string.
    pub primary_color: String,

    /// Secondary color as a `#RRGGBB` hex string. Gradient mode falls back
    /// to white when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    /// Stroke width in pixels.
    pub stroke_width: f64,

    /// Density percentage, 0 to 100.
    pub density: f64,

    /// Opacity percentage, 0 to 100. Effective rendered opacity is
    /// `(opacity / 100) * (density / 100)`.
    pub opacity: f64,

    /// Canvas width in pixels. Must be positive.
    pub canvas_width: u32,

    /// Canvas height in pixels. Must be positive.
    pub canvas_height: u32,

    /// Canvas background color as a `#RRGGBB` hex string.
    pub background_color: String,

    /// Reserved noise algorithm selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmKind>,

    /// Reserved noise algorithm parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_params: Option<AlgorithmParams>,

    /// Top-level RNG seed. When set, every generation call (including the
    /// random arrangement) is reproducible. When absent, the random
    /// arrangement reseeds from entropy each call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Element spacing bounds. Preserved pass-through metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingRange>,

    /// Compositing blend mode label. Preserved pass-through metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
}

impl TextureParameters {
    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the parameters to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the parameters to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the parameters to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Default for TextureParameters {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "New Texture".to_string(),
            shape_type: ShapeType::Circle,
            quantity: 12,
            arrangement: Arrangement::Grid,
            rotation_type: RotationType::Fixed,
            rotation: 30.0,
            rotation_increment: 0.0,
            rotation_random_range: 0.0,
            scale: 1.0,
            scale_variation: None,
            color_mode: ColorMode::Gradient,
            primary_color: "#5847eb".to_string(),
            secondary_color: Some("#FF6B6B".to_string()),
            stroke_width: 2.0,
            density: 100.0,
            opacity: 100.0,
            canvas_width: 800,
            canvas_height: 800,
            background_color: "#FFFFFF".to_string(),
            algorithm: Some(AlgorithmKind::Perlin),
            algorithm_params: Some(AlgorithmParams {
                frequency: 0.5,
                amplitude: 0.3,
                octaves: 4,
            }),
            seed: None,
            spacing: Some(SpacingRange {
                min: 10.0,
                max: 50.0,
            }),
            blend_mode: Some("normal".to_string()),
        }
    }
}
