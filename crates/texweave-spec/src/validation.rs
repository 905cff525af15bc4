//! Parameter validation logic.
//!
//! The generation core trusts its input; this module is the single place
//! where loosely validated UI-layer parameters are checked before they reach
//! the composer. Silent fallbacks in the core (malformed hex color, missing
//! secondary color) surface here as explicit errors or warnings.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::params::{ColorMode, ScaleVariation, TextureParameters};

/// Maximum number of elements in one generation call.
pub const MAX_QUANTITY: u32 = 100;

/// Maximum number of noise octaves.
pub const MAX_OCTAVES: u32 = 16;

/// Regex pattern for a 6-digit hex color with optional leading `#`.
const HEX_COLOR_PATTERN: &str = r"^#?[0-9a-fA-F]{6}$";

static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn hex_color_regex() -> &'static Regex {
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if the string is a 6-digit hex color (optional leading `#`).
pub fn is_hex_color(s: &str) -> bool {
    hex_color_regex().is_match(s)
}

/// Validates a parameter record and returns a validation result.
///
/// # Example
/// ```
/// use texweave_spec::TextureParameters;
/// use texweave_spec::validation::validate_params;
///
/// let params = TextureParameters::default();
/// let result = validate_params(&params);
/// assert!(result.is_ok());
/// ```
pub fn validate_params(params: &TextureParameters) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_quantity(params, &mut result);
    validate_canvas(params, &mut result);
    validate_scale(params, &mut result);
    validate_rotation(params, &mut result);
    validate_percentages(params, &mut result);
    validate_colors(params, &mut result);
    validate_stroke_width(params, &mut result);
    validate_algorithm(params, &mut result);

    check_warnings(params, &mut result);

    result
}

fn validate_quantity(params: &TextureParameters, result: &mut ValidationResult) {
    if params.quantity == 0 || params.quantity > MAX_QUANTITY {
        result.add_error(ValidationError::with_path(
            ErrorCode::QuantityOutOfRange,
            format!(
                "quantity must be 1 to {}, got {}",
                MAX_QUANTITY, params.quantity
            ),
            "quantity",
        ));
    }
}

fn validate_canvas(params: &TextureParameters, result: &mut ValidationResult) {
    if params.canvas_width == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCanvasSize,
            "canvas width must be positive",
            "canvasWidth",
        ));
    }
    if params.canvas_height == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCanvasSize,
            "canvas height must be positive",
            "canvasHeight",
        ));
    }
}

fn validate_scale(params: &TextureParameters, result: &mut ValidationResult) {
    if !params.scale.is_finite() || params.scale <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidScale,
            format!("scale must be a positive number, got {}", params.scale),
            "scale",
        ));
    }
}

fn validate_rotation(params: &TextureParameters, result: &mut ValidationResult) {
    if !params.rotation.is_finite() || !(0.0..360.0).contains(&params.rotation) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRotation,
            format!("rotation must be in [0, 360), got {}", params.rotation),
            "rotation",
        ));
    }
    if !params.rotation_increment.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRotation,
            "rotation increment must be finite",
            "rotationIncrement",
        ));
    }
    if !params.rotation_random_range.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRotation,
            "rotation random range must be finite",
            "rotationRandomRange",
        ));
    }
}

fn validate_percentages(params: &TextureParameters, result: &mut ValidationResult) {
    for (value, path) in [(params.density, "density"), (params.opacity, "opacity")] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::PercentOutOfRange,
                format!("{} must be in [0, 100], got {}", path, value),
                path,
            ));
        }
    }
}

fn validate_colors(params: &TextureParameters, result: &mut ValidationResult) {
    let mut check = |color: &str, path: &str| {
        if !is_hex_color(color) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidColor,
                format!("'{}' is not a 6-digit hex color", color),
                path,
            ));
        }
    };

    check(&params.primary_color, "primaryColor");
    check(&params.background_color, "backgroundColor");
    if let Some(ref secondary) = params.secondary_color {
        check(secondary, "secondaryColor");
    }
}

fn validate_stroke_width(params: &TextureParameters, result: &mut ValidationResult) {
    if !params.stroke_width.is_finite() || params.stroke_width < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidStrokeWidth,
            format!(
                "stroke width must be non-negative, got {}",
                params.stroke_width
            ),
            "strokeWidth",
        ));
    }
}

fn validate_algorithm(params: &TextureParameters, result: &mut ValidationResult) {
    let Some(ref algo) = params.algorithm_params else {
        return;
    };

    if !algo.frequency.is_finite() || algo.frequency <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAlgorithmParams,
            format!("frequency must be positive, got {}", algo.frequency),
            "algorithmParams.frequency",
        ));
    }
    if !algo.amplitude.is_finite() || algo.amplitude < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAlgorithmParams,
            format!("amplitude must be non-negative, got {}", algo.amplitude),
            "algorithmParams.amplitude",
        ));
    }
    if algo.octaves == 0 || algo.octaves > MAX_OCTAVES {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAlgorithmParams,
            format!("octaves must be 1 to {}, got {}", MAX_OCTAVES, algo.octaves),
            "algorithmParams.octaves",
        ));
    }
}

fn check_warnings(params: &TextureParameters, result: &mut ValidationResult) {
    match params.color_mode {
        ColorMode::Palette | ColorMode::Random => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnimplementedColorMode,
                format!(
                    "color mode '{:?}' is accepted but not consumed; elements use the primary color",
                    params.color_mode
                ),
                "colorMode",
            ));
        }
        ColorMode::Single | ColorMode::Gradient => {}
    }

    if matches!(
        params.scale_variation,
        Some(ScaleVariation::Arithmetic) | Some(ScaleVariation::Random)
    ) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::PassThroughScaleVariation,
            "scale variation is accepted but not consumed; elements use the uniform base scale",
            "scaleVariation",
        ));
    }

    if params.name.trim().is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingName,
            "name is empty",
            "name",
        ));
    }

    if params.color_mode == ColorMode::Gradient && params.secondary_color.is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingSecondaryColor,
            "gradient mode without a secondary color interpolates toward white",
            "secondaryColor",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AlgorithmParams, RotationType};

    fn valid_params() -> TextureParameters {
        TextureParameters {
            color_mode: ColorMode::Single,
            algorithm: None,
            algorithm_params: None,
            ..TextureParameters::default()
        }
    }

    #[test]
    fn test_default_params_validate() {
        let result = validate_params(&TextureParameters::default());
        assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    #[test]
    fn test_quantity_bounds() {
        let mut params = valid_params();
        params.quantity = 0;
        let result = validate_params(&params);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::QuantityOutOfRange);

        params.quantity = 101;
        assert!(!validate_params(&params).is_ok());

        params.quantity = 100;
        assert!(validate_params(&params).is_ok());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let mut params = valid_params();
        params.canvas_width = 0;
        let result = validate_params(&params);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidCanvasSize);
        assert_eq!(result.errors[0].path.as_deref(), Some("canvasWidth"));
    }

    #[test]
    fn test_bad_hex_color_rejected() {
        let mut params = valid_params();
        params.primary_color = "#12345".to_string();
        let result = validate_params(&params);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidColor);

        params.primary_color = "not-a-color".to_string();
        assert!(!validate_params(&params).is_ok());
    }

    #[test]
    fn test_hex_color_accepts_optional_hash() {
        assert!(is_hex_color("#ff00aa"));
        assert!(is_hex_color("FF00AA"));
        assert!(!is_hex_color("#ff00a"));
        assert!(!is_hex_color("#gg00aa"));
    }

    #[test]
    fn test_rotation_range() {
        let mut params = valid_params();
        params.rotation = 360.0;
        assert!(!validate_params(&params).is_ok());

        params.rotation = -1.0;
        assert!(!validate_params(&params).is_ok());

        params.rotation = 359.9;
        params.rotation_type = RotationType::Incremental;
        params.rotation_increment = 45.0;
        assert!(validate_params(&params).is_ok());
    }

    #[test]
    fn test_unimplemented_color_mode_warns() {
        let mut params = valid_params();
        params.color_mode = ColorMode::Palette;
        let result = validate_params(&params);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::UnimplementedColorMode);
    }

    #[test]
    fn test_pass_through_scale_variation_warns() {
        let mut params = valid_params();
        params.scale_variation = Some(ScaleVariation::Arithmetic);
        let result = validate_params(&params);
        assert!(result.is_ok());
        assert_eq!(
            result.warnings[0].code,
            WarningCode::PassThroughScaleVariation
        );

        // Fibonacci is consumed, so no warning.
        params.scale_variation = Some(ScaleVariation::Fibonacci);
        assert!(validate_params(&params).warnings.is_empty());
    }

    #[test]
    fn test_gradient_without_secondary_warns() {
        let mut params = valid_params();
        params.color_mode = ColorMode::Gradient;
        params.secondary_color = None;
        let result = validate_params(&params);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::MissingSecondaryColor);
    }

    #[test]
    fn test_algorithm_params_bounds() {
        let mut params = valid_params();
        params.algorithm_params = Some(AlgorithmParams {
            frequency: 0.0,
            amplitude: 0.3,
            octaves: 4,
        });
        let result = validate_params(&params);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidAlgorithmParams);

        params.algorithm_params = Some(AlgorithmParams {
            frequency: 0.5,
            amplitude: 0.3,
            octaves: 0,
        });
        assert!(!validate_params(&params).is_ok());
    }
}
