use super::*;
use texweave_spec::{
    AlgorithmParams, Arrangement, ColorMode, RotationType, ShapeType, TextureParameters,
};

fn base_params() -> TextureParameters {
    TextureParameters {
        shape_type: ShapeType::Circle,
        quantity: 1,
        arrangement: Arrangement::Grid,
        rotation_type: RotationType::Fixed,
        rotation: 0.0,
        scale: 1.0,
        color_mode: ColorMode::Single,
        primary_color: "#ff0000".to_string(),
        stroke_width: 2.0,
        density: 100.0,
        opacity: 100.0,
        canvas_width: 100,
        canvas_height: 100,
        background_color: "#ffffff".to_string(),
        algorithm: None,
        algorithm_params: None,
        seed: Some(1),
        ..TextureParameters::default()
    }
}

#[test]
fn single_circle_lands_at_canvas_center() {
    let result = generate(&base_params()).unwrap();
    assert!(result.svg_data.contains(r#"<circle cx="50" cy="50" r="10""#));
}

#[test]
fn single_element_style_uses_primary_color_and_full_opacity() {
    let result = generate(&base_params()).unwrap();
    assert!(result
        .svg_data
        .contains(r##"fill="#ff0000" stroke="#ff0000" stroke-width="2" opacity="1""##));
}

#[test]
fn document_has_declaration_viewbox_and_group() {
    let svg = generate(&base_params()).unwrap().svg_data;
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    assert!(svg.contains(r#"<g id="texture">"#));
    assert!(svg.contains(r##"<rect width="100" height="100" fill="#ffffff" />"##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn zero_quantity_yields_empty_group() {
    let mut params = base_params();
    params.quantity = 0;
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r#"<g id="texture">"#));
    assert!(!svg.contains("<circle"));
}

#[test]
fn quantity_matches_element_count() {
    let mut params = base_params();
    params.quantity = 7;
    let svg = generate(&params).unwrap().svg_data;
    assert_eq!(svg.matches("<circle").count(), 7);
}

#[test]
fn deterministic_arrangements_are_idempotent() {
    for arrangement in [
        Arrangement::Grid,
        Arrangement::Spiral,
        Arrangement::Radial,
        Arrangement::Linear,
    ] {
        let mut params = base_params();
        params.arrangement = arrangement;
        params.quantity = 12;
        params.seed = None;
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.svg_data, b.svg_data, "{arrangement:?}");
    }
}

#[test]
fn seeded_random_arrangement_is_idempotent() {
    let mut params = base_params();
    params.arrangement = Arrangement::Random;
    params.quantity = 20;
    params.seed = Some(42);
    let a = generate(&params).unwrap();
    let b = generate(&params).unwrap();
    assert_eq!(a.svg_data, b.svg_data);
}

#[test]
fn reproducibility_flag_tracks_arrangement_and_seed() {
    let mut params = base_params();
    assert!(is_reproducible(&params));

    params.arrangement = Arrangement::Random;
    assert!(is_reproducible(&params));

    params.seed = None;
    assert!(!is_reproducible(&params));
}

#[test]
fn gradient_spans_primary_to_secondary() {
    let mut params = base_params();
    params.quantity = 2;
    params.color_mode = ColorMode::Gradient;
    params.primary_color = "#000000".to_string();
    params.secondary_color = Some("#ffffff".to_string());
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r##"fill="#ffffff""##));
}

#[test]
fn gradient_without_secondary_falls_back_to_white() {
    let mut params = base_params();
    params.quantity = 2;
    params.color_mode = ColorMode::Gradient;
    params.primary_color = "#000000".to_string();
    params.secondary_color = None;
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r##"fill="#ffffff""##));
}

#[test]
fn palette_and_random_modes_resolve_to_primary() {
    for mode in [ColorMode::Palette, ColorMode::Random] {
        let mut params = base_params();
        params.color_mode = mode;
        let svg = generate(&params).unwrap().svg_data;
        assert!(svg.contains(r##"fill="#ff0000""##), "{mode:?}");
    }
}

#[test]
fn unparsable_color_falls_back_to_black() {
    let mut params = base_params();
    params.primary_color = "not-a-color".to_string();
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r##"fill="#000000""##));
}

#[test]
fn open_paths_get_no_fill() {
    let mut params = base_params();
    params.shape_type = ShapeType::Wave;
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(r##"stroke="#ff0000""##));
}

#[test]
fn every_element_of_a_compound_shape_is_styled() {
    let mut params = base_params();
    params.shape_type = ShapeType::Radial;
    let svg = generate(&params).unwrap().svg_data;
    let lines = svg.matches("<line").count();
    assert_eq!(lines, 8);
    // Each spoke carries its own style attributes.
    assert_eq!(svg.matches(r#"opacity="1""#).count(), lines);
}

#[test]
fn opacity_is_product_of_opacity_and_density() {
    let mut params = base_params();
    params.opacity = 80.0;
    params.density = 50.0;
    let svg = generate(&params).unwrap().svg_data;
    assert!(svg.contains(r#"opacity="0.4""#));
}

#[test]
fn result_carries_input_and_canonical_hash() {
    let params = base_params();
    let result = generate(&params).unwrap();
    assert_eq!(result.parameters, params);
    assert_eq!(
        result.params_hash,
        canonical_params_hash(&params).unwrap()
    );
}

#[test]
fn result_ids_are_session_unique() {
    let params = base_params();
    let a = generate(&params).unwrap();
    let b = generate(&params).unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("texture-"));
}

#[test]
fn noise_displacement_requires_algorithm_and_seed() {
    let mut plain = base_params();
    plain.quantity = 9;
    let baseline = generate(&plain).unwrap().svg_data;

    // Algorithm block without a seed changes nothing.
    let mut unseeded = plain.clone();
    unseeded.algorithm = Some(AlgorithmKind::Perlin);
    unseeded.algorithm_params = Some(AlgorithmParams {
        frequency: 2.0,
        amplitude: 1.5,
        octaves: 3,
    });
    unseeded.seed = None;
    let mut reference = plain.clone();
    reference.seed = None;
    assert_eq!(
        generate(&unseeded).unwrap().svg_data,
        generate(&reference).unwrap().svg_data
    );

    // Full algorithm block plus seed displaces the layout.
    let mut displaced = plain.clone();
    displaced.algorithm = Some(AlgorithmKind::Perlin);
    displaced.algorithm_params = Some(AlgorithmParams {
        frequency: 2.0,
        amplitude: 1.5,
        octaves: 3,
    });
    let shifted = generate(&displaced).unwrap().svg_data;
    assert_ne!(baseline, shifted);
    assert_eq!(shifted, generate(&displaced).unwrap().svg_data);
}
