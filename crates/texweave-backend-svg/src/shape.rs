//! Vector primitive emission.
//!
//! Each function returns unstyled SVG markup for one shape kind; style
//! attributes are appended by the composer. Every emitted element ends with
//! the `" />"` token the composer splices styles into, and none carries
//! paint attributes of its own.

use std::f64::consts::PI;

use texweave_spec::ShapeType;

use crate::position::Position;

/// Token terminating every emitted element; the composer splices style
/// attributes in front of it.
pub const ELEMENT_END: &str = " />";

/// Render the primitive markup for one element.
///
/// `radius` is the resolved element radius (`10 * scale`); `scale` itself is
/// additionally consumed by the radial-lines shape for its line count.
/// `ShapeType` is a closed enum, so every kind is handled exhaustively.
pub fn render(
    shape: ShapeType,
    center: Position,
    radius: f64,
    rotation_deg: f64,
    scale: f64,
) -> String {
    let Position { x, y } = center;
    match shape {
        ShapeType::Circle => circle(x, y, radius),
        ShapeType::Square => square(x - radius, y - radius, radius * 2.0),
        ShapeType::Triangle => polygon(3, x, y, radius, rotation_deg),
        ShapeType::Pentagon => polygon(5, x, y, radius, rotation_deg),
        ShapeType::Hexagon => polygon(6, x, y, radius, rotation_deg),
        ShapeType::Star => star(x, y, radius, rotation_deg),
        ShapeType::Wave => wave(
            x - radius * 2.0,
            y - radius / 2.0,
            radius * 4.0,
            radius,
            radius * 0.5,
        ),
        ShapeType::Spiral => spiral(x, y, radius * 2.0, 3, rotation_deg),
        ShapeType::Radial => radial_lines(x, y, radius * 2.0, (8.0 * scale).floor() as u32),
        ShapeType::Grid => sub_grid(x - radius, y - radius, radius * 2.0, radius * 2.0, radius * 0.4),
    }
}

/// True for shape kinds emitting open curves that must not be filled.
pub fn is_open_path(shape: ShapeType) -> bool {
    matches!(shape, ShapeType::Wave | ShapeType::Spiral)
}

/// Centered disk.
fn circle(cx: f64, cy: f64, r: f64) -> String {
    format!(r#"<circle cx="{}" cy="{}" r="{}" />"#, cx, cy, r)
}

/// Axis-aligned box.
fn square(x: f64, y: f64, size: f64) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" />"#,
        x, y, size, size
    )
}

/// Regular N-gon sampled around the center; vertex 0 sits at the rotation
/// angle.
fn polygon(sides: u32, cx: f64, cy: f64, size: f64, rotation_deg: f64) -> String {
    let angle_step = 2.0 * PI / sides as f64;
    let rotation_rad = rotation_deg.to_radians();

    let points: Vec<String> = (0..sides)
        .map(|i| {
            let angle = i as f64 * angle_step + rotation_rad;
            format!("{},{}", cx + size * angle.cos(), cy + size * angle.sin())
        })
        .collect();

    format!(r#"<polygon points="{}" />"#, points.join(" "))
}

/// 10-vertex star alternating outer and inner radius every 36 degrees.
fn star(cx: f64, cy: f64, size: f64, rotation_deg: f64) -> String {
    let outer_radius = size;
    let inner_radius = size * 0.4;
    let rotation_rad = rotation_deg.to_radians();

    let points: Vec<String> = (0..10)
        .map(|i| {
            let angle = i as f64 * PI / 5.0 + rotation_rad;
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            format!(
                "{},{}",
                cx + radius * angle.cos(),
                cy + radius * angle.sin()
            )
        })
        .collect();

    format!(r#"<polygon points="{}" />"#, points.join(" "))
}

/// 50-segment sampled sine curve, one full cycle across the width.
fn wave(x: f64, y: f64, width: f64, height: f64, amplitude: f64) -> String {
    const STEPS: u32 = 50;

    let points: Vec<String> = (0..=STEPS)
        .map(|i| {
            let t = i as f64 / STEPS as f64;
            let px = x + t * width;
            let py = y + height / 2.0 + (t * PI * 2.0).sin() * amplitude;
            format!("{},{}", px, py)
        })
        .collect();

    format!(r#"<polyline points="{}" />"#, points.join(" "))
}

/// 200-segment sampled Archimedean spiral, phase-shifted by the rotation.
fn spiral(cx: f64, cy: f64, max_radius: f64, turns: u32, rotation_deg: f64) -> String {
    const STEPS: u32 = 200;
    let rotation_rad = rotation_deg.to_radians();

    let points: Vec<String> = (0..=STEPS)
        .map(|i| {
            let t = i as f64 / STEPS as f64;
            let angle = t * turns as f64 * 2.0 * PI + rotation_rad;
            let radius = t * max_radius;
            format!(
                "{},{}",
                cx + radius * angle.cos(),
                cy + radius * angle.sin()
            )
        })
        .collect();

    format!(r#"<polyline points="{}" />"#, points.join(" "))
}

/// Evenly spaced lines from the center to a circle.
fn radial_lines(cx: f64, cy: f64, radius: f64, lines: u32) -> String {
    let mut markup = String::new();
    for i in 0..lines {
        let angle = (i as f64 / lines as f64) * PI * 2.0;
        let x2 = cx + radius * angle.cos();
        let y2 = cy + radius * angle.sin();
        markup.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            cx, cy, x2, y2
        ));
    }
    markup
}

/// Orthogonal line lattice filling a box.
fn sub_grid(x: f64, y: f64, width: f64, height: f64, cell_size: f64) -> String {
    if !(cell_size > 0.0) {
        return String::new();
    }

    let cols = (width / cell_size).ceil() as u32;
    let rows = (height / cell_size).ceil() as u32;
    let mut markup = String::new();

    for i in 0..=cols {
        let lx = x + i as f64 * cell_size;
        markup.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            lx,
            y,
            lx,
            y + height
        ));
    }
    for i in 0..=rows {
        let ly = y + i as f64 * cell_size;
        markup.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            x,
            ly,
            x + width,
            ly
        ));
    }

    markup
}
