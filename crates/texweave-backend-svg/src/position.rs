//! Placement-point planning.
//!
//! Computes the ordered sequence of canvas positions for `quantity`
//! elements under one of the five arrangement strategies. Every strategy
//! returns exactly `quantity` points and degenerates safely at
//! `quantity == 1`; `quantity == 0` yields an empty sequence.

use std::f64::consts::PI;

use texweave_spec::Arrangement;

use crate::rng::Lcg;

/// A placement point in canvas coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Radius used by the spiral and radial arrangements.
pub fn arrangement_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 3.0
}

/// Compute placement points for the requested arrangement.
///
/// The RNG is consumed only by the random arrangement; the other four are
/// pure functions of quantity and canvas size.
pub fn plan_positions(
    arrangement: Arrangement,
    quantity: u32,
    width: f64,
    height: f64,
    rng: &mut Lcg,
) -> Vec<Position> {
    if quantity == 0 {
        return Vec::new();
    }

    match arrangement {
        Arrangement::Grid => grid_positions(quantity, width, height),
        Arrangement::Spiral => spiral_positions(
            quantity,
            width / 2.0,
            height / 2.0,
            arrangement_radius(width, height),
        ),
        Arrangement::Radial => radial_positions(
            quantity,
            width / 2.0,
            height / 2.0,
            arrangement_radius(width, height),
        ),
        Arrangement::Random => random_positions(quantity, width, height, rng),
        Arrangement::Linear => linear_positions(quantity, width, height),
    }
}

/// Row-major cell centers of a near-square grid.
fn grid_positions(quantity: u32, width: f64, height: f64) -> Vec<Position> {
    let cols = (quantity as f64).sqrt().ceil() as u32;
    let rows = quantity.div_ceil(cols);
    let cell_width = width / cols as f64;
    let cell_height = height / rows as f64;

    (0..quantity)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            Position {
                x: cell_width * col as f64 + cell_width / 2.0,
                y: cell_height * row as f64 + cell_height / 2.0,
            }
        })
        .collect()
}

/// Archimedean spiral outward from the canvas center; angle and radius both
/// scale linearly with index.
fn spiral_positions(quantity: u32, center_x: f64, center_y: f64, max_radius: f64) -> Vec<Position> {
    (0..quantity)
        .map(|i| {
            let t = i as f64 / quantity as f64;
            let angle = t * 2.0 * PI;
            let radius = t * max_radius;
            Position {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
            }
        })
        .collect()
}

/// Points evenly spaced on a circle of fixed radius.
fn radial_positions(quantity: u32, center_x: f64, center_y: f64, radius: f64) -> Vec<Position> {
    (0..quantity)
        .map(|i| {
            let angle = (i as f64 / quantity as f64) * 2.0 * PI;
            Position {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
            }
        })
        .collect()
}

/// Independent uniform draws over the canvas.
fn random_positions(quantity: u32, width: f64, height: f64, rng: &mut Lcg) -> Vec<Position> {
    (0..quantity)
        .map(|_| Position {
            x: rng.next() * width,
            y: rng.next() * height,
        })
        .collect()
}

/// Points evenly spaced along the horizontal mid-line.
fn linear_positions(quantity: u32, width: f64, height: f64) -> Vec<Position> {
    (0..quantity)
        .map(|i| Position {
            x: (width / quantity as f64) * i as f64 + width / (quantity as f64 * 2.0),
            y: height / 2.0,
        })
        .collect()
}
