//! Per-element scale and rotation resolution.

use texweave_spec::{RotationType, ScaleVariation};

use crate::rng::Lcg;

/// First `count` Fibonacci terms starting `1, 1, 2, 3, 5, ...`.
///
/// u128 keeps the full sequence exact up to the 100-element quantity cap.
pub fn fibonacci_sequence(count: usize) -> Vec<u128> {
    let mut seq = Vec::with_capacity(count.max(2));
    seq.push(1u128);
    seq.push(1u128);
    while seq.len() < count {
        let next = seq[seq.len() - 1] + seq[seq.len() - 2];
        seq.push(next);
    }
    seq.truncate(count.max(1));
    seq
}

/// Resolve the scale of element `index`.
///
/// Fibonacci variation replaces the base scale with
/// `fib[index] / fib[quantity - 1] * scale`, so the last element carries the
/// full base scale. The remaining variation values are accepted but resolve
/// to the uniform base scale.
pub fn resolve_scale(
    index: usize,
    quantity: u32,
    scale: f64,
    variation: Option<ScaleVariation>,
) -> f64 {
    match variation {
        Some(ScaleVariation::Fibonacci) => {
            let fib = fibonacci_sequence(quantity as usize);
            let last = *fib.last().unwrap_or(&1) as f64;
            (fib.get(index).copied().unwrap_or(1) as f64 / last) * scale
        }
        // Accepted but not consumed; elements keep the uniform base scale.
        Some(ScaleVariation::Uniform)
        | Some(ScaleVariation::Arithmetic)
        | Some(ScaleVariation::Random)
        | None => scale,
    }
}

/// Resolve the rotation of element `index` in degrees.
///
/// Incremental rotation grows without wrapping to `[0, 360)`. Random jitter
/// seeds from the element index, so it is reproducible across calls.
pub fn resolve_rotation(
    index: usize,
    base: f64,
    rotation_type: RotationType,
    increment: f64,
    random_range: f64,
) -> f64 {
    match rotation_type {
        RotationType::Fixed => base,
        RotationType::Incremental => base + index as f64 * increment,
        RotationType::Random => {
            let mut rng = Lcg::new(index as u32);
            base + (rng.next() - 0.5) * random_range
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_sequence() {
        assert_eq!(fibonacci_sequence(1), vec![1]);
        assert_eq!(fibonacci_sequence(2), vec![1, 1]);
        assert_eq!(fibonacci_sequence(7), vec![1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_fibonacci_full_quantity_range() {
        // Must stay exact across the whole valid quantity range.
        let fib = fibonacci_sequence(100);
        assert_eq!(fib.len(), 100);
        assert_eq!(fib[99], fib[98] + fib[97]);
    }

    #[test]
    fn test_fibonacci_scale_proportions() {
        let scales: Vec<f64> = (0..5)
            .map(|i| resolve_scale(i, 5, 1.0, Some(ScaleVariation::Fibonacci)))
            .collect();
        let expected = [1.0 / 5.0, 1.0 / 5.0, 2.0 / 5.0, 3.0 / 5.0, 1.0];
        for (s, e) in scales.iter().zip(expected) {
            assert!((s - e).abs() < 1e-12, "got {} expected {}", s, e);
        }
    }

    #[test]
    fn test_non_fibonacci_variations_pass_through() {
        for variation in [
            None,
            Some(ScaleVariation::Uniform),
            Some(ScaleVariation::Arithmetic),
            Some(ScaleVariation::Random),
        ] {
            for i in 0..10 {
                assert_eq!(resolve_scale(i, 10, 2.5, variation), 2.5);
            }
        }
    }

    #[test]
    fn test_fixed_rotation() {
        for i in 0..10 {
            assert_eq!(resolve_rotation(i, 45.0, RotationType::Fixed, 20.0, 90.0), 45.0);
        }
    }

    #[test]
    fn test_incremental_rotation() {
        let rotations: Vec<f64> = (0..4)
            .map(|i| resolve_rotation(i, 10.0, RotationType::Incremental, 20.0, 0.0))
            .collect();
        assert_eq!(rotations, vec![10.0, 30.0, 50.0, 70.0]);
    }

    #[test]
    fn test_incremental_rotation_does_not_wrap() {
        let r = resolve_rotation(30, 350.0, RotationType::Incremental, 20.0, 0.0);
        assert_eq!(r, 950.0);
    }

    #[test]
    fn test_random_rotation_is_index_reproducible() {
        let a = resolve_rotation(3, 0.0, RotationType::Random, 0.0, 90.0);
        let b = resolve_rotation(3, 0.0, RotationType::Random, 0.0, 90.0);
        assert_eq!(a, b);

        // Jitter stays inside the half-range band.
        assert!(a.abs() <= 45.0);
    }

    #[test]
    fn test_random_rotation_varies_by_index() {
        let a = resolve_rotation(1, 0.0, RotationType::Random, 0.0, 90.0);
        let b = resolve_rotation(2, 0.0, RotationType::Random, 0.0, 90.0);
        assert_ne!(a, b);
    }
}
