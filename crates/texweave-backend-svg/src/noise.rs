//! Perlin noise for the noise-driven position displacement extension.
//!
//! The permutation table is shuffled with the backend [`Lcg`](crate::rng::Lcg)
//! so the field is fully determined by its seed.

use crate::rng::Lcg;

/// 2D Perlin noise generator.
#[derive(Clone)]
pub struct PerlinNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl PerlinNoise {
    /// Create a new Perlin noise generator with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);

        let mut source: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = (rng.next() * (i + 1) as f64).floor() as usize;
            source.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..512].copy_from_slice(&source);

        Self { perm }
    }

    /// Quintic fade curve.
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    /// Gradient dot product selected by the low hash bits.
    #[inline]
    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        let h = hash & 15;
        let (u, v) = if h < 8 { (x, y) } else { (y, x) };
        let u = if h & 1 == 0 { u } else { -u };
        let v = if h & 2 == 0 { v } else { -v };
        u + v
    }

    #[inline]
    fn fast_floor(x: f64) -> i32 {
        if x >= 0.0 {
            x as i32
        } else {
            x as i32 - 1
        }
    }

    /// Sample the noise field at `(x, y)`. Returns roughly `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let xi = (Self::fast_floor(x) & 255) as usize;
        let yi = (Self::fast_floor(y) & 255) as usize;

        let xf = x - Self::fast_floor(x) as f64;
        let yf = y - Self::fast_floor(y) as f64;

        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let aa = self.perm[self.perm[xi] as usize + yi];
        let ab = self.perm[self.perm[xi] as usize + yi + 1];
        let ba = self.perm[self.perm[xi + 1] as usize + yi];
        let bb = self.perm[self.perm[xi + 1] as usize + yi + 1];

        let x1 = Self::lerp(
            Self::grad(aa, xf, yf),
            Self::grad(ba, xf - 1.0, yf),
            u,
        );
        let x2 = Self::lerp(
            Self::grad(ab, xf, yf - 1.0),
            Self::grad(bb, xf - 1.0, yf - 1.0),
            u,
        );
        Self::lerp(x1, x2, v)
    }

    /// Sample with octave accumulation; each octave doubles frequency and
    /// halves amplitude. Normalized back to roughly `[-1, 1]`.
    pub fn sample_octaves(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves.max(1) {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        total / max_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = PerlinNoise::new(42);
        let b = PerlinNoise::new(42);

        for i in 0..50 {
            let x = i as f64 * 0.37;
            let y = i as f64 * 0.73;
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PerlinNoise::new(1);
        let b = PerlinNoise::new(2);

        let mut any_different = false;
        for i in 0..50 {
            let x = i as f64 * 0.37 + 0.1;
            if a.sample(x, x) != b.sample(x, x) {
                any_different = true;
                break;
            }
        }
        assert!(any_different);
    }

    #[test]
    fn test_zero_at_lattice_points() {
        // At integer coordinates the fractional offsets are zero, so all
        // gradient dot products vanish.
        let noise = PerlinNoise::new(7);
        assert_eq!(noise.sample(3.0, 5.0), 0.0);
        assert_eq!(noise.sample(-2.0, 0.0), 0.0);
    }

    #[test]
    fn test_values_bounded() {
        let noise = PerlinNoise::new(99);
        for i in 0..200 {
            let x = i as f64 * 0.17;
            let y = i as f64 * 0.29;
            let v = noise.sample_octaves(x, y, 4);
            assert!(v.abs() <= 1.5, "sample out of range: {}", v);
        }
    }

    #[test]
    fn test_octaves_change_field() {
        let noise = PerlinNoise::new(5);
        let x = 1.3;
        let y = 2.7;
        assert_ne!(
            noise.sample_octaves(x, y, 1),
            noise.sample_octaves(x, y, 4)
        );
    }
}
