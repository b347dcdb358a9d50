//! Deterministic Perlin noise.
//!
//! A single hash-based gradient noise kernel over Ken Perlin's reference
//! permutation, with optional tiling and octave accumulation.

mod perlin;
mod permutation;

// Re-export public types
pub use perlin::{fade, gradient, increment, lerp, PerlinNoise};
pub use permutation::{PermutationTable, TABLE_LEN};

use glam::DVec3;

/// A position in noise space plus its tiling period
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoisePoint {
    pub position: DVec3,
    /// Period along every axis; `0` means no tiling
    pub repeat: i32,
}

impl NoisePoint {
    /// Untiled point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
            repeat: 0,
        }
    }

    /// Same point with a tiling period
    pub fn tiled(self, repeat: i32) -> Self {
        Self { repeat, ..self }
    }
}

impl From<DVec3> for NoisePoint {
    fn from(position: DVec3) -> Self {
        Self {
            position,
            repeat: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_matches_noise() {
        let perlin = PerlinNoise::new();

        let point = NoisePoint::new(1.8, 2.6, 3.4);
        assert_eq!(point.repeat, 0);
        assert_eq!(perlin.sample(point), perlin.noise(1.8, 2.6, 3.4, 0));

        let tiled = point.tiled(2);
        assert_eq!(tiled.position, point.position);
        assert_eq!(perlin.sample(tiled), perlin.noise(1.8, 2.6, 3.4, 2));
    }

    #[test]
    fn test_point_from_vector() {
        let point = NoisePoint::from(DVec3::new(0.5, 1.5, 2.5));
        assert_eq!(point, NoisePoint::new(0.5, 1.5, 2.5));
    }
}
