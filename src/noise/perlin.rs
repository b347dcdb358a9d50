//! Classic 3D gradient noise with optional tiling.

use super::permutation::PermutationTable;
use super::NoisePoint;

/// Lattice indices wrap at the permutation table period.
const LATTICE_PERIOD: i64 = 256;

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`
///
/// First and second derivatives vanish at 0 and 1, which keeps the noise
/// field C2-continuous across cell boundaries.
#[inline]
pub fn fade(t: f64) -> f64 {
    6.0 * t * t * t * t * t - 15.0 * t * t * t * t + 10.0 * t * t * t
}

/// Step to the next lattice cell, wrapping at `repeat` when tiling is on
///
/// `i32::MAX` steps to `i32::MIN` rather than overflowing.
#[inline]
pub fn increment(value: i32, repeat: i32) -> i32 {
    let next = value.wrapping_add(1);
    if repeat > 0 {
        next % repeat
    } else {
        next
    }
}

/// Dot product of `(x, y, z)` with one of 16 gradient directions picked by `hash`
///
/// The set contains repeats (entries 9/13 and 11/15) and is not the
/// 12-edge cube set; changing it changes every generated value.
#[inline]
pub fn gradient(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    match hash & 15 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x + z,
        5 => -x + z,
        6 => x - z,
        7 => -x - z,
        8 => y + z,
        9 => -y + z,
        10 => y - z,
        11 => -y - z,
        12 => y + x,
        13 => -y + z,
        14 => y - x,
        _ => -y - z,
    }
}

/// Linear interpolation, not clamped
#[inline]
pub fn lerp(a: f64, b: f64, weight: f64) -> f64 {
    a + weight * (b - a)
}

/// Fold a coordinate into `[0, period)`
fn fold(value: f64, period: f64) -> f64 {
    let folded = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to exactly `period`
    if folded >= period {
        0.0
    } else {
        folded
    }
}

/// Integer part of a coordinate reduced to a table index
fn lattice_index(value: f64) -> i32 {
    (value.floor() as i64).rem_euclid(LATTICE_PERIOD) as i32
}

/// Perlin noise generator over a fixed permutation table.
///
/// Every method takes `&self`; the same inputs always produce the same output.
#[derive(Clone, Debug, Default)]
pub struct PerlinNoise {
    permutation: PermutationTable,
}

impl PerlinNoise {
    /// Create a generator with the reference permutation
    pub fn new() -> Self {
        Self {
            permutation: PermutationTable::new(),
        }
    }

    /// Sample noise at a point, honoring its tiling period
    pub fn sample(&self, point: NoisePoint) -> f64 {
        let p = point.position;
        self.noise(p.x, p.y, p.z, point.repeat)
    }

    /// Single-octave noise in `[0, 1]`
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Sample position in lattice units
    /// * `repeat` - Tiling period along every axis; `0` or less disables tiling
    pub fn noise(&self, x: f64, y: f64, z: f64, repeat: i32) -> f64 {
        let (x, y, z) = if repeat > 0 {
            let period = repeat as f64;
            (fold(x, period), fold(y, period), fold(z, period))
        } else {
            (x, y, z)
        };

        let xi = lattice_index(x);
        let yi = lattice_index(y);
        let zi = lattice_index(z);

        // Offsets inside the unit cell
        let xd = x - x.floor();
        let yd = y - y.floor();
        let zd = z - z.floor();

        let u = fade(xd);
        let v = fade(yd);
        let w = fade(zd);

        let xi1 = increment(xi, repeat);
        let yi1 = increment(yi, repeat);
        let zi1 = increment(zi, repeat);

        let aaa = self.hash(xi, yi, zi);
        let aba = self.hash(xi, yi1, zi);
        let aab = self.hash(xi, yi, zi1);
        let abb = self.hash(xi, yi1, zi1);
        let baa = self.hash(xi1, yi, zi);
        let bba = self.hash(xi1, yi1, zi);
        let bab = self.hash(xi1, yi, zi1);
        let bbb = self.hash(xi1, yi1, zi1);

        // Near z face
        let x1 = lerp(
            gradient(aaa, xd, yd, zd),
            gradient(baa, xd - 1.0, yd, zd),
            u,
        );
        let x2 = lerp(
            gradient(aba, xd, yd - 1.0, zd),
            gradient(bba, xd - 1.0, yd - 1.0, zd),
            u,
        );
        let y1 = lerp(x1, x2, v);

        // Far z face
        let x1 = lerp(
            gradient(aab, xd, yd, zd - 1.0),
            gradient(bab, xd - 1.0, yd, zd - 1.0),
            u,
        );
        let x2 = lerp(
            gradient(abb, xd, yd - 1.0, zd - 1.0),
            gradient(bbb, xd - 1.0, yd - 1.0, zd - 1.0),
            u,
        );
        let y2 = lerp(x1, x2, v);

        (lerp(y1, y2, w) + 1.0) / 2.0
    }

    /// Sum `octaves` layers of untiled noise, normalized back to `[0, 1]`
    ///
    /// Frequency doubles and amplitude is multiplied by `persistence` per layer.
    /// With `octaves <= 0` nothing is accumulated and the result is NaN.
    pub fn octaves(&self, x: f64, y: f64, z: f64, octaves: i32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.noise(x * frequency, y * frequency, z * frequency, 0) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        total / max_amplitude
    }

    /// Chained table lookup for one lattice corner
    #[inline]
    fn hash(&self, x: i32, y: i32, z: i32) -> usize {
        let p = &self.permutation;
        p.get(p.get(p.get(x as usize) + y as usize) + z as usize)
    }
}
