//! Pixel layouts shared with the GPU upload path.

use bytemuck::{Pod, Zeroable};

/// Byte layout of a texture buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Three 8-bit channels
    Rgb8,
    /// Four 8-bit channels
    Rgba8,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Solid texture pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Noise texture pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Same value in all three color channels
    pub const fn gray(value: u8, alpha: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
            a: alpha,
        }
    }

    /// Extend an RGB pixel with the given alpha
    pub const fn from_rgb(rgb: Rgb8, alpha: u8) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: alpha,
        }
    }
}

/// Map a `[0, 1]` noise value onto a byte, truncating like an integer cast
///
/// Out-of-range values saturate and NaN maps to 0.
#[inline]
pub fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_sizes_match_format() {
        assert_eq!(std::mem::size_of::<Rgb8>(), PixelFormat::Rgb8.bytes_per_pixel());
        assert_eq!(std::mem::size_of::<Rgba8>(), PixelFormat::Rgba8.bytes_per_pixel());
    }

    #[test]
    fn test_channel_order() {
        let pixel = Rgba8::from_rgb(Rgb8::new(1, 2, 3), 4);
        assert_eq!(bytemuck::bytes_of(&pixel), &[1, 2, 3, 4]);
        assert_eq!(bytemuck::bytes_of(&Rgba8::gray(9, 0)), &[9, 9, 9, 0]);
    }

    #[test]
    fn test_unit_to_byte() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(0.5), 127);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(1.5), 255);
        assert_eq!(unit_to_byte(-0.2), 0);
        assert_eq!(unit_to_byte(f64::NAN), 0);
    }
}
