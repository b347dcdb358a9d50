//! Texture synthesis from Perlin noise.
//!
//! Textures are flat, row-major byte buffers (the column index varies fastest)
//! ready to be handed to a GPU upload or an image encoder.

mod pixel;
mod synth;

// Re-export public types
pub use pixel::{unit_to_byte, PixelFormat, Rgb8, Rgba8};
pub use synth::{LayerTexture, TextureSet, TextureSynthesizer};

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while allocating or wrapping texture buffers
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture {width}x{height} with {bytes_per_pixel} bytes per pixel overflows usize")]
    DimensionOverflow {
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
    },
    #[error("failed to allocate texture buffer: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("buffer holds {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// An owned 2D texture buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Texture {
    /// Wrap an existing buffer, checking its length against the dimensions
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, TextureError> {
        let expected = byte_len(width, height, format)?;
        if data.len() != expected {
            return Err(TextureError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Reserve an empty buffer large enough for the whole texture
    pub(crate) fn reserve(
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Vec<u8>, TextureError> {
        let len = byte_len(width, height, format)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        Ok(data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Number of bytes in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up the texture and keep its buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Bytes of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        self.data.get(start..start + bpp)
    }

    /// Typed view of an RGB8 buffer
    pub fn rgb_pixels(&self) -> Option<&[Rgb8]> {
        match self.format {
            PixelFormat::Rgb8 => Some(bytemuck::cast_slice(&self.data)),
            PixelFormat::Rgba8 => None,
        }
    }

    /// Typed view of an RGBA8 buffer
    pub fn rgba_pixels(&self) -> Option<&[Rgba8]> {
        match self.format {
            PixelFormat::Rgba8 => Some(bytemuck::cast_slice(&self.data)),
            PixelFormat::Rgb8 => None,
        }
    }
}

/// Total byte count for a texture, or an overflow error
fn byte_len(width: u32, height: u32, format: PixelFormat) -> Result<usize, TextureError> {
    let bytes_per_pixel = format.bytes_per_pixel();
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
        .ok_or(TextureError::DimensionOverflow {
            width,
            height,
            bytes_per_pixel,
        })
}
