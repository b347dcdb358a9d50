//! Pixel loops turning noise samples into texture buffers.

use std::time::Instant;

use super::pixel::{unit_to_byte, PixelFormat, Rgb8, Rgba8};
use super::{Texture, TextureError};
use crate::noise::PerlinNoise;
use crate::params::{NoiseLayer, TextureSetConfig};

/// A noise texture together with the layer that produced it
#[derive(Debug, Clone)]
pub struct LayerTexture {
    pub layer: NoiseLayer,
    pub texture: Texture,
}

/// Solid base texture plus noise layers
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub base: Texture,
    pub layers: Vec<LayerTexture>,
}

/// Fills texture buffers from a Perlin noise generator
#[derive(Debug, Clone, Default)]
pub struct TextureSynthesizer {
    noise: PerlinNoise,
}

impl TextureSynthesizer {
    pub fn new() -> Self {
        Self {
            noise: PerlinNoise::new(),
        }
    }

    pub fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// Grayscale RGBA noise texture with a transparent alpha channel
    ///
    /// `octave_count` sets both how many noise cells span the texture and the
    /// tiling period, so the result wraps seamlessly at its edges.
    pub fn noise_texture(
        &self,
        width: u32,
        height: u32,
        octave_count: i32,
    ) -> Result<Texture, TextureError> {
        self.noise_texture_with(width, height, &NoiseLayer::new(octave_count))
    }

    /// Grayscale RGBA noise texture for a configured layer
    pub fn noise_texture_with(
        &self,
        width: u32,
        height: u32,
        layer: &NoiseLayer,
    ) -> Result<Texture, TextureError> {
        let start = Instant::now();
        let mut data = Texture::reserve(width, height, PixelFormat::Rgba8)?;

        let cells = layer.repeat as f64;
        for row in 0..height {
            let y = row as f64 / height as f64 * cells;
            for col in 0..width {
                let x = col as f64 / width as f64 * cells;
                let value = self.noise.noise(x, y, 0.0, layer.repeat);
                let pixel = Rgba8::gray(unit_to_byte(value), layer.alpha);
                data.extend_from_slice(bytemuck::bytes_of(&pixel));
            }
        }

        tracing::debug!(
            "Generated {}x{} noise texture (repeat {}) in {:.2}ms",
            width,
            height,
            layer.repeat,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Texture::from_raw(width, height, PixelFormat::Rgba8, data)
    }

    /// RGB texture filled with one color
    pub fn solid_texture(
        &self,
        width: u32,
        height: u32,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<Texture, TextureError> {
        let mut data = Texture::reserve(width, height, PixelFormat::Rgb8)?;
        let pixel = Rgb8::new(r, g, b);
        let pixel_count = width as usize * height as usize;
        for _ in 0..pixel_count {
            data.extend_from_slice(bytemuck::bytes_of(&pixel));
        }

        tracing::debug!(
            "Generated {}x{} solid texture ({}, {}, {})",
            width,
            height,
            r,
            g,
            b
        );

        Texture::from_raw(width, height, PixelFormat::Rgb8, data)
    }

    /// Build the base texture and every noise layer of a configuration
    pub fn texture_set(&self, config: &TextureSetConfig) -> Result<TextureSet, TextureError> {
        let [r, g, b] = config.base_color;
        let base = self.solid_texture(config.width, config.height, r, g, b)?;

        let layers = config
            .layers
            .iter()
            .map(|layer| {
                self.noise_texture_with(config.width, config.height, layer)
                    .map(|texture| LayerTexture {
                        layer: *layer,
                        texture,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TextureSet { base, layers })
    }
}
