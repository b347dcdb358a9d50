//! Texture set configuration: canvas size, base color and noise layers.

use serde::{Deserialize, Serialize};

/// One noise texture in the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Noise cells across the texture, also used as the tiling period
    /// Original scene: 4, 8, 16, 32
    pub repeat: i32,

    /// Alpha written to every pixel
    /// 0 = fully transparent, the renderer blends on the gray channels
    pub alpha: u8,
}

impl NoiseLayer {
    pub fn new(repeat: i32) -> Self {
        Self {
            repeat,
            ..Default::default()
        }
    }
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            repeat: 4,
            alpha: 0,
        }
    }
}

/// Everything needed to build a [`crate::texture::TextureSet`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSetConfig {
    /// Texture width (pixels)
    pub width: u32,

    /// Texture height (pixels)
    pub height: u32,

    /// Solid base texture color (RGB bytes)
    pub base_color: [u8; 3],

    /// Noise textures, generated in this order
    pub layers: Vec<NoiseLayer>,
}

impl Default for TextureSetConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            base_color: [0, 0, 200], // Blue
            layers: [4, 8, 16, 32].into_iter().map(NoiseLayer::new).collect(),
        }
    }
}

impl TextureSetConfig {
    /// Replace the layer list with one default layer per repeat period
    pub fn with_repeats(mut self, repeats: &[i32]) -> Self {
        self.layers = repeats.iter().copied().map(NoiseLayer::new).collect();
        self
    }
}
