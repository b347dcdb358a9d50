//! Perlin Fog library - Perlin noise and the textures built from it

pub mod cli;
pub mod export;
pub mod gpu;
pub mod noise;
pub mod params;
pub mod texture;

pub use noise::{NoisePoint, PerlinNoise};
pub use texture::{PixelFormat, Texture, TextureError, TextureSynthesizer};
