//! Parameter definitions with documented defaults.
//!
//! Defaults reproduce the original fog scene:
//! - 800x800 textures
//! - a blue solid base texture
//! - four noise layers tiling every 4, 8, 16 and 32 cells

mod export;
mod scene;
mod texture;

// Re-export all types
pub use export::ExportConfig;
pub use scene::{ConfigError, SceneConfig};
pub use texture::{NoiseLayer, TextureSetConfig};
