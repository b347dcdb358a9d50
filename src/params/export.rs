//! Output locations for exported textures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving the PNG files
    pub output_dir: PathBuf,

    /// File stem of the solid base texture
    pub base_name: String,

    /// File stem prefix of each noise layer, followed by `_<repeat>`
    pub layer_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("textures"),
            base_name: "base".to_string(),
            layer_prefix: "noise".to_string(),
        }
    }
}

impl ExportConfig {
    /// Base texture path
    pub fn base_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.base_name))
    }

    /// Noise layer path for a repeat period
    pub fn layer_path(&self, repeat: i32) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", self.layer_prefix, repeat))
    }
}
