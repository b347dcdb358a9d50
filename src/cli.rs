//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{ConfigError, SceneConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "perlin-fog")]
#[command(about = "Generate Perlin noise fog textures as PNG files", long_about = None)]
pub struct Args {
    /// Scene configuration file (TOML); defaults reproduce the original scene
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Texture width (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Texture height (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Noise layer repeat periods, e.g. 4,8,16,32
    #[arg(long, value_name = "REPEATS", value_delimiter = ',')]
    pub layers: Option<Vec<i32>>,

    /// Base texture color, e.g. 0,0,200
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    pub base_color: Option<[u8; 3]>,

    /// Output directory for the PNG files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Load the scene file (if any) and apply command-line overrides
    pub fn scene(&self) -> Result<SceneConfig, ConfigError> {
        let mut scene = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(width) = self.width {
            scene.textures.width = width;
        }
        if let Some(height) = self.height {
            scene.textures.height = height;
        }
        if let Some(repeats) = &self.layers {
            scene.textures = scene.textures.with_repeats(repeats);
        }
        if let Some(color) = self.base_color {
            scene.textures.base_color = color;
        }
        if let Some(output) = &self.output {
            scene.export.output_dir = output.clone();
        }

        Ok(scene)
    }
}

/// Parse `R,G,B` into three bytes
fn parse_color(value: &str) -> Result<[u8; 3], String> {
    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color channel in '{}': {}", value, e))?;

    match channels[..] {
        [r, g, b] => Ok([r, g, b]),
        _ => Err(format!(
            "expected three comma-separated channels, got {}",
            channels.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_default_scene() {
        let args = Args::try_parse_from(["perlin-fog"]).unwrap();
        assert_eq!(args.scene().unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "perlin-fog",
            "--width",
            "64",
            "--height",
            "32",
            "--layers",
            "2,6",
            "--base-color",
            "10, 20, 30",
            "-o",
            "out",
        ])
        .unwrap();

        let scene = args.scene().unwrap();
        assert_eq!(scene.textures.width, 64);
        assert_eq!(scene.textures.height, 32);
        assert_eq!(scene.textures.base_color, [10, 20, 30]);
        let repeats: Vec<i32> = scene.textures.layers.iter().map(|l| l.repeat).collect();
        assert_eq!(repeats, vec![2, 6]);
        assert_eq!(scene.export.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        std::fs::write(&path, "[textures]\nwidth = 100\nheight = 50\n").unwrap();

        let args = Args::try_parse_from([
            "perlin-fog",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "75",
        ])
        .unwrap();

        let scene = args.scene().unwrap();
        assert_eq!(scene.textures.width, 100);
        assert_eq!(scene.textures.height, 75);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("0,0,200"), Ok([0, 0, 200]));
        assert!(parse_color("0,0").is_err());
        assert!(parse_color("0,0,256").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_bad_color_is_rejected_by_clap() {
        assert!(Args::try_parse_from(["perlin-fog", "--base-color", "1,2"]).is_err());
    }
}
