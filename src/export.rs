//! PNG export of generated textures.

use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage};
use thiserror::Error;

use crate::params::ExportConfig;
use crate::texture::{PixelFormat, Texture, TextureError, TextureSet};

/// Errors that can occur during PNG export or import
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}

fn color_type(format: PixelFormat) -> ColorType {
    match format {
        PixelFormat::Rgb8 => ColorType::Rgb8,
        PixelFormat::Rgba8 => ColorType::Rgba8,
    }
}

/// Write a texture as an 8-bit RGB or RGBA PNG
pub fn save_png(texture: &Texture, path: &Path) -> Result<(), ExportError> {
    image::save_buffer_with_format(
        path,
        texture.as_bytes(),
        texture.width(),
        texture.height(),
        color_type(texture.format()),
        image::ImageFormat::Png,
    )?;
    tracing::info!(
        "Wrote {}x{} texture to {}",
        texture.width(),
        texture.height(),
        path.display()
    );
    Ok(())
}

/// Read a PNG back into a texture
///
/// RGB images stay RGB8; everything else is converted to RGBA8.
pub fn load_png(path: &Path) -> Result<Texture, ExportError> {
    let texture = match image::open(path)? {
        DynamicImage::ImageRgb8(img) => {
            let (width, height) = img.dimensions();
            Texture::from_raw(width, height, PixelFormat::Rgb8, img.into_raw())?
        }
        other => {
            let img = other.to_rgba8();
            let (width, height) = img.dimensions();
            Texture::from_raw(width, height, PixelFormat::Rgba8, img.into_raw())?
        }
    };
    Ok(texture)
}

/// Write the base texture and each noise layer into the export directory
///
/// # Returns
/// Paths written, base texture first
pub fn save_texture_set(
    set: &TextureSet,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(set.layers.len() + 1);

    let base_path = config.base_path();
    save_png(&set.base, &base_path)?;
    written.push(base_path);

    for layer in &set.layers {
        let path = config.layer_path(layer.layer.repeat);
        save_png(&layer.texture, &path)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TextureSetConfig;
    use crate::texture::TextureSynthesizer;

    #[test]
    fn test_noise_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");

        let texture = TextureSynthesizer::new().noise_texture(16, 8, 4).unwrap();
        save_png(&texture, &path).unwrap();

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.format(), PixelFormat::Rgba8);
        assert_eq!((loaded.width(), loaded.height()), (16, 8));
        assert_eq!(loaded, texture);
    }

    #[test]
    fn test_solid_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");

        let texture = TextureSynthesizer::new().solid_texture(5, 3, 0, 0, 200).unwrap();
        save_png(&texture, &path).unwrap();

        assert_eq!(load_png(&path).unwrap(), texture);
    }

    #[test]
    fn test_save_texture_set() {
        let dir = tempfile::tempdir().unwrap();
        let export = ExportConfig {
            output_dir: dir.path().join("nested"),
            ..Default::default()
        };
        let config = TextureSetConfig {
            width: 4,
            height: 4,
            ..Default::default()
        }
        .with_repeats(&[2, 8]);

        let set = TextureSynthesizer::new().texture_set(&config).unwrap();
        let written = save_texture_set(&set, &export).unwrap();

        assert_eq!(
            written,
            vec![
                export.base_path(),
                export.layer_path(2),
                export.layer_path(8)
            ]
        );
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_png(Path::new("no/such/texture.png")).unwrap_err();
        assert!(matches!(err, ExportError::Image(_)));
    }
}
