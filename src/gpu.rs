//! Upload of generated textures to wgpu.
//!
//! wgpu has no three-channel 8-bit format, so RGB textures are widened to
//! RGBA with an opaque alpha before upload.
//!
//! [`upload_texture`] needs a live `Device` and `Queue` and is not covered by
//! the unit tests; the byte, layout and descriptor helpers it is built from are.

use std::borrow::Cow;

use crate::texture::{Rgba8, Texture};

/// Format every uploaded texture uses
pub const UPLOAD_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

const BYTES_PER_TEXEL: u32 = 4;

/// RGBA8 bytes ready for `Queue::write_texture`
///
/// RGBA textures are borrowed as-is; RGB textures are copied with alpha 255.
pub fn rgba_bytes(texture: &Texture) -> Cow<'_, [u8]> {
    match texture.rgb_pixels() {
        Some(rgb) => {
            let widened: Vec<Rgba8> = rgb.iter().map(|&p| Rgba8::from_rgb(p, u8::MAX)).collect();
            Cow::Owned(bytemuck::cast_slice(&widened).to_vec())
        }
        None => Cow::Borrowed(texture.as_bytes()),
    }
}

/// Texture size as a single-layer extent
pub fn extent(texture: &Texture) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: texture.width(),
        height: texture.height(),
        depth_or_array_layers: 1,
    }
}

/// Row layout of the upload data
///
/// `write_texture` does not need the 256-byte row alignment that
/// buffer copies require, so rows are tightly packed.
pub fn data_layout(texture: &Texture) -> wgpu::ImageDataLayout {
    wgpu::ImageDataLayout {
        offset: 0,
        bytes_per_row: Some(texture.width() * BYTES_PER_TEXEL),
        rows_per_image: Some(texture.height()),
    }
}

/// Descriptor for a sampled 2D texture matching `texture`
pub fn descriptor<'a>(texture: &Texture, label: Option<&'a str>) -> wgpu::TextureDescriptor<'a> {
    wgpu::TextureDescriptor {
        label,
        size: extent(texture),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: UPLOAD_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    }
}

/// Create a GPU texture and copy the pixel data into it
pub fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &Texture,
    label: Option<&str>,
) -> wgpu::Texture {
    let gpu_texture = device.create_texture(&descriptor(texture, label));

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &gpu_texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &rgba_bytes(texture),
        data_layout(texture),
        extent(texture),
    );

    tracing::debug!(
        "Uploaded {}x{} {:?} texture{}",
        texture.width(),
        texture.height(),
        texture.format(),
        label.map(|l| format!(" '{}'", l)).unwrap_or_default()
    );

    gpu_texture
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{PixelFormat, TextureSynthesizer};

    #[test]
    fn test_rgb_is_widened_with_opaque_alpha() {
        let texture = TextureSynthesizer::new().solid_texture(3, 2, 10, 20, 30).unwrap();
        assert_eq!(texture.format(), PixelFormat::Rgb8);

        let bytes = rgba_bytes(&texture);
        assert!(matches!(bytes, Cow::Owned(_)));
        assert_eq!(bytes.len(), 3 * 2 * 4);
        for pixel in bytes.chunks_exact(4) {
            assert_eq!(pixel, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_rgba_is_borrowed() {
        let texture = TextureSynthesizer::new().noise_texture(4, 4, 2).unwrap();
        assert_eq!(texture.format(), PixelFormat::Rgba8);

        let bytes = rgba_bytes(&texture);
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(&*bytes, texture.as_bytes());
    }

    #[test]
    fn test_layout_and_descriptor() {
        let texture = TextureSynthesizer::new().solid_texture(7, 5, 0, 0, 200).unwrap();

        let layout = data_layout(&texture);
        assert_eq!(layout.bytes_per_row, Some(28));
        assert_eq!(layout.rows_per_image, Some(5));

        let desc = descriptor(&texture, Some("base"));
        assert_eq!(desc.label, Some("base"));
        assert_eq!(desc.size.width, 7);
        assert_eq!(desc.size.height, 5);
        assert_eq!(desc.size.depth_or_array_layers, 1);
        assert_eq!(desc.format, UPLOAD_FORMAT);
        assert!(desc.usage.contains(wgpu::TextureUsages::COPY_DST));
    }
}
