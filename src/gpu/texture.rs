//! Texture decoding, sampled-texture upload and the depth attachment.
//!
//! Decoding is GPU-free: [`DecodedImage`] holds the flipped RGBA bytes and
//! can be tested without a device.

use std::fmt;
use std::path::{Path, PathBuf};

use super::pipeline_helpers;

/// Errors raised while loading a texture.
#[derive(Debug)]
pub enum TextureError {
    /// The file could not be found or read.
    NotFound(PathBuf),
    /// The image decoder rejected the data.
    Decode(image::ImageError),
    /// Decoded image has a channel count other than 3 or 4.
    UnsupportedChannels(u8),
    /// Either side is zero or exceeds the device's 2D texture limit.
    BadExtent {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Largest side the device accepts.
        max: u32,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "texture not found: {}", path.display()),
            Self::Decode(e) => write!(f, "texture decode failed: {e}"),
            Self::UnsupportedChannels(n) => {
                write!(f, "unsupported texture channel count {n} (expected 3 or 4)")
            }
            Self::BadExtent { width, height, max } => {
                write!(f, "texture size {width}x{height} outside 1..={max}")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::NotFound(_) | Self::UnsupportedChannels(_) | Self::BadExtent { .. } => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

/// A decoded texture ready for upload: RGBA8, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel count of the source image: 3 (RGB) or 4 (RGBA).
    pub channels: u8,
    /// RGBA bytes, `width * height * 4` long. RGB sources get alpha 255.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Decode an encoded image (PNG or JPEG) and flip it vertically so the
    /// first row is the bottom of the picture.
    ///
    /// # Errors
    ///
    /// [`TextureError::Decode`] if the bytes are not a supported image,
    /// [`TextureError::UnsupportedChannels`] for grayscale images.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?;
        let channels = img.color().channel_count();
        if !matches!(channels, 3 | 4) {
            return Err(TextureError::UnsupportedChannels(channels));
        }
        let rgba = img.flipv().to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            channels,
            rgba: rgba.into_raw(),
        })
    }

    /// Read and decode an image file.
    ///
    /// # Errors
    ///
    /// [`TextureError::NotFound`] if the file cannot be read, otherwise as
    /// [`decode_bytes`](Self::decode_bytes).
    pub fn decode_file(path: &Path) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path).map_err(|_| TextureError::NotFound(path.to_path_buf()))?;
        Self::decode_bytes(&bytes)
    }

    /// Check both sides against `1..=max_dimension`.
    ///
    /// # Errors
    ///
    /// [`TextureError::BadExtent`] if either side is out of range.
    pub fn check_extent(&self, max_dimension: u32) -> Result<(), TextureError> {
        let fits = |side: u32| (1..=max_dimension).contains(&side);
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(TextureError::BadExtent {
                width: self.width,
                height: self.height,
                max: max_dimension,
            })
        }
    }
}

/// A sampled scene texture with its view, sampler and bind group.
pub struct GpuTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Repeat + Linear sampler.
    pub sampler: wgpu::Sampler,
    /// Bind group for `@group(2)` of the lit pipeline.
    pub bind_group: wgpu::BindGroup,
}

impl GpuTexture {
    /// Upload `image` as an sRGB texture and bind it against `layout`.
    ///
    /// # Errors
    ///
    /// [`TextureError::BadExtent`] if the image does not fit the device's
    /// 2D texture limit.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &DecodedImage,
        label: &str,
    ) -> Result<Self, TextureError> {
        image.check_extent(device.limits().max_texture_dimension_2d)?;

        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = pipeline_helpers::repeat_sampler(device, label);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Ok(Self {
            texture,
            view,
            sampler,
            bind_group,
        })
    }
}

/// Depth attachment sized to the surface.
pub struct DepthTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTarget {
    /// Depth format shared by every pipeline.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Target"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, RgbImage, RgbaImage};

    use super::*;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn grayscale_png_fails_to_load() {
        let gray = encode_png(DynamicImage::ImageLuma8(GrayImage::new(2, 2)));
        assert!(matches!(
            DecodedImage::decode_bytes(&gray),
            Err(TextureError::UnsupportedChannels(1))
        ));

        let gray_alpha = encode_png(DynamicImage::ImageLumaA8(GrayAlphaImage::new(2, 2)));
        assert!(matches!(
            DecodedImage::decode_bytes(&gray_alpha),
            Err(TextureError::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn rgb_png_decodes_flipped_with_opaque_alpha() {
        let mut img = RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        let decoded = DecodedImage::decode_bytes(&encode_png(DynamicImage::ImageRgb8(img))).unwrap();

        assert_eq!((decoded.width, decoded.height, decoded.channels), (1, 2, 3));
        // Bottom row first after the flip.
        assert_eq!(decoded.rgba, vec![0, 0, 255, 255, 255, 0, 0, 255]);
    }

    #[test]
    fn rgba_png_keeps_alpha_and_odd_row_count_flips() {
        let mut img = RgbaImage::new(1, 3);
        for y in 0..3 {
            img.put_pixel(0, y, image::Rgba([y as u8, 0, 0, 10 + y as u8]));
        }
        let decoded =
            DecodedImage::decode_bytes(&encode_png(DynamicImage::ImageRgba8(img))).unwrap();

        assert_eq!(decoded.channels, 4);
        assert_eq!(decoded.rgba, vec![2, 0, 0, 12, 1, 0, 0, 11, 0, 0, 0, 10]);
    }

    #[test]
    fn decoded_buffer_matches_extent() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(3, 5));
        let decoded = DecodedImage::decode_bytes(&encode_png(img)).unwrap();
        assert_eq!(
            decoded.rgba.len(),
            decoded.width as usize * decoded.height as usize * 4
        );
    }

    #[test]
    fn oversized_image_is_rejected_before_upload() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 2));
        let decoded = DecodedImage::decode_bytes(&encode_png(img)).unwrap();

        assert!(decoded.check_extent(4).is_ok());
        let err = decoded.check_extent(3).unwrap_err();
        assert!(matches!(
            err,
            TextureError::BadExtent {
                width: 4,
                height: 2,
                max: 3
            }
        ));
        assert!(err.to_string().contains("4x2"));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        assert!(matches!(
            DecodedImage::decode_bytes(b"not an image"),
            Err(TextureError::Decode(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("definitely/not/here/T_granite.png");
        let err = DecodedImage::decode_file(path).unwrap_err();
        assert!(matches!(&err, TextureError::NotFound(p) if p == path));
        assert!(err.to_string().contains("T_granite.png"));
    }
}
