// SPDX-License-Identifier: MPL-2.0
//! Decoded images and the pixel operations the viewer needs.

use crate::domain::viewer::PixelRegion;
use crate::error::MediaLoadError;
use iced::widget::image;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, RgbaImage};
use std::sync::Arc;

/// Longest edge of grid thumbnails, in pixels.
pub const THUMBNAIL_EDGE: u32 = 480;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// RGBA pixels kept for magnifier crops.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Decodes an encoded image (JPEG, PNG, WebP...).
    pub fn decode(bytes: &[u8]) -> Result<Self, MediaLoadError> {
        let decoded =
            image_rs::load_from_memory(bytes).map_err(|e| MediaLoadError::Decode(e.to_string()))?;
        Ok(Self::from_dynamic(decoded))
    }

    fn from_dynamic(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_vec())
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Size in bytes of the decoded pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba_bytes.len()
    }

    /// Cuts `region` out of the image and scales it to the image's aspect
    /// ratio, fitted inside `max_width` x `max_height` and never larger than
    /// the source.
    ///
    /// Returns `None` for an empty region or if the region leaves the image.
    #[must_use]
    pub fn magnified(
        &self,
        region: PixelRegion,
        max_width: u32,
        max_height: u32,
    ) -> Option<Self> {
        if region.width == 0 || region.height == 0 {
            return None;
        }
        if region.x.checked_add(region.width)? > self.width
            || region.y.checked_add(region.height)? > self.height
        {
            return None;
        }

        // Copy only the rows of the region.
        let stride = self.width as usize * 4;
        let row_start = region.x as usize * 4;
        let row_len = region.width as usize * 4;
        let mut pixels = Vec::with_capacity(row_len * region.height as usize);
        for row in region.y..region.y + region.height {
            let offset = row as usize * stride + row_start;
            pixels.extend_from_slice(self.rgba_bytes.get(offset..offset + row_len)?);
        }
        let cropped = RgbaImage::from_raw(region.width, region.height, pixels)?;

        let (width, height) = fit_within(self.width, self.height, max_width, max_height);
        let scaled = image_rs::imageops::resize(&cropped, width, height, FilterType::Triangle);
        Some(Self::from_rgba(width, height, scaled.into_vec()))
    }

    /// Downscales the image so its longest edge is at most `max_edge`.
    ///
    /// Images already small enough are returned unchanged.
    #[must_use]
    pub fn thumbnail(&self, max_edge: u32) -> Self {
        if self.width <= max_edge && self.height <= max_edge {
            return self.clone();
        }
        match self.to_rgba_image() {
            Some(source) => {
                Self::from_dynamic(DynamicImage::ImageRgba8(source).thumbnail(max_edge, max_edge))
            }
            None => self.clone(),
        }
    }

    fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (max_width as f32 / width as f32)
        .min(max_height as f32 / height as f32)
        .min(1.0);
    let fitted = |extent: u32| ((extent as f32 * scale).round() as u32).max(1);
    (fitted(width), fitted(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> ImageData {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let value = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[value, value, value, 255]);
            }
        }
        ImageData::from_rgba(width, height, pixels)
    }

    fn encode_png(image: &ImageData) -> Vec<u8> {
        let buffer = RgbaImage::from_raw(image.width, image.height, image.rgba_bytes().to_vec())
            .expect("valid buffer");
        let mut bytes = std::io::Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, image_rs::ImageFormat::Png)
            .expect("png encoding");
        bytes.into_inner()
    }

    #[test]
    fn decode_round_trips_dimensions() {
        let source = checkerboard(8, 4);
        let decoded = ImageData::decode(&encode_png(&source)).expect("decodes");
        assert_eq!((decoded.width, decoded.height), (8, 4));
        assert_eq!(decoded.size_bytes(), 8 * 4 * 4);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = ImageData::decode(b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, MediaLoadError::Decode(_)));
    }

    #[test]
    fn magnified_fits_the_display_box() {
        let image = checkerboard(20, 10);
        let region = PixelRegion {
            x: 4,
            y: 2,
            width: 8,
            height: 4,
        };

        let zoomed = image.magnified(region, 20, 10).expect("region inside image");
        assert_eq!((zoomed.width, zoomed.height), (20, 10));

        let boxed = image.magnified(region, 10, 10).expect("region inside image");
        assert_eq!((boxed.width, boxed.height), (10, 5));

        // Never upscaled past the source size.
        let large = image.magnified(region, 400, 400).expect("region inside image");
        assert_eq!((large.width, large.height), (20, 10));
    }

    #[test]
    fn magnified_copies_region_pixels() {
        let mut pixels = vec![0_u8; 4 * 4 * 4];
        // Pixel (2, 1) is red.
        let offset = (4 + 2) * 4;
        pixels[offset..offset + 4].copy_from_slice(&[255, 0, 0, 255]);
        let image = ImageData::from_rgba(4, 4, pixels);

        let zoomed = image
            .magnified(
                PixelRegion {
                    x: 2,
                    y: 1,
                    width: 1,
                    height: 1,
                },
                1,
                1,
            )
            .expect("region inside image");
        assert_eq!(zoomed.rgba_bytes(), &[255, 0, 0, 255]);
    }

    #[test]
    fn magnified_rejects_out_of_bounds_region() {
        let image = checkerboard(10, 10);
        let region = PixelRegion {
            x: 8,
            y: 0,
            width: 4,
            height: 4,
        };
        assert!(image.magnified(region, 10, 10).is_none());
        assert!(image
            .magnified(
                PixelRegion {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 0,
                },
                10,
                10,
            )
            .is_none());
    }

    #[test]
    fn thumbnail_bounds_longest_edge() {
        let image = checkerboard(64, 32);
        let thumb = image.thumbnail(16);
        assert_eq!((thumb.width, thumb.height), (16, 8));

        let small = checkerboard(8, 8).thumbnail(16);
        assert_eq!((small.width, small.height), (8, 8));
    }
}
