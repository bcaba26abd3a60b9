//! Raster logo assets
//!
//! Badges assume an opaque background, so any transparency is flattened
//! onto white before the pixels reach the PDF. Whatever the source color
//! mode, the result is a plain 8-bit RGB buffer.

use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::error::Result;

/// A decoded raster logo, always opaque 8-bit RGB
#[derive(Debug, Clone)]
pub struct RasterLogo {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples, top row first
    pub pixels: RgbImage,
}

impl RasterLogo {
    /// Decode a raster file (PNG, JPEG, GIF) into an opaque RGB logo
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)?;
        Ok(Self::from_image(decoded))
    }

    /// Flatten a decoded image onto an opaque white background
    pub fn from_image(decoded: DynamicImage) -> Self {
        let pixels = match decoded {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => flatten_onto_white(other.into_rgba8()),
        };
        Self {
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        }
    }

    /// Raw RGB bytes for embedding as a PDF image XObject
    pub fn raw_rgb(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// Alpha-blend every pixel onto white: `result = a*px + (1-a)*255`
fn flatten_onto_white(rgba: image::RgbaImage) -> RgbImage {
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u16;
        let blend = |channel: u8| -> u8 {
            ((channel as u16 * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        out.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_fully_transparent_becomes_white() {
        let mut rgba = RgbaImage::new(2, 2);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        let logo = RasterLogo::from_image(DynamicImage::ImageRgba8(rgba));
        assert_eq!(logo.pixels.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_opaque_pixels_unchanged() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        let logo = RasterLogo::from_image(DynamicImage::ImageRgba8(rgba));
        assert_eq!(logo.pixels.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_half_alpha_blends_toward_white() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 128]));
        let logo = RasterLogo::from_image(DynamicImage::ImageRgba8(rgba));
        let [r, g, b] = logo.pixels.get_pixel(0, 0).0;
        // Black at ~50% alpha lands near mid-grey
        for channel in [r, g, b] {
            assert!((120..=135).contains(&channel), "channel {} out of range", channel);
        }
    }

    #[test]
    fn test_greyscale_source_converted_to_rgb() {
        let grey = image::GrayImage::from_pixel(3, 2, image::Luma([77]));
        let logo = RasterLogo::from_image(DynamicImage::ImageLuma8(grey));
        assert_eq!(logo.width, 3);
        assert_eq!(logo.height, 2);
        assert_eq!(logo.pixels.get_pixel(0, 0).0, [77, 77, 77]);
        assert_eq!(logo.raw_rgb().len(), 3 * 2 * 3);
    }
}
