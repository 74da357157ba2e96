// Author: Dustin Pilgrim
// License: MIT

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use babymagic_core::{CropRect, EncodedImage, NaturalSize};

use crate::error::{CropError, Result};
use crate::ingest::SourceImage;

pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const JPEG_MIME: &str = "image/jpeg";

/// Crop region in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Map the normalized rect onto the natural pixel grid.
///
/// Each field is scaled independently (x/width by natural width, y/height by
/// natural height) and rounded, then the size is trimmed to the image bounds.
pub fn pixel_region(rect: &CropRect, natural: NaturalSize) -> Result<PixelRegion> {
    let nw = natural.width as f64;
    let nh = natural.height as f64;

    let scale = |pct: f64, full: f64| (pct * full / 100.0).round().clamp(0.0, full) as u32;

    let x = scale(rect.x, nw);
    let y = scale(rect.y, nh);
    let width = scale(rect.width, nw).min(natural.width - x);
    let height = scale(rect.height, nh).min(natural.height - y);

    if width == 0 || height == 0 {
        return Err(CropError::EmptyRegion {
            width: natural.width,
            height: natural.height,
        });
    }

    Ok(PixelRegion {
        x,
        y,
        width,
        height,
    })
}

/// Copy `region` out of `image` into a raster of exactly the region's size.
pub fn crop_pixels(image: &DynamicImage, region: PixelRegion) -> RgbImage {
    image
        .crop_imm(region.x, region.y, region.width, region.height)
        .to_rgb8()
}

pub fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<EncodedImage> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
        .encode_image(rgb)
        .map_err(|e| CropError::Encode(e.to_string()))?;

    Ok(EncodedImage {
        mime: JPEG_MIME.to_string(),
        width: rgb.width(),
        height: rgb.height(),
        bytes,
    })
}

/// Decode the source, cut out `rect`, and re-encode it as JPEG.
///
/// No scaling and no letterboxing: the output is exactly the cropped region.
pub fn rasterize(source: &SourceImage, rect: &CropRect, quality: u8) -> Result<EncodedImage> {
    let image = source.decode()?;
    let natural = NaturalSize {
        width: image.width(),
        height: image.height(),
    };

    let region = pixel_region(rect, natural)?;
    eventline::debug!(
        "rasterize: {}x{} at ({},{}) from {}x{}",
        region.width,
        region.height,
        region.x,
        region.y,
        natural.width,
        natural.height
    );

    encode_jpeg(&crop_pixels(&image, region), quality)
}
