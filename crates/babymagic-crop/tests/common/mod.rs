#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Pixel whose channels encode its own coordinates, so crops can be traced back.
pub fn coord_pixel(x: u32, y: u32) -> Rgb<u8> {
    Rgb([(x % 256) as u8, (y % 256) as u8, ((x / 256) * 16 + y / 256) as u8])
}

pub fn coord_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, coord_pixel)
}

/// Deterministic noise; compresses badly, which keeps the PNG body large.
pub fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x9E37_79B9;
    RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        };
        Rgb([next(), next(), next()])
    })
}

pub fn encode(img: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut out), format)
        .expect("encode fixture");
    out
}

pub fn png(img: RgbImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

/// Valid header, body cut short: dimensions can be read but the decode fails.
pub fn truncated_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = png(noise_image(width, height));
    bytes.truncate(bytes.len() / 2);
    bytes
}
