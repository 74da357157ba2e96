// Author: Dustin Pilgrim
// License: MIT

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, ImageFormat, ImageReader};

use babymagic_core::{EncodedImage, ImagePayload, NaturalSize};

use crate::error::{CropError, Result};

/// Raw image held by an editing session.
///
/// Only the header is parsed on ingestion; the full decode happens when the crop
/// is rasterized, so a corrupt body surfaces as a failed confirm.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Vec<u8>,
    natural: NaturalSize,
    format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn from_payload(payload: &ImagePayload) -> Result<Self> {
        match payload {
            ImagePayload::Bytes(bytes) => Self::from_bytes(bytes.clone()),
            ImagePayload::DataUrl(url) => Self::from_bytes(decode_data_url(url)?),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(CropError::EmptyPayload);
        }

        let reader = ImageReader::new(Cursor::new(&bytes[..])).with_guessed_format()?;
        let format = reader.format();
        let (width, height) = reader.into_dimensions()?;

        Ok(Self {
            bytes,
            natural: NaturalSize { width, height },
            format,
        })
    }

    pub fn from_encoded(image: &EncodedImage) -> Result<Self> {
        Self::from_bytes(image.bytes.clone())
    }

    pub fn natural(&self) -> NaturalSize {
        self.natural
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn decode(&self) -> Result<DynamicImage> {
        let reader = ImageReader::new(Cursor::new(&self.bytes[..])).with_guessed_format()?;
        Ok(reader.decode()?)
    }
}

/// Payload of a `data:image/<fmt>;base64,<data>` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url.trim().strip_prefix("data:").ok_or(CropError::DataUrl)?;
    let (meta, data) = rest.split_once(',').ok_or(CropError::DataUrl)?;
    let mime = meta.strip_suffix(";base64").ok_or(CropError::DataUrl)?;

    if !mime.starts_with("image/") {
        return Err(CropError::DataUrl);
    }

    let bytes = BASE64.decode(data.trim())?;
    if bytes.is_empty() {
        return Err(CropError::EmptyPayload);
    }
    Ok(bytes)
}

/// Self-contained `data:` URL for an encoded crop.
pub fn to_data_url(image: &EncodedImage) -> String {
    format!("data:{};base64,{}", image.mime, BASE64.encode(&image.bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 90]));
        let mut out = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn reads_natural_size_from_header() {
        let src = SourceImage::from_bytes(png(40, 30)).unwrap();
        assert_eq!(src.natural(), NaturalSize { width: 40, height: 30 });
        assert_eq!(src.format(), Some(ImageFormat::Png));
    }

    #[test]
    fn accepts_data_urls() {
        let url = format!("data:image/png;base64,{}", BASE64.encode(png(7, 9)));
        let src = SourceImage::from_payload(&ImagePayload::DataUrl(url)).unwrap();
        assert_eq!(src.natural(), NaturalSize { width: 7, height: 9 });
    }

    #[test]
    fn rejects_non_image_data_urls() {
        assert!(matches!(
            decode_data_url("data:text/plain;base64,aGVsbG8="),
            Err(CropError::DataUrl)
        ));
        assert!(matches!(decode_data_url("hello"), Err(CropError::DataUrl)));
        assert!(matches!(
            decode_data_url("data:image/png;base64,@@@"),
            Err(CropError::Base64(_))
        ));
    }

    #[test]
    fn rejects_empty_and_garbage_bytes() {
        assert!(matches!(SourceImage::from_bytes(Vec::new()), Err(CropError::EmptyPayload)));
        assert!(SourceImage::from_bytes(b"definitely not an image".to_vec()).is_err());
    }

    #[test]
    fn data_url_round_trips_bytes() {
        let image = EncodedImage {
            mime: "image/jpeg".into(),
            width: 1,
            height: 1,
            bytes: vec![1, 2, 3, 4],
        };
        let url = to_data_url(&image);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_data_url(&url).unwrap(), vec![1, 2, 3, 4]);
    }
}
