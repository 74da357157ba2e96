// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CropError>;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image encode failed: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not an image data url")]
    DataUrl,

    #[error("image payload is empty")]
    EmptyPayload,

    #[error("no active editing session")]
    NoSession,

    #[error("no selected image to edit")]
    NoSelectedImage,

    #[error("a drag is already in progress")]
    DragInProgress,

    #[error("crop region is empty after clamping to {width}x{height}")]
    EmptyRegion { width: u32, height: u32 },
}
