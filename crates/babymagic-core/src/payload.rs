// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// True pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

/// Raw image handed to the editor by the input provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImagePayload {
    /// Encoded file contents (PNG, JPEG, WebP, ...).
    Bytes(Vec<u8>),

    /// `data:image/<fmt>;base64,<...>` as produced by a browser file reader.
    DataUrl(String),
}

/// Result of a confirmed crop, ready for display, upload or storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub mime: String,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}
