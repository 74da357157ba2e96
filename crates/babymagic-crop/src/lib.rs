// Author: Dustin Pilgrim
// License: MIT

pub mod aspect;
pub mod drag;
pub mod editor;
pub mod error;
pub mod ingest;
pub mod model;
pub mod raster;
pub mod session;

pub use drag::{DragController, DragSession};
pub use editor::CropEditor;
pub use error::{CropError, Result};
pub use ingest::SourceImage;
pub use model::CropModel;
pub use raster::{DEFAULT_JPEG_QUALITY, rasterize};
pub use session::EditorState;
