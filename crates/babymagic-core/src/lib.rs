// Author: Dustin Pilgrim
// License: MIT

pub mod aspect;
pub mod error;
pub mod handle;
pub mod payload;
pub mod protocol;
pub mod rect;
pub mod surface;

pub use aspect::{AspectConstraint, AspectPreset};
pub use error::CoreError;
pub use handle::{DragKind, Edges, Gesture};
pub use payload::{EncodedImage, ImagePayload, NaturalSize};
pub use protocol::{EditorEvent, EditorRequest, EditorResponse};
pub use rect::{CropRect, MIN_SIZE};
pub use surface::{Point, Surface};
