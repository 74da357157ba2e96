// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::{AspectConstraint, CropRect, DragKind, EncodedImage, ImagePayload, NaturalSize, Point, Surface};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorRequest {
    /// A new file was picked; replaces any open session.
    Open {
        payload: ImagePayload,
        surface: Surface,
    },

    /// Re-open the currently selected (previously confirmed) image.
    Reedit { surface: Surface },

    /// Drop the selected image.
    Remove,

    SetAspect { aspect: AspectConstraint },

    /// Commit an explicit rectangle (clamped like any other mutation).
    SetRect { rect: CropRect },

    /// The displayed image box changed size; the normalized rect is untouched.
    ResizeSurface { surface: Surface },

    BeginDrag { kind: DragKind, pointer: Point },

    /// Pointer moved while a drag is active. Ignored otherwise.
    DragTo { pointer: Point },

    EndDrag,
    Confirm,
    Cancel,
    Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorResponse {
    Ok,

    Status {
        editing: bool,
        dragging: bool,
        has_image: bool,
        rect: Option<CropRect>,
        aspect: Option<AspectConstraint>,
    },

    Error { message: String },
}

/// Editor → host notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    SessionStarted { natural: NaturalSize, rect: CropRect },

    /// Emitted after every accepted mutation so the host can redraw.
    CropPreview { rect: CropRect },

    CropConfirmed { image: EncodedImage },

    /// Rasterization did not complete; the session is still open.
    CropFailed { message: String },

    SessionCancelled,
    ImageRemoved,
}
