// Author: Dustin Pilgrim
// License: MIT

use babymagic_core::{
    CropRect, EditorEvent, EditorRequest, EditorResponse, EncodedImage, ImagePayload, NaturalSize,
    Surface,
};

use eventline::{debug, info, warn};

use crate::editor::CropEditor;
use crate::error::{CropError, Result};
use crate::ingest::SourceImage;
use crate::raster::DEFAULT_JPEG_QUALITY;

/// Uploader state: at most one open crop session plus the last confirmed crop.
#[derive(Debug)]
pub struct EditorState {
    active: Option<CropEditor>,
    selected: Option<EncodedImage>,
    quality: u8,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            active: None,
            selected: None,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    /// Last confirmed crop, as handed to the gallery/upload flow.
    pub fn selected(&self) -> Option<&EncodedImage> {
        self.selected.as_ref()
    }

    /// Start a session on a freshly picked image. An open session is replaced.
    pub fn open(&mut self, payload: &ImagePayload, surface: Surface) -> Result<&mut CropEditor> {
        let source = SourceImage::from_payload(payload)?;
        Ok(self.start(source, surface))
    }

    /// Start a session on the currently selected image.
    pub fn reedit(&mut self, surface: Surface) -> Result<&mut CropEditor> {
        let selected = self.selected.as_ref().ok_or(CropError::NoSelectedImage)?;
        let source = SourceImage::from_encoded(selected)?;
        Ok(self.start(source, surface))
    }

    fn start(&mut self, source: SourceImage, surface: Surface) -> &mut CropEditor {
        if self.active.is_some() {
            debug!("replacing open crop session");
        }

        let natural = source.natural();
        info!(
            "crop session started: {}x{} on {}x{} surface",
            natural.width, natural.height, surface.width, surface.height
        );

        self.active
            .insert(CropEditor::open(source, surface).with_quality(self.quality))
    }

    /// Drop the selected image. Returns it if there was one.
    pub fn remove(&mut self) -> Option<EncodedImage> {
        self.selected.take()
    }

    /// Discard the session (raw image, selection, any drag). No side effects.
    pub fn cancel(&mut self) -> bool {
        let had = self.active.take().is_some();
        if had {
            info!("crop session cancelled");
        }
        had
    }

    /// Rasterize the selection and end the session.
    ///
    /// On failure the session stays open so the user can retry or cancel.
    pub fn confirm(&mut self) -> Result<EncodedImage> {
        let editor = self.active.as_ref().ok_or(CropError::NoSession)?;

        let image = match editor.rasterize() {
            Ok(image) => image,
            Err(e) => {
                warn!("crop confirm failed: {e}");
                return Err(e);
            }
        };

        self.active = None;
        self.selected = Some(image.clone());
        info!("crop confirmed: {}x{} ({} bytes)", image.width, image.height, image.bytes.len());

        Ok(image)
    }

    /// Dispatch a host request.
    ///
    /// - `emit` receives notifications for the host (previews, results).
    /// - Drag moves/ends without an active drag are accepted as no-ops.
    pub fn handle_request<F>(&mut self, req: &EditorRequest, mut emit: F) -> EditorResponse
    where
        F: FnMut(EditorEvent),
    {
        match req {
            EditorRequest::Open { payload, surface } => {
                let started = self.open(payload, *surface).map(|ed| (ed.natural(), ed.rect()));
                self.started(started, emit)
            }

            EditorRequest::Reedit { surface } => {
                let started = self.reedit(*surface).map(|ed| (ed.natural(), ed.rect()));
                self.started(started, emit)
            }

            EditorRequest::Remove => {
                if self.remove().is_some() {
                    emit(EditorEvent::ImageRemoved);
                }
                EditorResponse::Ok
            }

            EditorRequest::SetAspect { aspect } => match self.active.as_mut() {
                Some(ed) => {
                    let rect = ed.set_constraint(*aspect);
                    debug!("aspect set to {aspect}");
                    emit(EditorEvent::CropPreview { rect });
                    EditorResponse::Ok
                }
                None => no_session(),
            },

            EditorRequest::SetRect { rect } => match self.active.as_mut() {
                Some(ed) => {
                    let rect = ed.apply(*rect);
                    emit(EditorEvent::CropPreview { rect });
                    EditorResponse::Ok
                }
                None => no_session(),
            },

            EditorRequest::ResizeSurface { surface } => match self.active.as_mut() {
                Some(ed) => {
                    ed.resize_surface(*surface);
                    EditorResponse::Ok
                }
                None => no_session(),
            },

            EditorRequest::BeginDrag { kind, pointer } => match self.active.as_mut() {
                Some(ed) => match ed.begin_drag(*kind, *pointer) {
                    Ok(()) => {
                        debug!("drag begin: {}", kind.key());
                        EditorResponse::Ok
                    }
                    Err(e) => {
                        warn!("drag begin rejected: {e}");
                        EditorResponse::Error {
                            message: e.to_string(),
                        }
                    }
                },
                None => no_session(),
            },

            EditorRequest::DragTo { pointer } => {
                if let Some(rect) = self.active.as_mut().and_then(|ed| ed.on_move(*pointer)) {
                    emit(EditorEvent::CropPreview { rect });
                }
                EditorResponse::Ok
            }

            EditorRequest::EndDrag => {
                if let Some(ed) = self.active.as_mut().filter(|ed| ed.is_dragging()) {
                    let rect = ed.end_drag();
                    debug!("drag end: {rect}");
                }
                EditorResponse::Ok
            }

            EditorRequest::Confirm => match self.confirm() {
                Ok(image) => {
                    emit(EditorEvent::CropConfirmed { image });
                    EditorResponse::Ok
                }
                Err(CropError::NoSession) => no_session(),
                Err(e) => {
                    let message = e.to_string();
                    emit(EditorEvent::CropFailed {
                        message: message.clone(),
                    });
                    EditorResponse::Error { message }
                }
            },

            EditorRequest::Cancel => {
                if self.cancel() {
                    emit(EditorEvent::SessionCancelled);
                }
                EditorResponse::Ok
            }

            EditorRequest::Status => EditorResponse::Status {
                editing: self.is_editing(),
                dragging: self.active.as_ref().is_some_and(|ed| ed.is_dragging()),
                has_image: self.selected.is_some(),
                rect: self.active.as_ref().map(|ed| ed.rect()),
                aspect: self.active.as_ref().map(|ed| ed.aspect()),
            },
        }
    }

    fn started<F>(
        &self,
        started: Result<(NaturalSize, CropRect)>,
        mut emit: F,
    ) -> EditorResponse
    where
        F: FnMut(EditorEvent),
    {
        match started {
            Ok((natural, rect)) => {
                emit(EditorEvent::SessionStarted { natural, rect });
                EditorResponse::Ok
            }
            Err(e) => {
                warn!("could not open image: {e}");
                EditorResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

fn no_session() -> EditorResponse {
    EditorResponse::Error {
        message: CropError::NoSession.to_string(),
    }
}
