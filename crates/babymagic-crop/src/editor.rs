// Author: Dustin Pilgrim
// License: MIT

use babymagic_core::{AspectConstraint, CropRect, DragKind, EncodedImage, NaturalSize, Point, Surface};

use crate::aspect;
use crate::drag::DragController;
use crate::error::Result;
use crate::ingest::SourceImage;
use crate::model::CropModel;
use crate::raster::{self, DEFAULT_JPEG_QUALITY};

/// One open crop session: the raw image, its selection, and the pointer state.
#[derive(Debug)]
pub struct CropEditor {
    source: SourceImage,
    surface: Surface,
    model: CropModel,
    drag: DragController,
    quality: u8,
}

impl CropEditor {
    pub fn open(source: SourceImage, surface: Surface) -> Self {
        let mut editor = Self {
            source,
            surface,
            model: CropModel::new(),
            drag: DragController::new(),
            quality: DEFAULT_JPEG_QUALITY,
        };
        editor.initialize();
        editor
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Default selection, free ratio, no drag in flight.
    pub fn initialize(&mut self) {
        self.drag.end();
        self.model.initialize();
    }

    pub fn rect(&self) -> CropRect {
        self.model.rect()
    }

    pub fn aspect(&self) -> AspectConstraint {
        self.model.aspect()
    }

    pub fn natural(&self) -> NaturalSize {
        self.source.natural()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn apply(&mut self, candidate: CropRect) -> CropRect {
        self.model.apply(candidate)
    }

    pub fn set_constraint(&mut self, constraint: AspectConstraint) -> CropRect {
        aspect::set_constraint(&mut self.model, constraint, self.surface)
    }

    /// The displayed box changed size. The selection is normalized, so it stays.
    pub fn resize_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn begin_drag(&mut self, kind: DragKind, pointer: Point) -> Result<()> {
        self.drag.begin(kind, pointer, self.model.rect())
    }

    /// Apply pointer movement. `None` when no drag is active.
    pub fn on_move(&mut self, pointer: Point) -> Option<CropRect> {
        let candidate = self.drag.on_move(pointer, self.surface, self.model.aspect())?;
        Some(self.model.apply(candidate))
    }

    pub fn end_drag(&mut self) -> CropRect {
        self.drag.end();
        self.model.rect()
    }

    pub fn rasterize(&self) -> Result<EncodedImage> {
        raster::rasterize(&self.source, &self.model.rect(), self.quality)
    }
}
