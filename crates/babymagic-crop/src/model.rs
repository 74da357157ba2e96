// Author: Dustin Pilgrim
// License: MIT

use babymagic_core::rect::FULL;
use babymagic_core::{AspectConstraint, CropRect, MIN_SIZE};

/// Current selection plus the ratio lock of one editing session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CropModel {
    rect: CropRect,
    aspect: AspectConstraint,
}

impl CropModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the centered default box, ratio unlocked.
    pub fn initialize(&mut self) {
        self.rect = CropRect::DEFAULT;
        self.aspect = AspectConstraint::Free;
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn aspect(&self) -> AspectConstraint {
        self.aspect
    }

    pub(crate) fn set_aspect(&mut self, aspect: AspectConstraint) {
        self.aspect = aspect;
    }

    /// Clamp `candidate` into the normalized space and commit it.
    ///
    /// Never fails: out-of-range values are corrected, not rejected.
    pub fn apply(&mut self, candidate: CropRect) -> CropRect {
        self.rect = clamp_rect(candidate);
        self.rect
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Position into `[0, 100 - size]`, then size into `[MIN_SIZE, 100 - position]`.
///
/// Sizes are first bounded to `[MIN_SIZE, 100]` so the position range is never empty.
pub fn clamp_rect(candidate: CropRect) -> CropRect {
    let mut r = candidate;

    r.width = finite_or(r.width, FULL).clamp(MIN_SIZE, FULL);
    r.height = finite_or(r.height, FULL).clamp(MIN_SIZE, FULL);

    r.x = finite_or(r.x, 0.0).clamp(0.0, FULL - r.width);
    r.y = finite_or(r.y, 0.0).clamp(0.0, FULL - r.height);

    r.width = r.width.clamp(MIN_SIZE, FULL - r.x);
    r.height = r.height.clamp(MIN_SIZE, FULL - r.y);

    r
}
