// Author: Dustin Pilgrim
// License: MIT

use babymagic_core::rect::FULL;
use babymagic_core::{AspectConstraint, CropRect, MIN_SIZE, Surface};

use crate::model::CropModel;

/// Width (percent) a newly locked selection starts from.
pub const LOCK_START_WIDTH: f64 = 50.0;

/// Tallest (percent) a newly locked selection may be.
pub const LOCK_MAX_HEIGHT: f64 = 80.0;

/// Height in percent that puts `width` percent at `ratio` on this surface.
pub fn height_for_width(width: f64, ratio: f64, surface: Surface) -> f64 {
    let width_px = width / 100.0 * surface.width;
    width_px / ratio / surface.height * 100.0
}

/// Width in percent that puts `height` percent at `ratio` on this surface.
pub fn width_for_height(height: f64, ratio: f64, surface: Surface) -> f64 {
    let height_px = height / 100.0 * surface.height;
    height_px * ratio / surface.width * 100.0
}

/// Pixel ratio of `rect` as displayed on `surface`.
pub fn pixel_ratio(rect: &CropRect, surface: Surface) -> f64 {
    (rect.width * surface.width) / (rect.height * surface.height)
}

/// Size a selection snaps to when `ratio` gets locked.
pub fn locked_size(ratio: f64, surface: Surface) -> (f64, f64) {
    let mut w = LOCK_START_WIDTH;
    let mut h = height_for_width(w, ratio, surface);

    if h > LOCK_MAX_HEIGHT {
        h = LOCK_MAX_HEIGHT;
        w = width_for_height(h, ratio, surface);
    }

    (w, h)
}

/// Lock (or unlock) the ratio and reshape the selection around its current center.
///
/// Unlocking leaves the rectangle as it is. Without a usable surface the lock is
/// recorded but no reshape happens.
pub fn set_constraint(model: &mut CropModel, aspect: AspectConstraint, surface: Surface) -> CropRect {
    model.set_aspect(aspect);

    let Some(ratio) = aspect.ratio() else {
        return model.rect();
    };
    if !surface.is_usable() {
        return model.rect();
    }

    let (cx, cy) = model.rect().center();
    let (w, h) = locked_size(ratio, surface);

    model.apply(CropRect::new(cx - w / 2.0, cy - h / 2.0, w, h))
}

/// Re-derive height from width after a corner resize while a ratio is locked.
///
/// `x` and `y` stay where the raw resize put them unless the smallest box that
/// still honours the ratio would not fit; then they are pulled back just enough
/// for it to fit. Width is kept when the derived height fits; past the bottom
/// edge the height takes the remaining space and width follows from it.
pub fn lock_resized(rect: CropRect, ratio: f64, surface: Surface) -> CropRect {
    let mut r = rect;
    let per_width = height_for_width(1.0, ratio, surface);

    let lo = MIN_SIZE.max(MIN_SIZE / per_width);
    r.x = r.x.min(FULL - lo).max(0.0);
    r.y = r.y.min(FULL - lo * per_width).max(0.0);

    let hi = (FULL - r.x).min((FULL - r.y) / per_width);

    // Still empty only for ratios too extreme to fit MIN_SIZE on this surface.
    if lo <= hi {
        r.width = r.width.clamp(lo, hi);
    }
    r.height = r.width * per_width;

    r
}
