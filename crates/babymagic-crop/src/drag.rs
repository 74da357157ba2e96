// Author: Dustin Pilgrim
// License: MIT

use babymagic_core::rect::FULL;
use babymagic_core::{AspectConstraint, CropRect, DragKind, MIN_SIZE, Point, Surface};

use crate::aspect::lock_resized;
use crate::error::{CropError, Result};

/// State captured on pointer-down and dropped on pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    pub grab: Point,
    pub grab_rect: CropRect,
}

/// Single-slot drag state. Move/end events only act while a session exists.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn begin(&mut self, kind: DragKind, pointer: Point, current: CropRect) -> Result<()> {
        if self.session.is_some() {
            return Err(CropError::DragInProgress);
        }
        self.session = Some(DragSession {
            kind,
            grab: pointer,
            grab_rect: current,
        });
        Ok(())
    }

    /// Candidate rect for the pointer at `pointer`, or `None` when there is
    /// nothing to do (no session, or a collapsed surface).
    pub fn on_move(
        &self,
        pointer: Point,
        surface: Surface,
        aspect: AspectConstraint,
    ) -> Option<CropRect> {
        let session = self.session.as_ref()?;
        if !surface.is_usable() {
            return None;
        }
        Some(apply_drag(session, pointer, surface, aspect))
    }

    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

/// Rect produced by dragging `session` to `pointer`.
///
/// Always computed from the grab snapshot, never from the live rect, so repeated
/// move events do not accumulate rounding or clamping drift.
pub fn apply_drag(
    session: &DragSession,
    pointer: Point,
    surface: Surface,
    aspect: AspectConstraint,
) -> CropRect {
    let dx = (pointer.x - session.grab.x) / surface.width * 100.0;
    let dy = (pointer.y - session.grab.y) / surface.height * 100.0;
    let s = session.grab_rect;

    if session.kind == DragKind::Move {
        return CropRect {
            x: (s.x + dx).clamp(0.0, FULL - s.width),
            y: (s.y + dy).clamp(0.0, FULL - s.height),
            ..s
        };
    }

    let edges = session.kind.edges();
    let mut r = s;

    if edges.right {
        r.width = (s.width + dx).clamp(MIN_SIZE, FULL - s.x);
    }
    if edges.bottom {
        r.height = (s.height + dy).clamp(MIN_SIZE, FULL - s.y);
    }

    // Left/top edges move with the pointer while the opposite edge stays put.
    if edges.left {
        let d = dx.clamp(-s.x, s.width - MIN_SIZE);
        r.x = s.x + d;
        r.width = s.width - d;
    }
    if edges.top {
        let d = dy.clamp(-s.y, s.height - MIN_SIZE);
        r.y = s.y + d;
        r.height = s.height - d;
    }

    match aspect.ratio() {
        Some(ratio) => lock_resized(r, ratio, surface),
        None => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::pixel_ratio;
    use crate::model::CropModel;
    use proptest::prelude::*;

    const SURFACE: Surface = Surface::new(1000.0, 1000.0);

    fn assert_rect_eq(a: CropRect, b: CropRect) {
        let close = |p: f64, q: f64| (p - q).abs() < 1e-9;
        assert!(
            close(a.x, b.x) && close(a.y, b.y) && close(a.width, b.width) && close(a.height, b.height),
            "{a:?} != {b:?}"
        );
    }

    fn drag(kind: DragKind, start: CropRect, dx: f64, dy: f64) -> CropRect {
        let session = DragSession {
            kind,
            grab: Point::new(100.0, 100.0),
            grab_rect: start,
        };
        apply_drag(
            &session,
            Point::new(100.0 + dx, 100.0 + dy),
            SURFACE,
            AspectConstraint::Free,
        )
    }

    #[test]
    fn move_translates_by_percent_of_surface() {
        let r = drag(DragKind::Move, CropRect::DEFAULT, 50.0, -30.0);
        assert_rect_eq(r, CropRect::new(15.0, 7.0, 80.0, 80.0));
    }

    #[test]
    fn move_is_clamped_against_snapshot_size() {
        let r = drag(DragKind::Move, CropRect::DEFAULT, 1.0e6, -1.0e6);
        assert_eq!(r, CropRect::new(20.0, 0.0, 80.0, 80.0));
    }

    #[test]
    fn se_resize_keeps_origin() {
        let r = drag(DragKind::ResizeSe, CropRect::DEFAULT, -300.0, -200.0);
        assert_eq!((r.x, r.y), (10.0, 10.0));
        assert_rect_eq(r, CropRect::new(10.0, 10.0, 50.0, 60.0));
    }

    #[test]
    fn se_resize_stops_at_minimum_width() {
        // 80% - 78% would leave 2%.
        let r = drag(DragKind::ResizeSe, CropRect::DEFAULT, -780.0, 0.0);
        assert_eq!(r.width, MIN_SIZE);
    }

    #[test]
    fn se_resize_stops_at_far_edge() {
        let r = drag(DragKind::ResizeSe, CropRect::DEFAULT, 5000.0, 5000.0);
        assert_eq!((r.width, r.height), (90.0, 90.0));
    }

    #[test]
    fn nw_resize_pins_bottom_right() {
        let start = CropRect::DEFAULT;
        for (dx, dy) in [(200.0, 150.0), (-400.0, -50.0), (900.0, 900.0)] {
            let r = drag(DragKind::ResizeNw, start, dx, dy);
            assert!((r.right() - start.right()).abs() < 1e-9, "{r:?}");
            assert!((r.bottom() - start.bottom()).abs() < 1e-9, "{r:?}");
            assert!(r.is_valid());
        }
    }

    #[test]
    fn ne_and_sw_move_one_edge_per_axis() {
        let ne = drag(DragKind::ResizeNe, CropRect::DEFAULT, 50.0, 50.0);
        assert_rect_eq(ne, CropRect::new(10.0, 15.0, 85.0, 75.0));

        let sw = drag(DragKind::ResizeSw, CropRect::DEFAULT, 50.0, 50.0);
        assert_rect_eq(sw, CropRect::new(15.0, 10.0, 75.0, 85.0));
    }

    #[test]
    fn locked_resize_keeps_pixel_ratio() {
        let surface = Surface::new(800.0, 600.0);
        let session = DragSession {
            kind: DragKind::ResizeSe,
            grab: Point::default(),
            grab_rect: CropRect::new(10.0, 10.0, 40.0, 40.0),
        };
        let r = apply_drag(
            &session,
            Point::new(80.0, 10.0),
            surface,
            AspectConstraint::Ratio(4.0 / 3.0),
        );
        assert!((pixel_ratio(&r, surface) - 4.0 / 3.0).abs() < 1e-3);
        assert!((r.width - 50.0).abs() < 1e-9);
    }

    #[test]
    fn locked_sw_resize_into_right_edge_keeps_ratio() {
        let surface = Surface::new(800.0, 600.0);
        let mut model = CropModel::new();
        model.apply(CropRect::new(50.0, 10.0, 50.0, 40.0));
        model.set_aspect(AspectConstraint::Ratio(2.0));

        let mut ctl = DragController::new();
        ctl.begin(DragKind::ResizeSw, Point::new(400.0, 300.0), model.rect())
            .unwrap();
        let candidate = ctl
            .on_move(Point::new(1400.0, 300.0), surface, model.aspect())
            .unwrap();
        let r = model.apply(candidate);

        assert!(r.is_valid(), "{r:?}");
        assert!(r.width >= MIN_SIZE && r.height >= MIN_SIZE, "{r:?}");
        assert!((pixel_ratio(&r, surface) - 2.0).abs() < 1e-3, "{r:?}");
    }

    #[test]
    fn controller_ignores_moves_without_session() {
        let c = DragController::new();
        assert!(
            c.on_move(Point::new(5.0, 5.0), SURFACE, AspectConstraint::Free)
                .is_none()
        );
    }

    #[test]
    fn controller_rejects_second_begin() {
        let mut c = DragController::new();
        c.begin(DragKind::Move, Point::default(), CropRect::DEFAULT).unwrap();
        assert!(matches!(
            c.begin(DragKind::ResizeSe, Point::default(), CropRect::DEFAULT),
            Err(CropError::DragInProgress)
        ));
        assert!(c.end().is_some());
        assert!(!c.is_active());
    }

    #[test]
    fn collapsed_surface_is_a_no_op() {
        let mut c = DragController::new();
        c.begin(DragKind::Move, Point::default(), CropRect::DEFAULT).unwrap();
        assert!(
            c.on_move(Point::new(5.0, 5.0), Surface::new(0.0, 400.0), AspectConstraint::Free)
                .is_none()
        );
    }

    fn kind_strategy() -> impl Strategy<Value = DragKind> {
        prop_oneof![
            Just(DragKind::Move),
            Just(DragKind::ResizeNw),
            Just(DragKind::ResizeNe),
            Just(DragKind::ResizeSw),
            Just(DragKind::ResizeSe),
        ]
    }

    proptest! {
        #[test]
        fn gesture_sequences_preserve_invariants(
            steps in proptest::collection::vec(
                (kind_strategy(), -3000.0f64..3000.0, -3000.0f64..3000.0),
                1..24,
            ),
        ) {
            let mut model = CropModel::new();
            let mut ctl = DragController::new();

            for (kind, dx, dy) in steps {
                ctl.begin(kind, Point::new(500.0, 500.0), model.rect()).unwrap();
                if let Some(candidate) =
                    ctl.on_move(Point::new(500.0 + dx, 500.0 + dy), SURFACE, model.aspect())
                {
                    let r = model.apply(candidate);
                    prop_assert!(r.is_valid(), "{kind:?} ({dx},{dy}) -> {r:?}");
                }
                ctl.end();
            }
        }

        #[test]
        fn move_never_leaves_the_box(dx in -1.0e7f64..1.0e7, dy in -1.0e7f64..1.0e7) {
            let r = drag(DragKind::Move, CropRect::new(30.0, 40.0, 25.0, 35.0), dx, dy);
            prop_assert!(r.x >= 0.0 && r.x <= 75.0);
            prop_assert!(r.y >= 0.0 && r.y <= 65.0);
            prop_assert_eq!((r.width, r.height), (25.0, 35.0));
        }

        #[test]
        fn locked_corner_resize_holds_ratio(
            kind in kind_strategy().prop_filter("corner", |k| k.is_resize()),
            ratio in 0.5f64..2.0,
            dx in -600.0f64..600.0,
            dy in -600.0f64..600.0,
        ) {
            let surface = Surface::new(800.0, 600.0);
            let mut model = CropModel::new();
            crate::aspect::set_constraint(&mut model, AspectConstraint::Ratio(ratio), surface);

            let mut ctl = DragController::new();
            ctl.begin(kind, Point::new(400.0, 300.0), model.rect()).unwrap();
            let candidate = ctl
                .on_move(Point::new(400.0 + dx, 300.0 + dy), surface, model.aspect())
                .unwrap();
            let r = model.apply(candidate);

            prop_assert!(r.is_valid());
            prop_assert!((pixel_ratio(&r, surface) - ratio).abs() < 1e-3, "{r:?}");
        }

        #[test]
        fn locked_resize_from_any_start_holds_ratio(
            kind in kind_strategy().prop_filter("corner", |k| k.is_resize()),
            ratio in 0.5f64..2.0,
            start in (0.0f64..100.0, 0.0f64..100.0, 5.0f64..100.0, 5.0f64..100.0),
            dx in -2000.0f64..2000.0,
            dy in -2000.0f64..2000.0,
        ) {
            let surface = Surface::new(800.0, 600.0);
            let (x, y, w, h) = start;
            let mut model = CropModel::new();
            model.apply(CropRect::new(x, y, w, h));
            model.set_aspect(AspectConstraint::Ratio(ratio));

            let mut ctl = DragController::new();
            ctl.begin(kind, Point::new(400.0, 300.0), model.rect()).unwrap();
            let candidate = ctl
                .on_move(Point::new(400.0 + dx, 300.0 + dy), surface, model.aspect())
                .unwrap();
            let r = model.apply(candidate);

            prop_assert!(r.is_valid(), "{r:?}");
            prop_assert!((pixel_ratio(&r, surface) - ratio).abs() < 1e-3, "{r:?}");
        }
    }
}
