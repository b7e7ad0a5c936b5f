//! Selection overlay: the box and handles drawn around the primary element.
//!
//! Everything here is in screen pixels so handle sizes stay constant at any
//! zoom. The overlay is a pure function of one element and the camera and
//! is rebuilt from scratch whenever either changes.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::camera::{Camera, Point, Rect};
use crate::consts::{HANDLE_SIZE_PX, ROTATE_HANDLE_OFFSET_PX, ROTATE_HANDLE_SIZE_PX};
use crate::doc::{Element, ElementId};
use crate::hit::{Corner, HitPart};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// The element the handles belong to.
    pub target: ElementId,
    /// Screen-space box enclosing the rotated element.
    pub bounds: Rect,
    /// Resize handles centred on each corner of `bounds`.
    pub handles: [(Corner, Rect); 4],
    /// Rotate handle centred above the top edge of `bounds`.
    pub rotate: Rect,
}

impl Overlay {
    #[must_use]
    pub fn compute(element: &Element, camera: &Camera) -> Self {
        let bounds = camera.world_rect_to_screen(&element.rotated_bounds());
        let handles = Corner::ALL.map(|corner| (corner, Rect::centered(corner_point(&bounds, corner), HANDLE_SIZE_PX)));
        let top_mid = Point::new(bounds.center().x, bounds.y - ROTATE_HANDLE_OFFSET_PX);
        Self { target: element.id, bounds, handles, rotate: Rect::centered(top_mid, ROTATE_HANDLE_SIZE_PX) }
    }

    /// The handle under `screen`, if any. Resize handles win over the rotate handle.
    #[must_use]
    pub fn hit(&self, screen: Point) -> Option<HitPart> {
        if let Some((corner, _)) = self.handles.iter().find(|(_, r)| r.contains_point(screen)) {
            return Some(HitPart::Resize(*corner));
        }
        self.rotate.contains_point(screen).then_some(HitPart::Rotate)
    }
}

fn corner_point(r: &Rect, corner: Corner) -> Point {
    match corner {
        Corner::TopLeft => Point::new(r.x, r.y),
        Corner::TopRight => Point::new(r.right(), r.y),
        Corner::BottomLeft => Point::new(r.x, r.bottom()),
        Corner::BottomRight => Point::new(r.right(), r.bottom()),
    }
}
