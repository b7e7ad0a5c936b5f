#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::doc::{DocStore, ElementId};
use crate::overlay::Overlay;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Resize(Corner),
    Rotate,
}

/// Corner of the selection box a resize handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Whether dragging this corner moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this corner moves the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Topmost non-stroke element whose rotated box contains `world`.
#[must_use]
pub fn element_at(doc: &DocStore, world: Point) -> Option<ElementId> {
    doc.iter().rev().find(|el| !el.is_stroke() && el.contains(world)).map(|el| el.id)
}

/// Test what is under `screen`, checking the overlay's handles before element bodies.
#[must_use]
pub fn hit_test(screen: Point, doc: &DocStore, camera: &Camera, overlay: Option<&Overlay>) -> Option<Hit> {
    if let Some(ov) = overlay {
        if let Some(part) = ov.hit(screen) {
            return Some(Hit { element_id: ov.target, part });
        }
    }
    let world = camera.screen_to_world(screen);
    element_at(doc, world).map(|element_id| Hit { element_id, part: HitPart::Body })
}
