//! Rubber-band selection rectangle.
//!
//! The marquee is tracked in screen space while dragging and converted to
//! world space once, on release.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

use crate::camera::{Camera, Point, Rect};
use crate::doc::{DocStore, ElementId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    anchor: Point,
    current: Point,
    moved: bool,
}

impl Marquee {
    #[must_use]
    pub fn begin(screen: Point) -> Self {
        Self { anchor: screen, current: screen, moved: false }
    }

    /// Move the free corner and return the screen rectangle.
    pub fn update(&mut self, screen: Point) -> Rect {
        self.current = screen;
        self.moved = true;
        self.rect()
    }

    /// Screen rectangle spanned by the anchor and the last pointer position.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }

    /// World rectangle to select against, or `None` if the pointer never moved.
    #[must_use]
    pub fn end(&self, camera: &Camera) -> Option<Rect> {
        self.moved.then(|| camera.screen_rect_to_world(&self.rect()))
    }
}

/// Ids of non-stroke elements whose unrotated box lies entirely inside `world_rect`, in paint order.
#[must_use]
pub fn contained(doc: &DocStore, world_rect: &Rect) -> Vec<ElementId> {
    doc.iter()
        .filter(|el| !el.is_stroke() && world_rect.contains_rect(&el.bounds()))
        .map(|el| el.id)
        .collect()
}
