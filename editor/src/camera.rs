#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_IN_FACTOR, ZOOM_MAX, ZOOM_MIN, ZOOM_OUT_FACTOR};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned rectangle. `x`/`y` is the top-left corner; `w`/`h` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The normalized rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    /// Square of side `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, size: f64) -> Self {
        Self { x: center.x - size / 2.0, y: center.y - size / 2.0, w: size, h: size }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether `p` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle, edges included.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }
}

/// Direction of a single zoom wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom), kept inside `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Build a camera, clamping `zoom` into the supported range.
    #[must_use]
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom: clamp_zoom(zoom) }
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space rectangle to world space.
    #[must_use]
    pub fn screen_rect_to_world(&self, rect: &Rect) -> Rect {
        let tl = self.screen_to_world(Point::new(rect.x, rect.y));
        Rect::new(tl.x, tl.y, rect.w / self.zoom, rect.h / self.zoom)
    }

    /// Convert a world-space rectangle to screen space.
    #[must_use]
    pub fn world_rect_to_screen(&self, rect: &Rect) -> Rect {
        let tl = self.world_to_screen(Point::new(rect.x, rect.y));
        Rect::new(tl.x, tl.y, rect.w * self.zoom, rect.h * self.zoom)
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Apply one zoom tick anchored at `screen`.
    ///
    /// The world point under `screen` before the change stays under `screen`
    /// afterwards. Returns `false` when the zoom was already pinned at the
    /// bound in that direction and nothing moved.
    pub fn zoom_at(&mut self, screen: Point, direction: ZoomDirection) -> bool {
        let world = self.screen_to_world(screen);
        let next = clamp_zoom(self.zoom * direction.factor());
        if (next - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = next;
        self.pan_x = screen.x - world.x * self.zoom;
        self.pan_y = screen.y - world.y * self.zoom;
        true
    }

    /// Translate the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() { zoom.clamp(ZOOM_MIN, ZOOM_MAX) } else { 1.0 }
}
