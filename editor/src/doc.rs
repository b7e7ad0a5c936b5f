//! Document model: scene elements, their content, and the in-memory store.
//!
//! This module defines what is on the canvas (`Element`, `Content`,
//! `ElementKind`), a sparse-update type for property edits (`ElementEdit`),
//! the runtime store that owns all live elements (`DocStore`), and the
//! immutable `Snapshot` the history engine keeps.
//!
//! Elements are held as `Arc<Element>` and mutated copy-on-write, so taking a
//! snapshot is a pointer copy and no later edit can reach back into it. The
//! store keeps shapes before strokes: freehand strokes form an overlay layer
//! painted above every shape.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Point, Rect};
use crate::consts::{MIN_ELEMENT_SIZE, MIN_FONT_SIZE_PX, TEXT_CHAR_WIDTH_EM, TEXT_LINE_HEIGHT_EM};

/// Unique identifier for a scene element.
pub type ElementId = Uuid;

/// The kind of a scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Circle,
    Triangle,
    Text,
    Image,
    Stroke,
}

impl ElementKind {
    /// Whether the kind carries a fill colour and corner radius.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Triangle)
    }
}

/// A captured freehand stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    /// Sampled world-space points, in drawing order.
    pub points: Vec<Point>,
    /// Serialized path geometry (`M`/`L`/`Q` commands).
    pub path: String,
    /// Stroke colour.
    pub color: String,
    /// Stroke width in world units.
    pub width: f64,
}

impl StrokePath {
    /// Bounding box of the sampled points. Empty strokes yield a zero rect at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::default();
        };
        let (mut min, mut max) = (*first, *first);
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::from_corners(min, max)
    }

    /// Rebuild a stroke from serialized path geometry.
    ///
    /// Every coordinate pair in the path (control points included) becomes a
    /// sample point, which is close enough for erasing and bounds.
    #[must_use]
    pub fn from_path(path: &str, color: &str, width: f64) -> Self {
        let numbers: Vec<f64> = path_tokens(path)
            .into_iter()
            .filter_map(|tok| match tok {
                PathToken::Number(v) => Some(v),
                PathToken::Command(_) => None,
            })
            .collect();
        let points = numbers.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])).collect();
        Self { points, path: path.to_owned(), color: color.to_owned(), width }
    }

    /// Shift the samples and the serialized geometry by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
        let mut parts = Vec::new();
        let mut is_x = true;
        for tok in path_tokens(&self.path) {
            match tok {
                PathToken::Command(c) => parts.push(c.to_string()),
                PathToken::Number(v) => {
                    parts.push(format!("{}", if is_x { v + dx } else { v + dy }));
                    is_x = !is_x;
                }
            }
        }
        self.path = parts.join(" ");
    }

    /// Shortest distance from `p` to the stroke's polyline.
    #[must_use]
    pub fn distance_to(&self, p: Point) -> f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [only] => only.distance(p),
            pts => pts
                .windows(2)
                .map(|seg| segment_distance(p, seg[0], seg[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

enum PathToken {
    Command(char),
    Number(f64),
}

/// Split path geometry into command letters and numbers. Unparseable fragments are skipped.
fn path_tokens(path: &str) -> Vec<PathToken> {
    let mut out = Vec::new();
    let mut current = String::new();
    let flush = |buf: &mut String, out: &mut Vec<PathToken>| {
        if let Ok(v) = buf.parse::<f64>() {
            out.push(PathToken::Number(v));
        }
        buf.clear();
    };
    for ch in path.chars() {
        if ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E' {
            flush(&mut current, &mut out);
            out.push(PathToken::Command(ch));
        } else if ch.is_whitespace() || ch == ',' {
            flush(&mut current, &mut out);
        } else {
            current.push(ch);
        }
    }
    flush(&mut current, &mut out);
    out
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return a.distance(p);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Kind-specific element content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Rectangle,
    Circle,
    Triangle,
    Text { text: String, font_size: f64 },
    Image { src: String },
    Stroke(StrokePath),
}

impl Content {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Rectangle => ElementKind::Rectangle,
            Self::Circle => ElementKind::Circle,
            Self::Triangle => ElementKind::Triangle,
            Self::Text { .. } => ElementKind::Text,
            Self::Image { .. } => ElementKind::Image,
            Self::Stroke(_) => ElementKind::Stroke,
        }
    }
}

/// A scene element. Geometry is always in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Stable identity, assigned at creation and kept across undo/redo.
    pub id: ElementId,
    /// Left edge of the unrotated box.
    pub x: f64,
    /// Top edge of the unrotated box.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees around the box center. Accumulates without wrapping.
    pub rotation: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    pub corner_radius: f64,
    /// Fill colour for shapes, text colour for text.
    pub fill: String,
    pub content: Content,
}

impl Element {
    /// Create an element with a fresh id, no rotation and full opacity.
    #[must_use]
    pub fn new(content: Content, bounds: Rect, fill: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.w,
            height: bounds.h,
            rotation: 0.0,
            opacity: 1.0,
            corner_radius: 0.0,
            fill: fill.to_owned(),
            content,
        }
    }

    /// Create a stroke element whose box tracks its points.
    #[must_use]
    pub fn stroke(stroke: StrokePath) -> Self {
        let bounds = stroke.bounds();
        let color = stroke.color.clone();
        Self::new(Content::Stroke(stroke), bounds, &color)
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    #[must_use]
    pub fn is_stroke(&self) -> bool {
        matches!(self.content, Content::Stroke(_))
    }

    /// Unrotated world-space box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Axis-aligned world-space box enclosing the rotated element.
    #[must_use]
    pub fn rotated_bounds(&self) -> Rect {
        let b = self.bounds();
        if self.rotation.rem_euclid(360.0).abs() < f64::EPSILON {
            return b;
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let half_w = (b.w / 2.0 * cos).abs() + (b.h / 2.0 * sin).abs();
        let half_h = (b.w / 2.0 * sin).abs() + (b.h / 2.0 * cos).abs();
        let c = b.center();
        Rect::new(c.x - half_w, c.y - half_h, half_w * 2.0, half_h * 2.0)
    }

    /// Whether the world point falls inside the rotated element.
    #[must_use]
    pub fn contains(&self, world: Point) -> bool {
        let b = self.bounds();
        let c = b.center();
        let (sin, cos) = (-self.rotation).to_radians().sin_cos();
        let (dx, dy) = (world.x - c.x, world.y - c.y);
        let local = Point::new(c.x + dx * cos - dy * sin, c.y + dx * sin + dy * cos);
        b.contains_point(local)
    }

    /// Resize a text element's box to its estimated rendered extent. No-op for other kinds.
    pub fn fit_text(&mut self) {
        if let Content::Text { text, font_size } = &self.content {
            let (w, h) = text_extent(text, *font_size);
            self.width = w;
            self.height = h;
        }
    }

    /// Move the element so its top-left corner sits at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        if let Content::Stroke(stroke) = &mut self.content {
            stroke.translate(dx, dy);
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn text_extent(text: &str, font_size: f64) -> (f64, f64) {
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0).max(1);
    let lines = text.lines().count().max(1);
    (longest as f64 * font_size * TEXT_CHAR_WIDTH_EM, lines as f64 * font_size * TEXT_LINE_HEIGHT_EM)
}

/// Sparse property edit for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width; floored at the minimum element size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height; floored at the minimum element size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New opacity; clamped to `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// New corner radius; floored at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Replacement text (text elements only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New font size (text elements only); floored at the minimum font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ElementEdit {
    fn apply(&self, el: &mut Element) {
        if let Some(x) = self.x {
            el.move_to(x, el.y);
        }
        if let Some(y) = self.y {
            el.move_to(el.x, y);
        }
        // A stroke's box is derived from its points.
        if !el.is_stroke() {
            if let Some(w) = self.width {
                el.width = w.max(MIN_ELEMENT_SIZE);
            }
            if let Some(h) = self.height {
                el.height = h.max(MIN_ELEMENT_SIZE);
            }
        }
        if let Some(o) = self.opacity {
            el.opacity = o.clamp(0.0, 1.0);
        }
        if let Some(r) = self.corner_radius {
            el.corner_radius = r.max(0.0);
        }
        if let Content::Text { text, font_size } = &mut el.content {
            if let Some(t) = &self.text {
                t.clone_into(text);
            }
            if let Some(size) = self.font_size {
                *font_size = size.max(MIN_FONT_SIZE_PX);
            }
            if self.text.is_some() || self.font_size.is_some() {
                el.fit_text();
            }
        }
    }
}

/// Immutable copy of the element list at a commit point.
///
/// Cloning is cheap: elements are shared with the store until the store
/// mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    elements: Arc<[Arc<Element>]>,
}

impl Snapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self { elements: Arc::from(Vec::new()) }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// In-memory store of scene elements in paint order.
///
/// `revision` increases on every mutation. The interaction state machine
/// compares revisions across a gesture to decide whether to commit.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    elements: Vec<Arc<Element>>,
    revision: u64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element and return its id.
    ///
    /// Strokes append to the top of the stroke layer; any other element goes
    /// on top of the shapes but below the first stroke.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = element.id;
        let at = if element.is_stroke() {
            self.elements.len()
        } else {
            self.elements.iter().position(|e| e.is_stroke()).unwrap_or(self.elements.len())
        };
        self.elements.insert(at, Arc::new(element));
        self.touch();
        id
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let idx = self.index_of(id)?;
        let removed = self.elements.remove(idx);
        self.touch();
        Some(Arc::unwrap_or_clone(removed))
    }

    /// Remove every element for which `keep` returns false. Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Element) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|e| keep(e));
        let removed = before - self.elements.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id).map(AsRef::as_ref)
    }

    /// Mutable access to an element by id. Detaches it from any snapshot that shares it.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        let idx = self.index_of(id)?;
        self.touch();
        Some(Arc::make_mut(&mut self.elements[idx]))
    }

    /// Apply a property edit. Returns false if the element doesn't exist.
    pub fn apply_edit(&mut self, id: &ElementId, edit: &ElementEdit) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        edit.apply(el);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Elements in paint order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.elements.iter().map(AsRef::as_ref)
    }

    /// Number of elements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mutation counter; changes whenever the element list or any element changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Capture the current element list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { elements: Arc::from(self.elements.clone()) }
    }

    /// Replace every live element with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.elements = snapshot.elements.to_vec();
        self.touch();
    }

    /// Replace all elements, keeping shapes below strokes.
    pub fn load(&mut self, elements: Vec<Element>) {
        self.elements.clear();
        for el in elements {
            self.insert(el);
        }
        self.touch();
    }

    fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == *id)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
