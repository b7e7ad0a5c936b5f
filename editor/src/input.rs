//! Input model: tools, modifier keys, host events, and the gesture session.
//!
//! This module defines the types consumed by the editor. `Tool` and
//! `Modifiers` capture the user's intent at the time of a pointer event.
//! `Event` is everything the host can feed into `EditorContext::dispatch`.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the anchors needed to compute absolute positions on
//! every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Rect};
use crate::doc::ElementId;
use crate::hit::Corner;
use crate::marquee::Marquee;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Drag out a rectangle.
    Rectangle,
    /// Drag out a circle.
    Circle,
    /// Drag out a triangle.
    Triangle,
    /// Click to place a text element.
    Text,
    /// Click to place the pending image.
    Image,
    /// Freehand stroke.
    Pencil,
    /// Remove strokes under the pointer.
    Erase,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"z"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Case-insensitive comparison against a key name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }

    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == " " || self.is("space") || self.is("spacebar")
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// A pointer sample in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub screen: Point,
    #[serde(default)]
    pub button: Button,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { screen: Point::new(x, y), ..Self::default() }
    }

    #[must_use]
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Everything the host forwards to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Wheel {
        screen: Point,
        delta: WheelDelta,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Window blur or lost pointer capture.
    Blur,
}

/// The gesture in progress between pointer-down and pointer-up.
///
/// Each active variant carries the anchors captured on pointer-down and
/// moves compute absolute values from them. Text resize is the exception:
/// it tracks the previous pointer position and applies per-move deltas.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging the canvas with space held or the middle button.
    Panning {
        /// Screen position of the pointer-down.
        start_screen: Point,
        /// Camera pan offset at pointer-down.
        start_pan: Point,
    },
    /// Dragging a corner handle of a non-text element.
    Resizing {
        id: ElementId,
        corner: Corner,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Element box at pointer-down.
        start: Rect,
    },
    /// Dragging a corner handle of a text element; scales the font instead of the box.
    ResizingText {
        id: ElementId,
        /// World-space pointer position at the previous event.
        last_world: Point,
    },
    /// Dragging the rotate handle.
    Rotating {
        id: ElementId,
        /// World-space pivot (element center).
        center: Point,
        /// Pointer angle around the pivot at pointer-down, in radians.
        start_angle: f64,
        /// Element rotation at pointer-down, in degrees.
        start_rotation: f64,
    },
    /// Moving the selection by its primary element.
    Dragging {
        primary: ElementId,
        /// Pointer position minus the primary's position at pointer-down (world).
        grab_offset: Point,
        /// Every selected element's position at pointer-down.
        origins: Vec<(ElementId, Point)>,
    },
    /// Rubber-band selection on empty canvas.
    Marquee {
        marquee: Marquee,
        /// Shift was held: add hits to the existing selection.
        additive: bool,
    },
    /// Pointer events are forwarded to the active tool handler.
    Drawing { tool: Tool },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short name of the mode, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::Resizing { .. } => "resizing",
            Self::ResizingText { .. } => "resizing_text",
            Self::Rotating { .. } => "rotating",
            Self::Dragging { .. } => "dragging",
            Self::Marquee { .. } => "marquee",
            Self::Drawing { .. } => "drawing",
        }
    }
}
