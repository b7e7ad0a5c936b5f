//! Shared numeric constants for the editor crate.

// ── Viewport ────────────────────────────────────────────────────

/// Lower zoom bound.
pub const ZOOM_MIN: f64 = 0.3;

/// Upper zoom bound.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom multiplier applied per wheel tick towards the user.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier applied per wheel tick away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a resize gesture or property edit may produce, in world units.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;

/// Smallest font size a text element may have, in pixels.
pub const MIN_FONT_SIZE_PX: f64 = 8.0;

/// Font size change per world unit of vertical drag when resizing text.
pub const TEXT_RESIZE_SCALE: f64 = 0.2;

// ── Handles ─────────────────────────────────────────────────────

/// Side length of a resize handle square, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 10.0;

/// Side length of the rotate handle square, in screen pixels.
pub const ROTATE_HANDLE_SIZE_PX: f64 = 12.0;

/// Distance from the top edge of the selection box to the rotate handle center, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 18.0;

// ── History ─────────────────────────────────────────────────────

/// Default number of snapshots kept on the undo stack.
pub const HISTORY_DEPTH: usize = 50;

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_BACKGROUND: &str = "#1e1e1e";
pub const DEFAULT_FILL: &str = "#D9D9D9";
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;
pub const DEFAULT_TEXT: &str = "Text";

/// Estimated glyph advance as a fraction of the font size, used to size text boxes.
pub const TEXT_CHAR_WIDTH_EM: f64 = 0.6;

/// Line height as a fraction of the font size.
pub const TEXT_LINE_HEIGHT_EM: f64 = 1.2;

/// Size given to an image when it is placed.
pub const DEFAULT_IMAGE_WIDTH: f64 = 220.0;
pub const DEFAULT_IMAGE_HEIGHT: f64 = 180.0;

// ── Freehand ────────────────────────────────────────────────────

/// Stroke width for pencil strokes, in world units.
pub const PENCIL_STROKE_WIDTH: f64 = 2.0;

/// Pencil samples closer than this to the previous sample are dropped, in world units.
pub const PENCIL_MIN_STEP: f64 = 0.5;

/// Eraser reach around the pointer, in screen pixels.
pub const ERASE_RADIUS_PX: f64 = 20.0;
