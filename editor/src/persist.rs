//! Saved-scene payload: the JSON document hosts store between sessions.
//!
//! The layout is camelCase and keeps shapes and strokes in separate lists:
//!
//! ```json
//! { "background": "#1e1e1e", "zoom": 1, "panX": 0, "panY": 0,
//!   "elements": [{ "type": "rectangle", "x": 10, "y": 10, "w": 50, "h": 30,
//!                  "opacity": 1, "radius": 0, "rotate": 0, "fill": "#D9D9D9" }],
//!   "pencil": [{ "d": "M 0 0 L 5 5", "stroke": "#D9D9D9", "strokeWidth": 2 }] }
//! ```
//!
//! Loading is lenient about what older payloads wrote: `strokeWidth` and
//! `rotate` may be numbers, numeric strings, or (for `rotate`) a CSS
//! `rotate(…deg)` transform. Element ids are not persisted; every load
//! assigns fresh ones.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::camera::{Camera, Rect};
use crate::config::EditorConfig;
use crate::consts::{DEFAULT_FILL, DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT, MIN_FONT_SIZE_PX, PENCIL_STROKE_WIDTH};
use crate::doc::{Content, Element, StrokePath};
use crate::engine::EditorContext;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid scene payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown element type: {0}")]
    UnknownKind(String),
}

/// Whole saved scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePayload {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default = "unit")]
    pub zoom: f64,
    #[serde(default)]
    pub pan_x: f64,
    #[serde(default)]
    pub pan_y: f64,
    /// Non-stroke elements in paint order.
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
    /// Strokes in paint order; always painted above `elements`.
    #[serde(default)]
    pub pencil: Vec<StrokeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub w: f64,
    #[serde(default)]
    pub h: f64,
    #[serde(default = "unit")]
    pub opacity: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub rotate: Lenient,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeRecord {
    #[serde(default)]
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: Lenient,
}

/// A number that older payloads sometimes wrote as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Lenient {
    /// Numeric value, accepting `"12.5"`, `"12.5px"` and `"rotate(12.5deg)"`.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => {
                let s = s.trim();
                let s = s.strip_prefix("rotate(").and_then(|r| r.strip_suffix(')')).unwrap_or(s);
                let s = s.trim_end_matches("deg").trim_end_matches("px").trim();
                match s.parse::<f64>() {
                    Ok(v) if v.is_finite() => Some(v),
                    _ => None,
                }
            }
            Self::Missing => None,
        }
    }
}

fn unit() -> f64 {
    1.0
}

// =============================================================================
// ELEMENT CONVERSION
// =============================================================================

impl ElementRecord {
    /// Capture a non-stroke element. Returns `None` for strokes.
    #[must_use]
    pub fn from_element(el: &Element) -> Option<Self> {
        let mut record = Self {
            kind: String::new(),
            x: el.x,
            y: el.y,
            w: el.width,
            h: el.height,
            opacity: el.opacity,
            radius: el.corner_radius,
            rotate: Lenient::Number(el.rotation),
            fill: None,
            text: None,
            font_size: None,
            src: None,
        };
        let kind = match &el.content {
            Content::Rectangle => "rectangle",
            Content::Circle => "circle",
            Content::Triangle => "triangle",
            Content::Text { text, font_size } => {
                record.text = Some(text.clone());
                record.font_size = Some(*font_size);
                "text"
            }
            Content::Image { src } => {
                record.src = Some(src.clone());
                "image"
            }
            Content::Stroke(_) => return None,
        };
        if el.kind().is_shape() || kind == "text" {
            record.fill = Some(el.fill.clone());
        }
        record.kind = kind.to_owned();
        Some(record)
    }

    /// Build a live element with a fresh id.
    pub fn to_element(&self) -> Result<Element, PersistError> {
        let content = match self.kind.as_str() {
            "rectangle" => Content::Rectangle,
            "circle" => Content::Circle,
            "triangle" => Content::Triangle,
            "text" => Content::Text {
                text: self.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_owned()),
                font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX).max(MIN_FONT_SIZE_PX),
            },
            "image" => Content::Image { src: self.src.clone().unwrap_or_default() },
            other => return Err(PersistError::UnknownKind(other.to_owned())),
        };
        let fill = self.fill.as_deref().unwrap_or(DEFAULT_FILL);
        let mut el = Element::new(content, Rect::new(self.x, self.y, self.w, self.h), fill);
        el.rotation = self.rotate.value().unwrap_or(0.0);
        el.opacity = self.opacity.clamp(0.0, 1.0);
        el.corner_radius = self.radius.max(0.0);
        Ok(el)
    }
}

impl StrokeRecord {
    /// Capture a stroke element. Returns `None` for anything else.
    #[must_use]
    pub fn from_element(el: &Element) -> Option<Self> {
        let Content::Stroke(stroke) = &el.content else {
            return None;
        };
        Some(Self {
            d: stroke.path.clone(),
            stroke: Some(stroke.color.clone()),
            stroke_width: Lenient::Number(stroke.width),
        })
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        let color = self.stroke.as_deref().unwrap_or(DEFAULT_FILL);
        let width = self.stroke_width.value().unwrap_or(PENCIL_STROKE_WIDTH);
        Element::stroke(StrokePath::from_path(&self.d, color, width))
    }
}

// =============================================================================
// SCENE CONVERSION
// =============================================================================

/// A decoded scene, ready for [`EditorContext::load_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub elements: Vec<Element>,
    pub camera: Camera,
    pub background: Option<String>,
}

impl ScenePayload {
    /// Capture elements in paint order.
    pub fn capture<'a>(
        elements: impl IntoIterator<Item = &'a Element>,
        camera: Camera,
        background: &str,
    ) -> Self {
        let mut payload = Self {
            background: Some(background.to_owned()),
            zoom: camera.zoom,
            pan_x: camera.pan_x,
            pan_y: camera.pan_y,
            elements: Vec::new(),
            pencil: Vec::new(),
        };
        for el in elements {
            if let Some(stroke) = StrokeRecord::from_element(el) {
                payload.pencil.push(stroke);
            } else if let Some(record) = ElementRecord::from_element(el) {
                payload.elements.push(record);
            }
        }
        payload
    }

    /// Decode every record. Fails on the first unknown element type.
    pub fn to_scene(&self) -> Result<Scene, PersistError> {
        let mut elements = self.elements.iter().map(ElementRecord::to_element).collect::<Result<Vec<_>, _>>()?;
        elements.extend(self.pencil.iter().map(StrokeRecord::to_element));
        Ok(Scene {
            elements,
            camera: Camera::new(self.pan_x, self.pan_y, self.zoom),
            background: self.background.clone(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// EDITOR
// =============================================================================

impl EditorContext {
    /// Current scene, camera and background as a payload.
    #[must_use]
    pub fn to_payload(&self) -> ScenePayload {
        ScenePayload::capture(self.doc().iter(), self.camera(), self.background())
    }

    /// Serialize the current state.
    pub fn save(&self) -> Result<String, PersistError> {
        self.to_payload().to_json()
    }

    /// Replace the scene with a saved payload and make it the history baseline.
    ///
    /// On error the editor is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), PersistError> {
        let scene = ScenePayload::from_json(json)?.to_scene()?;
        let background = scene.background.unwrap_or_else(|| self.background().to_owned());
        debug!(elements = scene.elements.len(), "loading saved scene");
        self.load_scene(scene.elements, scene.camera, background);
        Ok(())
    }

    /// Editor restored from `json`, or an empty one if the payload can't be used.
    #[must_use]
    pub fn from_saved(json: &str, config: &EditorConfig) -> Self {
        let mut editor = Self::new(config);
        if let Err(e) = editor.load_json(json) {
            warn!(error = %e, "discarding saved scene");
        }
        editor
    }
}
