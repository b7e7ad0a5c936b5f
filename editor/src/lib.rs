//! Interactive 2-D scene editor core.
//!
//! Turns a stream of pointer, wheel and keyboard events into reversible
//! edits on a scene of rectangles, circles, triangles, text, images and
//! freehand strokes, over a pannable and zoomable canvas. Hosts (the
//! `vectorflow` CLI, or a browser page through [`wasm`]) own an
//! [`engine::EditorContext`], feed it [`input::Event`]s and act on the
//! returned [`engine::Effect`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `EditorContext`: interaction state machine and panel operations |
//! | [`doc`] | Elements, copy-on-write scene store, snapshots |
//! | [`camera`] | Pan/zoom camera and screen/world conversions |
//! | [`input`] | Host events, tools and the gesture state |
//! | [`selection`] | Multi-selection with a primary member |
//! | [`overlay`] | Resize and rotate handles for the primary element |
//! | [`hit`] | Hit-testing of handles and element bodies |
//! | [`marquee`] | Rubber-band selection |
//! | [`history`] | Bounded undo/redo |
//! | [`tools`] | `ToolHandler` contract and the drawing tools |
//! | [`persist`] | Saved-scene JSON payload |
//! | [`export`] | SVG export |
//! | [`config`] | Editor startup settings |
//! | [`consts`] | Shared limits and defaults |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod history;
pub mod hit;
pub mod input;
pub mod marquee;
pub mod overlay;
pub mod persist;
pub mod selection;
pub mod tools;
#[cfg(feature = "wasm")]
pub mod wasm;
