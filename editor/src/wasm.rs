//! Browser binding. Built with `--features wasm`.
//!
//! Events, edits and effects cross the boundary as JSON strings so the host
//! needs no generated type bindings beyond this one class.

use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;
use crate::doc::{ElementEdit, ElementId};
use crate::engine::{EditorContext, Effect};
use crate::input::{Event, Tool};

/// One editor per canvas.
#[wasm_bindgen]
pub struct Editor {
    ctx: EditorContext,
}

#[wasm_bindgen]
impl Editor {
    /// Start from a saved payload, or an empty scene.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(saved: Option<String>) -> Self {
        let config = EditorConfig::default();
        let ctx = match saved {
            Some(json) => EditorContext::from_saved(&json, &config),
            None => EditorContext::new(&config),
        };
        Self { ctx }
    }

    /// Feed one JSON-encoded [`Event`]; returns the JSON effect list.
    pub fn dispatch(&mut self, event: &str) -> Result<String, JsError> {
        let event: Event = serde_json::from_str(event)?;
        effects_json(&self.ctx.dispatch(event))
    }

    /// Switch tools by name (`"select"`, `"rectangle"`, `"pencil"`, …).
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsError> {
        let tool: Tool = serde_json::from_value(serde_json::Value::String(name.to_owned()))?;
        self.ctx.set_tool(tool);
        Ok(())
    }

    pub fn set_pending_image(&mut self, src: String) {
        self.ctx.set_pending_image(src);
    }

    pub fn set_fill(&mut self, color: &str) -> Result<String, JsError> {
        effects_json(&self.ctx.set_fill(color))
    }

    pub fn set_background(&mut self, color: &str) -> Result<String, JsError> {
        effects_json(&self.ctx.set_background(color))
    }

    /// Apply a JSON-encoded property edit to the primary element.
    pub fn apply_edit(&mut self, edit: &str) -> Result<String, JsError> {
        let edit: ElementEdit = serde_json::from_str(edit)?;
        effects_json(&self.ctx.apply_edit(&edit))
    }

    pub fn delete_selection(&mut self) -> Result<String, JsError> {
        effects_json(&self.ctx.delete_selection())
    }

    pub fn select_layer(&mut self, id: &str) -> Result<String, JsError> {
        let id: ElementId = id.parse()?;
        effects_json(&self.ctx.select_layer(id))
    }

    /// Layers panel rows as JSON, bottom first.
    pub fn layers(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.ctx.layers())?)
    }

    pub fn undo(&mut self) -> Result<String, JsError> {
        effects_json(&self.ctx.undo())
    }

    pub fn redo(&mut self) -> Result<String, JsError> {
        effects_json(&self.ctx.redo())
    }

    pub fn cancel(&mut self) -> Result<String, JsError> {
        effects_json(&self.ctx.cancel())
    }

    /// The persistence payload for the current scene.
    pub fn save(&self) -> Result<String, JsError> {
        Ok(self.ctx.save()?)
    }

    #[must_use]
    pub fn export_svg(&self, width: f64, height: f64) -> String {
        self.ctx.export_svg(width, height)
    }
}

fn effects_json(effects: &[Effect]) -> Result<String, JsError> {
    Ok(serde_json::to_string(effects)?)
}
