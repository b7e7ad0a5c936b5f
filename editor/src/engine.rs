//! Interaction state machine: turns host events into scene edits.
//!
//! [`EditorContext`] owns every piece of editor state. The host feeds it
//! [`Event`]s through [`EditorContext::dispatch`] and reacts to the returned
//! [`Effect`]s (repaint, persist, sync panels, change cursor). Panel actions
//! such as property edits, colour changes and undo/redo are plain methods
//! that return effects the same way.
//!
//! A gesture runs from pointer-down to pointer-up. The scene revision is
//! recorded on pointer-down; if it differs on pointer-up the scene is
//! committed to history. Outside a gesture the scene always equals the
//! current history entry, which is what Escape restores to.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use tracing::{debug, trace};

use crate::camera::{Camera, Point, Rect, ZoomDirection};
use crate::config::EditorConfig;
use crate::consts::{MIN_ELEMENT_SIZE, MIN_FONT_SIZE_PX, TEXT_RESIZE_SCALE};
use crate::doc::{Content, DocStore, Element, ElementEdit, ElementId, ElementKind};
use crate::hit::{self, Corner, Hit, HitPart};
use crate::history::History;
use crate::input::{Button, Event, InputState, Key, Modifiers, PointerEvent, Tool, WheelDelta};
use crate::marquee::{self, Marquee};
use crate::overlay::Overlay;
use crate::selection::Selection;
use crate::tools::{ToolContext, ToolStyle, Toolbox};

const CURSOR_DEFAULT: &str = "default";
const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";
const CURSOR_MOVE: &str = "move";
const CURSOR_CROSSHAIR: &str = "crosshair";

/// Work the host should do after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Scene, overlay, marquee or camera changed.
    RenderNeeded,
    /// Selection changed; property and layer panels should resync.
    SelectionChanged { primary: Option<ElementId>, count: usize },
    /// A history entry was recorded.
    Committed { depth: usize },
    /// The scene was replaced from history.
    Restored,
    /// Persisted state is stale.
    SaveNeeded,
    SetCursor { cursor: String },
}

/// One row of the layers panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerEntry {
    pub id: ElementId,
    pub kind: ElementKind,
    pub selected: bool,
    pub primary: bool,
}

/// All editor state. There is no global state; hosts own one of these per canvas.
#[derive(Debug)]
pub struct EditorContext {
    doc: DocStore,
    camera: Camera,
    selection: Selection,
    overlay: Option<Overlay>,
    input: InputState,
    tool: Tool,
    style: ToolStyle,
    history: History,
    toolbox: Toolbox,
    background: String,
    space_down: bool,
    /// Scene revision at the last pointer-down.
    gesture_revision: u64,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorContext {
    /// An empty scene with a baseline history entry.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        let doc = DocStore::new();
        let history = History::new(config.history_depth, doc.snapshot());
        Self {
            doc,
            camera: Camera::default(),
            selection: Selection::new(),
            overlay: None,
            input: InputState::Idle,
            tool: Tool::Select,
            style: ToolStyle { fill: config.fill.clone(), pending_image: None },
            history,
            toolbox: Toolbox::new(),
            background: config.background.clone(),
            space_down: false,
            gesture_revision: 0,
        }
    }

    /// Replace the whole scene and make it the new history baseline.
    pub fn load_scene(&mut self, elements: Vec<Element>, camera: Camera, background: String) {
        self.input = InputState::Idle;
        self.doc.load(elements);
        self.camera = camera;
        self.background = background;
        self.selection.clear();
        self.overlay = None;
        self.history.reset(self.doc.snapshot());
        debug!(elements = self.doc.len(), zoom = self.camera.zoom, "scene loaded");
    }

    // --- Event entry point ---

    /// Process one host event.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let mut fx = Vec::new();
        match event {
            Event::PointerDown(ev) => self.pointer_down(&ev, &mut fx),
            Event::PointerMove(ev) => self.pointer_move(&ev, &mut fx),
            Event::PointerUp(_) => self.finish_gesture(true, &mut fx),
            Event::Wheel { screen, delta, modifiers } => self.wheel(screen, delta, modifiers, &mut fx),
            Event::KeyDown { key, modifiers } => self.key_down(&key, modifiers, &mut fx),
            Event::KeyUp { key, .. } => self.key_up(&key, &mut fx),
            Event::Blur => self.blur(&mut fx),
        }
        fx
    }

    // --- Panel operations ---

    pub fn set_tool(&mut self, tool: Tool) {
        debug!(?tool, "tool selected");
        self.tool = tool;
    }

    /// Queue an image for the image tool and switch to it.
    pub fn set_pending_image(&mut self, src: String) {
        self.style.pending_image = Some(src);
        self.set_tool(Tool::Image);
    }

    /// Set the fill for new elements and recolour the primary shape or text.
    pub fn set_fill(&mut self, color: &str) -> Vec<Effect> {
        let mut fx = Vec::new();
        color.clone_into(&mut self.style.fill);
        if self.busy("set_fill") {
            return fx;
        }
        let Some(id) = self.selection.primary() else {
            return fx;
        };
        let recolor = self
            .doc
            .get(&id)
            .is_some_and(|el| (el.kind().is_shape() || el.kind() == ElementKind::Text) && el.fill != color);
        if recolor {
            if let Some(el) = self.doc.get_mut(&id) {
                color.clone_into(&mut el.fill);
            }
            self.commit(&mut fx);
            emit(&mut fx, Effect::RenderNeeded);
        }
        fx
    }

    pub fn set_background(&mut self, color: &str) -> Vec<Effect> {
        color.clone_into(&mut self.background);
        vec![Effect::RenderNeeded, Effect::SaveNeeded]
    }

    /// Apply a property-panel edit to the primary element and commit it.
    pub fn apply_edit(&mut self, edit: &ElementEdit) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.busy("apply_edit") {
            return fx;
        }
        let Some(id) = self.selection.primary() else {
            return fx;
        };
        let before = self.doc.get(&id).cloned();
        if !self.doc.apply_edit(&id, edit) {
            return fx;
        }
        if self.doc.get(&id) != before.as_ref() {
            self.commit(&mut fx);
            self.refresh_overlay();
            emit(&mut fx, Effect::RenderNeeded);
        }
        fx
    }

    /// Remove every selected element.
    pub fn delete_selection(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.delete_into(&mut fx);
        fx
    }

    /// Paint-ordered element listing, bottom first.
    #[must_use]
    pub fn layers(&self) -> Vec<LayerEntry> {
        let primary = self.selection.primary();
        self.doc
            .iter()
            .map(|el| LayerEntry {
                id: el.id,
                kind: el.kind(),
                selected: self.selection.contains(&el.id),
                primary: primary == Some(el.id),
            })
            .collect()
    }

    /// Select a single element from the layers panel.
    pub fn select_layer(&mut self, id: ElementId) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.busy("select_layer") || !self.doc.contains(&id) {
            return fx;
        }
        self.change_selection(&mut fx, |sel| sel.select_single(id));
        fx
    }

    pub fn undo(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.undo_into(&mut fx);
        fx
    }

    pub fn redo(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.redo_into(&mut fx);
        fx
    }

    /// Abort the active gesture, or clear the selection when idle.
    pub fn cancel(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.cancel_into(&mut fx);
        fx
    }

    // --- Queries ---

    #[must_use]
    pub fn doc(&self) -> &DocStore {
        &self.doc
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn primary_element(&self) -> Option<&Element> {
        self.selection.primary().and_then(|id| self.doc.get(&id))
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Screen rectangle of the marquee being dragged, if any.
    #[must_use]
    pub fn marquee_rect(&self) -> Option<Rect> {
        match &self.input {
            InputState::Marquee { marquee, .. } => Some(marquee.rect()),
            _ => None,
        }
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace or add tool handlers.
    pub fn toolbox_mut(&mut self) -> &mut Toolbox {
        &mut self.toolbox
    }

    // --- Pointer ---

    fn pointer_down(&mut self, ev: &PointerEvent, fx: &mut Vec<Effect>) {
        if !self.input.is_idle() {
            debug!(mode = self.input.name(), "pointer down during gesture; finishing it");
            self.finish_gesture(false, fx);
        }
        let screen = ev.screen;
        let world = self.camera.screen_to_world(screen);
        self.gesture_revision = self.doc.revision();

        if self.space_down || ev.button == Button::Middle {
            self.input = InputState::Panning {
                start_screen: screen,
                start_pan: Point::new(self.camera.pan_x, self.camera.pan_y),
            };
            emit(fx, cursor(CURSOR_GRABBING));
            return;
        }
        if ev.button != Button::Primary {
            return;
        }
        let hit = hit::hit_test(screen, &self.doc, &self.camera, self.overlay.as_ref());
        if let Some(Hit { part, .. }) = hit.filter(|h| h.part != HitPart::Body) {
            if self.begin_handle_drag(part, world, fx) {
                return;
            }
        }
        if self.tool == Tool::Select {
            let body = match hit {
                Some(Hit { element_id, part: HitPart::Body }) => Some(element_id),
                _ => hit::element_at(&self.doc, world),
            };
            match body {
                Some(id) => self.begin_select(id, ev.modifiers.shift, world, fx),
                None => self.begin_marquee(screen, ev.modifiers.shift, fx),
            }
            return;
        }

        self.change_selection(fx, Selection::clear);
        let tool = self.tool;
        if let Some(handler) = self.toolbox.get_mut(tool) {
            let mut ctx = ToolContext { doc: &mut self.doc, camera: &self.camera, style: &mut self.style };
            handler.on_pointer_down(ev, world, &mut ctx);
        }
        self.input = InputState::Drawing { tool };
        emit(fx, Effect::RenderNeeded);
    }

    /// Start a resize or rotate on the overlay target. Returns false if nothing started.
    fn begin_handle_drag(&mut self, part: HitPart, world: Point, fx: &mut Vec<Effect>) -> bool {
        let Some(ov) = self.overlay else {
            return false;
        };
        let Some(el) = self.doc.get(&ov.target) else {
            return false;
        };
        // A stroke's box follows its points and cannot be reshaped.
        if el.is_stroke() {
            return false;
        }
        let id = el.id;
        match part {
            HitPart::Resize(corner) => {
                self.input = if matches!(el.content, Content::Text { .. }) {
                    InputState::ResizingText { id, last_world: world }
                } else {
                    InputState::Resizing { id, corner, start_world: world, start: el.bounds() }
                };
                emit(fx, cursor(resize_cursor(corner)));
            }
            HitPart::Rotate => {
                let center = el.bounds().center();
                self.input = InputState::Rotating {
                    id,
                    center,
                    start_angle: angle(center, world),
                    start_rotation: el.rotation,
                };
                emit(fx, cursor(CURSOR_GRABBING));
            }
            HitPart::Body => return false,
        }
        debug!(%id, mode = self.input.name(), "handle drag started");
        true
    }

    fn begin_select(&mut self, id: ElementId, shift: bool, world: Point, fx: &mut Vec<Effect>) {
        self.change_selection(fx, |sel| {
            if shift {
                sel.toggle(id);
            } else if sel.contains(&id) {
                sel.set_primary(id);
            } else {
                sel.select_single(id);
            }
        });
        if !self.selection.contains(&id) {
            return;
        }
        let Some(el) = self.doc.get(&id) else {
            return;
        };
        let grab_offset = Point::new(world.x - el.x, world.y - el.y);
        let origins = self
            .selection
            .ids()
            .iter()
            .filter_map(|m| self.doc.get(m).map(|e| (*m, Point::new(e.x, e.y))))
            .collect();
        self.input = InputState::Dragging { primary: id, grab_offset, origins };
        emit(fx, cursor(CURSOR_MOVE));
        debug!(%id, members = self.selection.len(), "drag started");
    }

    fn begin_marquee(&mut self, screen: Point, additive: bool, fx: &mut Vec<Effect>) {
        if !additive {
            self.change_selection(fx, Selection::clear);
        }
        self.input = InputState::Marquee { marquee: Marquee::begin(screen), additive };
        emit(fx, cursor(CURSOR_CROSSHAIR));
    }

    fn pointer_move(&mut self, ev: &PointerEvent, fx: &mut Vec<Effect>) {
        let screen = ev.screen;
        let world = self.camera.screen_to_world(screen);
        match &mut self.input {
            InputState::Idle => return,
            InputState::Panning { start_screen, start_pan } => {
                self.camera.pan_x = start_pan.x + (screen.x - start_screen.x);
                self.camera.pan_y = start_pan.y + (screen.y - start_screen.y);
            }
            InputState::Resizing { id, corner, start_world, start } => {
                let next = resize_box(*start, *corner, world.x - start_world.x, world.y - start_world.y);
                if let Some(el) = self.doc.get_mut(id) {
                    el.x = next.x;
                    el.y = next.y;
                    el.width = next.w;
                    el.height = next.h;
                }
            }
            InputState::ResizingText { id, last_world } => {
                let dy = world.y - last_world.y;
                *last_world = world;
                if let Some(el) = self.doc.get_mut(id) {
                    if let Content::Text { font_size, .. } = &mut el.content {
                        *font_size = (*font_size + dy * TEXT_RESIZE_SCALE).max(MIN_FONT_SIZE_PX);
                    }
                }
            }
            InputState::Rotating { id, center, start_angle, start_rotation } => {
                let rotation = *start_rotation + (angle(*center, world) - *start_angle).to_degrees();
                if let Some(el) = self.doc.get_mut(id) {
                    el.rotation = rotation;
                }
            }
            InputState::Dragging { primary, grab_offset, origins } => {
                let Some(&(_, start)) = origins.iter().find(|(m, _)| *m == *primary) else {
                    return;
                };
                let dx = world.x - grab_offset.x - start.x;
                let dy = world.y - grab_offset.y - start.y;
                for (m, origin) in &*origins {
                    if let Some(el) = self.doc.get_mut(m) {
                        el.move_to(origin.x + dx, origin.y + dy);
                    }
                }
            }
            InputState::Marquee { marquee, .. } => {
                marquee.update(screen);
            }
            InputState::Drawing { tool } => {
                if let Some(handler) = self.toolbox.get_mut(*tool) {
                    let mut ctx = ToolContext { doc: &mut self.doc, camera: &self.camera, style: &mut self.style };
                    handler.on_pointer_move(ev, world, &mut ctx);
                }
            }
        }
        self.refresh_overlay();
        emit(fx, Effect::RenderNeeded);
    }

    /// End the active gesture, committing if the scene changed since pointer-down.
    ///
    /// `resolve_marquee` is false when the gesture is being abandoned rather
    /// than released; the marquee then selects nothing.
    fn finish_gesture(&mut self, resolve_marquee: bool, fx: &mut Vec<Effect>) {
        let state = std::mem::take(&mut self.input);
        match state {
            InputState::Idle => return,
            InputState::Marquee { marquee, additive } => {
                if let Some(rect) = marquee.end(&self.camera).filter(|_| resolve_marquee) {
                    let hits = marquee::contained(&self.doc, &rect);
                    debug!(hits = hits.len(), additive, "marquee resolved");
                    if additive {
                        self.change_selection(fx, |sel| sel.extend(hits));
                    } else if !hits.is_empty() {
                        self.change_selection(fx, |sel| sel.select_many(hits));
                    }
                }
            }
            InputState::Drawing { tool } => {
                self.release_tool(tool);
                self.prune_selection(fx);
            }
            _ => {}
        }
        if self.doc.revision() != self.gesture_revision {
            self.commit(fx);
        }
        self.refresh_overlay();
        emit(fx, cursor(if self.space_down { CURSOR_GRAB } else { CURSOR_DEFAULT }));
        emit(fx, Effect::RenderNeeded);
    }

    fn release_tool(&mut self, tool: Tool) {
        if let Some(handler) = self.toolbox.get_mut(tool) {
            let mut ctx = ToolContext { doc: &mut self.doc, camera: &self.camera, style: &mut self.style };
            handler.on_pointer_up(&mut ctx);
        }
    }

    // --- Wheel / keyboard / focus ---

    fn wheel(&mut self, screen: Point, delta: WheelDelta, modifiers: Modifiers, fx: &mut Vec<Effect>) {
        if modifiers.command() {
            let direction = if delta.dy < 0.0 {
                ZoomDirection::In
            } else if delta.dy > 0.0 {
                ZoomDirection::Out
            } else {
                return;
            };
            if !self.camera.zoom_at(screen, direction) {
                return;
            }
            trace!(zoom = self.camera.zoom, "zoomed");
        } else {
            if delta.dx.abs() < f64::EPSILON && delta.dy.abs() < f64::EPSILON {
                return;
            }
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        self.refresh_overlay();
        emit(fx, Effect::RenderNeeded);
    }

    fn key_down(&mut self, key: &Key, modifiers: Modifiers, fx: &mut Vec<Effect>) {
        if key.is_space() {
            if !self.space_down {
                self.space_down = true;
                if self.input.is_idle() {
                    emit(fx, cursor(CURSOR_GRAB));
                }
            }
            return;
        }
        if modifiers.command() {
            if key.is("y") || (key.is("z") && modifiers.shift) {
                self.redo_into(fx);
            } else if key.is("z") {
                self.undo_into(fx);
            }
            return;
        }
        if key.is("Delete") || key.is("Backspace") {
            self.delete_into(fx);
        } else if key.is("Escape") {
            self.cancel_into(fx);
        }
    }

    fn key_up(&mut self, key: &Key, fx: &mut Vec<Effect>) {
        if key.is_space() && self.space_down {
            self.space_down = false;
            if self.input.is_idle() {
                emit(fx, cursor(CURSOR_DEFAULT));
            }
        }
    }

    /// Window blur or lost capture: end the gesture as if released, without selecting.
    fn blur(&mut self, fx: &mut Vec<Effect>) {
        let had_space = std::mem::take(&mut self.space_down);
        if self.input.is_idle() {
            if had_space {
                emit(fx, cursor(CURSOR_DEFAULT));
            }
            return;
        }
        debug!(mode = self.input.name(), "blur during gesture");
        self.finish_gesture(false, fx);
    }

    // --- History / deletion / cancel ---

    fn undo_into(&mut self, fx: &mut Vec<Effect>) {
        if self.busy("undo") {
            return;
        }
        let Some(snapshot) = self.history.undo().cloned() else {
            return;
        };
        self.doc.restore(&snapshot);
        self.after_restore(fx);
    }

    fn redo_into(&mut self, fx: &mut Vec<Effect>) {
        if self.busy("redo") {
            return;
        }
        let Some(snapshot) = self.history.redo().cloned() else {
            return;
        };
        self.doc.restore(&snapshot);
        self.after_restore(fx);
    }

    fn after_restore(&mut self, fx: &mut Vec<Effect>) {
        self.change_selection(fx, Selection::clear);
        emit(fx, Effect::Restored);
        emit(fx, Effect::RenderNeeded);
        emit(fx, Effect::SaveNeeded);
    }

    fn delete_into(&mut self, fx: &mut Vec<Effect>) {
        if self.selection.is_empty() || self.busy("delete") {
            return;
        }
        let doomed = self.selection.ids().to_vec();
        let removed = self.doc.retain(|el| !doomed.contains(&el.id));
        self.change_selection(fx, Selection::clear);
        if removed > 0 {
            debug!(removed, "selection deleted");
            self.commit(fx);
        }
        emit(fx, Effect::RenderNeeded);
    }

    fn cancel_into(&mut self, fx: &mut Vec<Effect>) {
        if self.input.is_idle() {
            self.change_selection(fx, Selection::clear);
            return;
        }
        let state = std::mem::take(&mut self.input);
        debug!(mode = state.name(), "gesture cancelled");
        if let InputState::Drawing { tool } = state {
            self.release_tool(tool);
        }
        if self.doc.revision() != self.gesture_revision {
            if let Some(snapshot) = self.history.current() {
                self.doc.restore(snapshot);
            }
            self.prune_selection(fx);
        }
        self.refresh_overlay();
        emit(fx, cursor(if self.space_down { CURSOR_GRAB } else { CURSOR_DEFAULT }));
        emit(fx, Effect::RenderNeeded);
    }

    // --- Internals ---

    fn commit(&mut self, fx: &mut Vec<Effect>) {
        self.history.commit(self.doc.snapshot());
        emit(fx, Effect::Committed { depth: self.history.depth() });
        emit(fx, Effect::SaveNeeded);
    }

    /// Every selection change goes through here so the overlay can never go stale.
    fn change_selection<F>(&mut self, fx: &mut Vec<Effect>, f: F)
    where
        F: FnOnce(&mut Selection),
    {
        let before = self.selection.clone();
        f(&mut self.selection);
        self.refresh_overlay();
        if self.selection != before {
            emit(fx, Effect::SelectionChanged { primary: self.selection.primary(), count: self.selection.len() });
            emit(fx, Effect::RenderNeeded);
        }
    }

    /// Drop selected ids whose elements no longer exist.
    fn prune_selection(&mut self, fx: &mut Vec<Effect>) {
        let doc = &self.doc;
        let stale: Vec<ElementId> = self.selection.ids().iter().filter(|id| !doc.contains(id)).copied().collect();
        if !stale.is_empty() {
            self.change_selection(fx, |sel| {
                sel.retain(|id| !stale.contains(id));
            });
        }
    }

    fn refresh_overlay(&mut self) {
        self.overlay = self
            .selection
            .primary()
            .and_then(|id| self.doc.get(&id))
            .map(|el| Overlay::compute(el, &self.camera));
    }

    fn busy(&self, op: &str) -> bool {
        let busy = !self.input.is_idle();
        if busy {
            debug!(op, mode = self.input.name(), "ignored during gesture");
        }
        busy
    }
}

fn emit(fx: &mut Vec<Effect>, effect: Effect) {
    if !fx.contains(&effect) {
        fx.push(effect);
    }
}

fn cursor(name: &str) -> Effect {
    Effect::SetCursor { cursor: name.to_owned() }
}

fn resize_cursor(corner: Corner) -> &'static str {
    match corner {
        Corner::TopLeft | Corner::BottomRight => "nwse-resize",
        Corner::TopRight | Corner::BottomLeft => "nesw-resize",
    }
}

/// Angle of `p` around `center`, in radians.
fn angle(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Box produced by dragging `corner` of `start` by `(dx, dy)`.
///
/// Width and height never drop below the minimum element size; when a
/// moving left or top edge hits the floor, the opposite edge stays put.
fn resize_box(start: Rect, corner: Corner, dx: f64, dy: f64) -> Rect {
    let (mut x, mut w) = if corner.moves_left() { (start.x + dx, start.w - dx) } else { (start.x, start.w + dx) };
    let (mut y, mut h) = if corner.moves_top() { (start.y + dy, start.h - dy) } else { (start.y, start.h + dy) };
    if w < MIN_ELEMENT_SIZE {
        w = MIN_ELEMENT_SIZE;
        if corner.moves_left() {
            x = start.right() - MIN_ELEMENT_SIZE;
        }
    }
    if h < MIN_ELEMENT_SIZE {
        h = MIN_ELEMENT_SIZE;
        if corner.moves_top() {
            y = start.bottom() - MIN_ELEMENT_SIZE;
        }
    }
    Rect::new(x, y, w, h)
}
