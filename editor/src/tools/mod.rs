//! Drawing tools and the contract they implement.
//!
//! A tool receives pointer-down, move and up while the editor is in drawing
//! mode. It may read the camera and mutate the scene store through
//! [`ToolContext`]; selection and history stay with the editor, which
//! commits after pointer-up if the tool changed anything.


mod erase;
mod image;
mod pencil;
mod shape;
mod text;

use std::collections::HashMap;
use std::fmt;

pub use erase::EraseTool;
pub use image::ImageTool;
pub use pencil::{PencilTool, smooth_path};
pub use shape::ShapeTool;
pub use text::TextTool;

use crate::camera::{Camera, Point};
use crate::consts::DEFAULT_FILL;
use crate::doc::{Content, DocStore};
use crate::input::{PointerEvent, Tool};

/// Style applied to newly created elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolStyle {
    /// Fill for shapes, colour for text and strokes.
    pub fill: String,
    /// Image waiting to be placed by the image tool.
    pub pending_image: Option<String>,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self { fill: DEFAULT_FILL.to_owned(), pending_image: None }
    }
}

/// What a tool may see and touch while handling an event.
pub struct ToolContext<'a> {
    pub doc: &'a mut DocStore,
    pub camera: &'a Camera,
    pub style: &'a mut ToolStyle,
}

/// Pointer callbacks for a drawing tool. All default to no-ops.
///
/// `world` is the pointer position already converted through the camera.
pub trait ToolHandler {
    fn on_pointer_down(&mut self, _event: &PointerEvent, _world: Point, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_move(&mut self, _event: &PointerEvent, _world: Point, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>) {}
}

/// Registry of tool handlers keyed by [`Tool`].
pub struct Toolbox {
    handlers: HashMap<Tool, Box<dyn ToolHandler>>,
}

impl Default for Toolbox {
    fn default() -> Self {
        let mut tb = Self::empty();
        tb.register(Tool::Rectangle, Box::new(ShapeTool::new(Content::Rectangle)));
        tb.register(Tool::Circle, Box::new(ShapeTool::new(Content::Circle)));
        tb.register(Tool::Triangle, Box::new(ShapeTool::new(Content::Triangle)));
        tb.register(Tool::Text, Box::new(TextTool));
        tb.register(Tool::Image, Box::new(ImageTool));
        tb.register(Tool::Pencil, Box::new(PencilTool::default()));
        tb.register(Tool::Erase, Box::new(EraseTool::default()));
        tb
    }
}

impl fmt::Debug for Toolbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl Toolbox {
    /// A toolbox with every built-in tool registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A toolbox with no handlers.
    #[must_use]
    pub fn empty() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Install `handler` for `tool`, returning the handler it replaced.
    pub fn register(&mut self, tool: Tool, handler: Box<dyn ToolHandler>) -> Option<Box<dyn ToolHandler>> {
        self.handlers.insert(tool, handler)
    }

    #[must_use]
    pub fn has(&self, tool: Tool) -> bool {
        self.handlers.contains_key(&tool)
    }

    pub fn get_mut(&mut self, tool: Tool) -> Option<&mut (dyn ToolHandler + 'static)> {
        self.handlers.get_mut(&tool).map(Box::as_mut)
    }
}
