use tracing::debug;

use super::{ToolContext, ToolHandler};
use crate::camera::{Point, Rect};
use crate::consts::{DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT};
use crate::doc::{Content, Element};
use crate::input::PointerEvent;

/// Places a default text element at the click position.
#[derive(Debug, Default)]
pub struct TextTool;

impl ToolHandler for TextTool {
    fn on_pointer_down(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        let content = Content::Text { text: DEFAULT_TEXT.to_owned(), font_size: DEFAULT_FONT_SIZE_PX };
        let mut el = Element::new(content, Rect::new(world.x, world.y, 0.0, 0.0), &ctx.style.fill);
        el.fit_text();
        let id = ctx.doc.insert(el);
        debug!(%id, "text placed");
    }
}
