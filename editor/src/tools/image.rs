use tracing::debug;

use super::{ToolContext, ToolHandler};
use crate::camera::{Point, Rect};
use crate::consts::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
use crate::doc::{Content, Element};
use crate::input::PointerEvent;

/// Places the pending image at the click position, consuming it.
#[derive(Debug, Default)]
pub struct ImageTool;

impl ToolHandler for ImageTool {
    fn on_pointer_down(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        let Some(src) = ctx.style.pending_image.take() else {
            debug!("image tool clicked with nothing pending");
            return;
        };
        let bounds = Rect::new(world.x, world.y, DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT);
        let id = ctx.doc.insert(Element::new(Content::Image { src }, bounds, &ctx.style.fill));
        debug!(%id, "image placed");
    }
}
