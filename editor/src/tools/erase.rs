use tracing::debug;

use super::{ToolContext, ToolHandler};
use crate::camera::Point;
use crate::consts::ERASE_RADIUS_PX;
use crate::doc::Content;
use crate::input::PointerEvent;

/// Removes strokes that pass near the pointer while the button is held.
#[derive(Debug, Default)]
pub struct EraseTool {
    erasing: bool,
}

impl EraseTool {
    fn erase_at(world: Point, ctx: &mut ToolContext<'_>) {
        let radius = ctx.camera.screen_dist_to_world(ERASE_RADIUS_PX);
        let removed = ctx.doc.retain(|el| match &el.content {
            Content::Stroke(stroke) => stroke.distance_to(world) > radius,
            _ => true,
        });
        if removed > 0 {
            debug!(removed, "strokes erased");
        }
    }
}

impl ToolHandler for EraseTool {
    fn on_pointer_down(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        self.erasing = true;
        Self::erase_at(world, ctx);
    }

    fn on_pointer_move(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        if self.erasing {
            Self::erase_at(world, ctx);
        }
    }

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>) {
        self.erasing = false;
    }
}
