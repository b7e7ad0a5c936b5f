use tracing::debug;

use super::{ToolContext, ToolHandler};
use crate::camera::{Point, Rect};
use crate::doc::{Content, Element, ElementId};
use crate::input::PointerEvent;

/// Drags out a rectangle, circle or triangle from the pointer-down anchor.
///
/// The element is created on the first move, so a click without a drag
/// leaves the scene untouched.
#[derive(Debug)]
pub struct ShapeTool {
    template: Content,
    anchor: Option<Point>,
    active: Option<ElementId>,
}

impl ShapeTool {
    #[must_use]
    pub fn new(template: Content) -> Self {
        Self { template, anchor: None, active: None }
    }
}

impl ToolHandler for ShapeTool {
    fn on_pointer_down(&mut self, _event: &PointerEvent, world: Point, _ctx: &mut ToolContext<'_>) {
        self.anchor = Some(world);
        self.active = None;
    }

    fn on_pointer_move(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let rect = Rect::from_corners(anchor, world);
        match self.active {
            Some(id) => {
                if let Some(el) = ctx.doc.get_mut(&id) {
                    el.x = rect.x;
                    el.y = rect.y;
                    el.width = rect.w;
                    el.height = rect.h;
                }
            }
            None => {
                let id = ctx.doc.insert(Element::new(self.template.clone(), rect, &ctx.style.fill));
                debug!(%id, kind = ?self.template.kind(), "shape created");
                self.active = Some(id);
            }
        }
    }

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>) {
        self.anchor = None;
        self.active = None;
    }
}
