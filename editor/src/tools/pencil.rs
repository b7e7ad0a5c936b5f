use tracing::debug;

use super::{ToolContext, ToolHandler};
use crate::camera::Point;
use crate::consts::{PENCIL_MIN_STEP, PENCIL_STROKE_WIDTH};
use crate::doc::{Content, Element, ElementId, StrokePath};
use crate::input::PointerEvent;

/// Freehand stroke capture.
#[derive(Debug, Default)]
pub struct PencilTool {
    points: Vec<Point>,
    active: Option<ElementId>,
}

impl ToolHandler for PencilTool {
    fn on_pointer_down(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        self.points = vec![world];
        let stroke = StrokePath {
            points: self.points.clone(),
            path: smooth_path(&self.points),
            color: ctx.style.fill.clone(),
            width: PENCIL_STROKE_WIDTH,
        };
        self.active = Some(ctx.doc.insert(Element::stroke(stroke)));
    }

    fn on_pointer_move(&mut self, _event: &PointerEvent, world: Point, ctx: &mut ToolContext<'_>) {
        let Some(id) = self.active else {
            return;
        };
        if self.points.last().is_some_and(|prev| prev.distance(world) < PENCIL_MIN_STEP) {
            return;
        }
        self.points.push(world);
        let Some(el) = ctx.doc.get_mut(&id) else {
            return;
        };
        if let Content::Stroke(stroke) = &mut el.content {
            stroke.points.clone_from(&self.points);
            stroke.path = smooth_path(&self.points);
            let b = stroke.bounds();
            el.x = b.x;
            el.y = b.y;
            el.width = b.w;
            el.height = b.h;
        }
    }

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>) {
        if let Some(id) = self.active.take() {
            debug!(%id, points = self.points.len(), "stroke finished");
        }
        self.points.clear();
    }
}

/// Path geometry through `points`: a line for the first segment, then
/// quadratic curves through segment midpoints, ending on the last point.
#[must_use]
pub fn smooth_path(points: &[Point]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = format!("M {} {}", first.x, first.y);
    for (i, pair) in points.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        if i == 0 {
            d.push_str(&format!(" L {} {}", cur.x, cur.y));
        } else {
            let mid = Point::new((prev.x + cur.x) / 2.0, (prev.y + cur.y) / 2.0);
            d.push_str(&format!(" Q {} {} {} {}", prev.x, prev.y, mid.x, mid.y));
        }
    }
    if let [.., second_last, last] = points {
        d.push_str(&format!(" Q {} {} {} {}", second_last.x, second_last.y, last.x, last.y));
    }
    d
}
