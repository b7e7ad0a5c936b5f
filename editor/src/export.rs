//! Standalone SVG rendering of a scene.
//!
//! Elements are written in world coordinates, one SVG node per element in
//! paint order, over a full-size background rect. Rotation becomes a
//! `rotate(deg cx cy)` transform about the element centre.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::doc::{Content, Element};
use crate::engine::EditorContext;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "Inter, sans-serif";

/// Render `elements` as an SVG document of the given pixel size.
pub fn to_svg<'a>(elements: impl IntoIterator<Item = &'a Element>, background: &str, width: f64, height: f64) -> String {
    let mut parts = vec![
        format!(r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#),
        format!(r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}" />"#, escape(background)),
    ];
    parts.extend(elements.into_iter().map(element_node));
    parts.push("</svg>".to_owned());
    parts.join("\n")
}

fn element_node(el: &Element) -> String {
    let (x, y, w, h) = (el.x, el.y, el.width, el.height);
    let fill = escape(&el.fill);
    let opacity = el.opacity;
    let transform = rotation_attr(el);
    match &el.content {
        Content::Rectangle => {
            let r = el.corner_radius;
            format!(
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="{fill}" opacity="{opacity}"{transform} />"#
            )
        }
        Content::Circle => {
            let c = el.bounds().center();
            let r = w.min(h) / 2.0;
            format!(r#"<circle cx="{}" cy="{}" r="{r}" fill="{fill}" opacity="{opacity}"{transform} />"#, c.x, c.y)
        }
        Content::Triangle => {
            let points = format!("{},{y} {x},{} {},{}", x + w / 2.0, y + h, x + w, y + h);
            format!(r#"<polygon points="{points}" fill="{fill}" opacity="{opacity}"{transform} />"#)
        }
        Content::Text { text, font_size } => {
            let fs = *font_size;
            let mut lines = text.lines();
            let first = escape(lines.next().unwrap_or_default());
            let mut body = first;
            for line in lines {
                body.push_str(&format!(r#"<tspan x="{x}" dy="1.2em">{}</tspan>"#, escape(line)));
            }
            format!(
                r#"<text x="{x}" y="{}" fill="{fill}" font-size="{fs}" font-family="{FONT_FAMILY}" opacity="{opacity}"{transform}>{body}</text>"#,
                y + fs
            )
        }
        Content::Image { src } => {
            format!(
                r#"<image href="{}" x="{x}" y="{y}" width="{w}" height="{h}" opacity="{opacity}"{transform} />"#,
                escape(src)
            )
        }
        Content::Stroke(stroke) => format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" />"#,
            escape(&stroke.path),
            escape(&stroke.color),
            stroke.width
        ),
    }
}

fn rotation_attr(el: &Element) -> String {
    if el.rotation.abs() < f64::EPSILON {
        return String::new();
    }
    let c = el.bounds().center();
    format!(r#" transform="rotate({} {} {})""#, el.rotation, c.x, c.y)
}

/// Escape XML special characters for text and attribute content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

impl EditorContext {
    /// The current scene as an SVG document.
    #[must_use]
    pub fn export_svg(&self, width: f64, height: f64) -> String {
        to_svg(self.doc().iter(), self.background(), width, height)
    }
}
