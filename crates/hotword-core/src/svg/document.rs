//! Minimal standalone SVG document.

use std::fmt::Write;

use super::path::{SvgPath, fmt_num};
use crate::tree::Point;

/// Escape text for use in XML content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// A drawing surface collecting shapes in paint order.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    view_box: Option<[f64; 4]>,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible region.
    pub fn set_view_box(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.view_box = Some([x, y, width, height]);
    }

    /// Number of drawn elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Draw a filled circle.
    pub fn draw_circle(&mut self, center: Point, radius: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            escape(fill)
        ));
    }

    /// Draw a text label with its baseline starting at `position`.
    pub fn draw_text(&mut self, position: Point, text: &str, font_size: f64) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{}">{}</text>"#,
            fmt_num(position.x),
            fmt_num(position.y),
            fmt_num(font_size),
            escape(text)
        ));
    }

    /// Stroke `path` without fill. Empty paths are skipped.
    pub fn draw_path(&mut self, path: &SvgPath, stroke: &str, stroke_width: f64) {
        if path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path.as_str(),
            escape(stroke),
            fmt_num(stroke_width)
        ));
    }

    /// Serialize the document.
    pub fn render(&self) -> String {
        let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1""#);
        if let Some([x, y, w, h]) = self.view_box {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                r#" viewBox="{} {} {} {}" width="{}" height="{}""#,
                fmt_num(x),
                fmt_num(y),
                fmt_num(w),
                fmt_num(h),
                fmt_num(w),
                fmt_num(h)
            );
        }
        out.push_str(">\n");
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}
