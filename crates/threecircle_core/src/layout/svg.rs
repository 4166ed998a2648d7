//! SVG serialization of a rendered [`Diagram`].
//!
//! Coordinates are written exactly as the scene graph holds them. Region text
//! is clipped to its box through a `clipPath`, so long lists never reflow.

use crate::layout::diagram::{Diagram, RegionPrimitive};
use crate::layout::geometry::DiagramStyle;

const PLACEHOLDER_GLYPH: &str = "—";
const BULLET: &str = "• ";

/// Serializes the diagram into a standalone SVG document.
pub fn render_svg(diagram: &Diagram, style: &DiagramStyle) -> String {
    let mut svg = String::new();
    let (width, height) = (diagram.width, diagram.height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" font-family=\"{}\">",
        escape_xml(&style.font_family)
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&style.background)
    ));

    svg.push_str("<defs>");
    for region in &diagram.regions {
        svg.push_str(&format!(
            "<clipPath id=\"{}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
            clip_id(region),
            region.x,
            region.y,
            region.width,
            region.height
        ));
    }
    svg.push_str("</defs>");

    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\">{}</text>",
        diagram.title.x,
        diagram.title.y,
        style.title_font_size,
        escape_xml(&style.title_color),
        escape_xml(&diagram.title.text)
    ));

    svg.push_str("<g>");
    for circle in &diagram.circles {
        svg.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            circle.cx,
            circle.cy,
            circle.r,
            escape_xml(&circle.fill),
            escape_xml(&circle.stroke)
        ));
    }
    svg.push_str("</g>");

    for caption in &diagram.captions {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\">{}</text>",
            caption.x,
            caption.y,
            style.caption_font_size,
            escape_xml(&style.caption_color),
            escape_xml(&caption.text)
        ));
    }

    for region in &diagram.regions {
        svg.push_str(&region_svg(region, style));
    }

    svg.push_str("<g>");
    for entry in &diagram.legend {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            entry.x,
            entry.y,
            entry.size,
            entry.size,
            escape_xml(&entry.fill),
            escape_xml(&style.stroke)
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            entry.label.x,
            entry.label.y,
            style.legend_font_size,
            escape_xml(&style.legend_color),
            escape_xml(&entry.label.text)
        ));
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn region_svg(region: &RegionPrimitive, style: &DiagramStyle) -> String {
    let mut out = String::new();
    let caption_y = region.y + style.caption_font_size;
    out.push_str(&format!(
        "<g id=\"region-{}\" clip-path=\"url(#{})\">",
        region.region.as_str(),
        clip_id(region)
    ));
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{caption_y}\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\">{}</text>",
        region.x,
        style.caption_font_size,
        escape_xml(&style.caption_color),
        escape_xml(&region.caption)
    ));

    let first_line_y = caption_y + style.caption_gap + style.item_font_size;
    if region.names.is_empty() {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{first_line_y}\" font-size=\"{}\" fill=\"{}\">{PLACEHOLDER_GLYPH}</text>",
            region.x,
            style.item_font_size,
            escape_xml(&style.placeholder_color)
        ));
    }
    for (idx, name) in region.names.iter().enumerate() {
        let y = first_line_y + style.item_line_height * idx as f64;
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{y}\" font-size=\"{}\">{BULLET}{}</text>",
            region.x,
            style.item_font_size,
            escape_xml(name)
        ));
    }

    out.push_str("</g>");
    out
}

fn clip_id(region: &RegionPrimitive) -> String {
    format!("clip-{}", region.region.as_str())
}

/// Escapes markup characters and drops C0 controls XML 1.0 cannot carry.
fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            ch if ch.is_ascii_control() && ch != '\u{7f}' => {}
            ch => out.push(ch),
        }
    }
    out
}
