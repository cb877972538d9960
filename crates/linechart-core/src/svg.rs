// File: crates/linechart-core/src/svg.rs
// Summary: Vector output; serializes draw commands into a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path as FsPath;

use crate::color::Color;
use crate::draw::{Brush, DrawCommand, Path, PathVerb};
use crate::error::Result;
use crate::types::CanvasSize;

/// Serialize `commands` as an SVG document sized to `size`.
pub fn to_svg(commands: &[DrawCommand], size: CanvasSize, background: Option<Color>) -> String {
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_id = 0usize;

    for cmd in commands {
        // write! into a String cannot fail
        match cmd {
            DrawCommand::Line { from, to, color, stroke_width } => {
                let _ = writeln!(
                    body,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"{} stroke-width="{:.2}"/>"#,
                    from.x, from.y, to.x, to.y,
                    color.to_hex_rgb(), opacity_attr("stroke-opacity", *color), stroke_width
                );
            }
            DrawCommand::Circle { center, radius, color } => {
                let _ = writeln!(
                    body,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"{}/>"#,
                    center.x, center.y, radius,
                    color.to_hex_rgb(), opacity_attr("fill-opacity", *color)
                );
            }
            DrawCommand::FillPath { path, brush } => {
                let fill = match brush {
                    Brush::Solid(c) => format!(r#"fill="{}"{}"#, c.to_hex_rgb(), opacity_attr("fill-opacity", *c)),
                    Brush::VerticalGradient { colors, start_y, end_y } => {
                        gradient_id += 1;
                        let id = format!("shadow{gradient_id}");
                        write_gradient(&mut defs, &id, colors, *start_y, *end_y);
                        format!(r#"fill="url(#{id})""#)
                    }
                };
                let _ = writeln!(body, r#"  <path d="{}" {}/>"#, path_data(path), fill);
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height
    );
    if !defs.is_empty() {
        let _ = writeln!(out, "  <defs>\n{defs}  </defs>");
    }
    if let Some(bg) = background {
        let _ = writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="{}"{}/>"#,
            bg.to_hex_rgb(),
            opacity_attr("fill-opacity", bg)
        );
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write_svg(
    path: impl AsRef<FsPath>,
    commands: &[DrawCommand],
    size: CanvasSize,
    background: Option<Color>,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(commands, size, background))?;
    log::debug!("wrote svg {}", path.display());
    Ok(())
}

/// SVG path data (`M x y L x y ... Z`).
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for verb in path.verbs() {
        if !d.is_empty() { d.push(' '); }
        let _ = match verb {
            PathVerb::MoveTo(p) => write!(d, "M{:.2} {:.2}", p.x, p.y),
            PathVerb::LineTo(p) => write!(d, "L{:.2} {:.2}", p.x, p.y),
            PathVerb::Close => write!(d, "Z"),
        };
    }
    d
}

fn write_gradient(defs: &mut String, id: &str, colors: &[Color], start_y: f32, end_y: f32) {
    let _ = writeln!(
        defs,
        r#"    <linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{start_y:.2}" x2="0" y2="{end_y:.2}">"#
    );
    let last = colors.len().saturating_sub(1).max(1) as f32;
    for (i, c) in colors.iter().enumerate() {
        let _ = writeln!(
            defs,
            r#"      <stop offset="{:.3}" stop-color="{}" stop-opacity="{:.3}"/>"#,
            i as f32 / last,
            c.to_hex_rgb(),
            c.alpha_f32()
        );
    }
    defs.push_str("    </linearGradient>\n");
}

fn opacity_attr(name: &str, c: Color) -> String {
    if c.a == 255 { String::new() } else { format!(r#" {name}="{:.3}""#, c.alpha_f32()) }
}
