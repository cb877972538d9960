// File: crates/linechart-core/tests/svg.rs
// Purpose: Validate SVG serialization of a rendered chart.

use linechart_core::svg::{path_data, to_svg, write_svg};
use linechart_core::{render, Brush, CanvasSize, ChartStyle, Color, DrawCommand, Path, Point};

fn sample() -> (Vec<DrawCommand>, CanvasSize) {
    let pts = vec![Point::new(0.0, 1.0), Point::new(1.0, 10.0), Point::new(2.0, 5.0)];
    let size = CanvasSize::new(300.0, 200.0);
    (render(&pts, size, &ChartStyle::default()), size)
}

#[test]
fn document_contains_every_primitive() {
    let (cmds, size) = sample();
    let doc = to_svg(&cmds, size, Some(Color::WHITE));
    assert!(doc.starts_with("<svg "));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert!(doc.contains(r#"viewBox="0 0 300 200""#));
    assert_eq!(doc.matches("<line ").count(), 4);
    assert_eq!(doc.matches("<circle ").count(), 3);
    assert_eq!(doc.matches("<path ").count(), 1);
    assert!(doc.contains(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##));
}

#[test]
fn gradient_is_defined_and_referenced() {
    let (cmds, size) = sample();
    let doc = to_svg(&cmds, size, None);
    assert!(doc.contains("<linearGradient id=\"shadow1\""));
    assert!(doc.contains(r#"y2="200.00""#));
    assert!(doc.contains(r#"fill="url(#shadow1)""#));
    assert_eq!(doc.matches("<stop ").count(), 2);
    assert!(!doc.contains("<rect"));
}

#[test]
fn translucent_colors_emit_opacity() {
    let (cmds, size) = sample();
    let doc = to_svg(&cmds, size, None);
    assert!(doc.contains(r##"fill="#ff0000" fill-opacity="0.502""##));
    assert!(doc.contains(r##"stroke="#ff0000" stroke-opacity="0.502""##));
}

#[test]
fn path_data_format() {
    let mut p = Path::new();
    p.move_to((16.0, 200.0)).line_to((150.0, 20.5)).close();
    assert_eq!(path_data(&p), "M16.00 200.00 L150.00 20.50 Z");
}

#[test]
fn write_creates_parent_dirs() {
    let (cmds, size) = sample();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/chart.svg");
    write_svg(&out, &cmds, size, Some(Color::WHITE)).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert!(text.contains("<linearGradient"));
}

#[test]
fn solid_fill_uses_plain_color() {
    let mut p = Path::new();
    p.move_to((0.0, 0.0)).line_to((10.0, 0.0)).line_to((10.0, 10.0)).close();
    let cmds = vec![DrawCommand::FillPath { path: p, brush: Brush::Solid(Color::from_argb(64, 0, 128, 255)) }];
    let doc = to_svg(&cmds, CanvasSize::new(10.0, 10.0), None);
    assert!(doc.contains(r##"fill="#0080ff" fill-opacity="0.251""##));
    assert!(!doc.contains("<defs>"));
}
