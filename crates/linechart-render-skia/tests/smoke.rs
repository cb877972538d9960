// File: crates/linechart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use linechart_core::{render, CanvasSize, ChartStyle, Point};
use linechart_render_skia::SkiaRenderer;

#[test]
fn render_smoke_png() {
    let points = vec![
        Point::new(0.0, 3.0),
        Point::new(1.0, 12.0),
        Point::new(2.0, 7.0),
        Point::new(3.0, 30.0),
        Point::new(4.0, 18.0),
    ];
    let size = CanvasSize::new(400.0, 240.0);
    let commands = render(&points, size, &ChartStyle::default());
    let renderer = SkiaRenderer::default();

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");
    renderer.render_to_png(&commands, size, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(&commands, size).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (400, 240));
}

#[test]
fn empty_and_fractional_sizes_still_rasterize() {
    let renderer = SkiaRenderer::default();
    let size = CanvasSize::new(0.0, 10.5);
    let commands = render(&[], size, &ChartStyle::default());
    let (px, w, h, _) = renderer.render_to_rgba8(&commands, size).expect("rgba render");
    assert_eq!((w, h), (1, 11));
    assert_eq!(px.len(), 11 * 4);
}
