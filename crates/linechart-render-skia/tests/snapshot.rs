// File: crates/linechart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (seeded sample data) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips; with REQUIRE_SNAPSHOTS=1 a missing snapshot fails.

use linechart_core::theme::find;
use linechart_core::{CanvasSize, LineChart, RandomDataProvider};
use linechart_render_skia::SkiaRenderer;

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn bless_mode() -> bool {
    env_flag("UPDATE_SNAPSHOTS")
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        assert!(
            !env_flag("REQUIRE_SNAPSHOTS"),
            "missing snapshot {}; run once with UPDATE_SNAPSHOTS=1",
            path.display()
        );
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(style_name: &str) -> Vec<u8> {
    let style = find(style_name);
    let chart = LineChart::from_provider(&mut RandomDataProvider::seeded(2021), style);
    let size = CanvasSize::new(540.0, 480.0);
    SkiaRenderer::new(chart.style.background)
        .render_to_png_bytes(&chart.render(size), size)
        .expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_shadow_chart() {
    write_or_compare(&snapshot_path("shadow.png"), &render_bytes("shadow"));
}

#[test]
fn golden_dark_chart() {
    write_or_compare(&snapshot_path("dark.png"), &render_bytes("dark"));
}

#[test]
fn seeded_render_is_pixel_stable() {
    let decode = |b: &[u8]| image::load_from_memory(b).expect("decode").to_rgba8();
    let first = decode(&render_bytes("shadow"));
    let second = decode(&render_bytes("shadow"));
    assert_eq!(first.dimensions(), (540, 480));
    assert_eq!(first.as_raw(), second.as_raw(), "same seed should rasterize identically");
    assert_ne!(first.as_raw(), decode(&render_bytes("dark")).as_raw());
}
