// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia backend; replays core draw commands on CPU raster surfaces and encodes PNG / RGBA.

use anyhow::Result;
use skia_safe as skia;

use linechart_core::{Brush, CanvasSize, Color, DrawCommand, Offset, Path, PathVerb};

pub struct SkiaRenderer {
    pub background: Color,
}

impl SkiaRenderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Clear with the background and replay `commands` in order.
    pub fn draw(&self, canvas: &skia::Canvas, commands: &[DrawCommand]) {
        canvas.clear(to_skia(self.background));
        for cmd in commands {
            draw_command(canvas, cmd);
        }
    }

    /// Render to a fresh raster surface sized to `size`.
    fn render_surface(&self, commands: &[DrawCommand], size: CanvasSize) -> Result<skia::Surface> {
        let (w, h) = size.raster_dims();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.draw(surface.canvas(), commands);
        log::debug!("rasterized {} commands onto {}x{}", commands.len(), w, h);
        Ok(surface)
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, commands: &[DrawCommand], size: CanvasSize) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(commands, size)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        commands: &[DrawCommand],
        size: CanvasSize,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(commands, size)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::debug!("wrote png {}", path.display());
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, commands: &[DrawCommand], size: CanvasSize) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(commands, size)?;
        let (w, h) = size.raster_dims();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from surface failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

// ---- helpers ----------------------------------------------------------------

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(o: Offset) -> skia::Point {
    skia::Point::new(o.x, o.y)
}

fn draw_command(canvas: &skia::Canvas, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Line { from, to, color, stroke_width } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(*stroke_width);
            paint.set_color(to_skia(*color));
            canvas.draw_line(pt(*from), pt(*to), &paint);
        }
        DrawCommand::Circle { center, radius, color } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(to_skia(*color));
            canvas.draw_circle(pt(*center), *radius, &paint);
        }
        DrawCommand::FillPath { path, brush } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            apply_brush(&mut paint, brush);
            canvas.draw_path(&to_skia_path(path), &paint);
        }
    }
}

fn apply_brush(paint: &mut skia::Paint, brush: &Brush) {
    match brush {
        Brush::Solid(c) => {
            paint.set_color(to_skia(*c));
        }
        Brush::VerticalGradient { colors, start_y, end_y } => {
            let stops: Vec<skia::Color> = colors.iter().copied().map(to_skia).collect();
            let shader = skia::Shader::linear_gradient(
                (skia::Point::new(0.0, *start_y), skia::Point::new(0.0, *end_y)),
                stops.as_slice(),
                None,
                skia::TileMode::Clamp,
                None,
                None,
            );
            match shader {
                Some(s) => {
                    paint.set_shader(s);
                }
                // fewer than two stops: paint the single color, if any
                None => {
                    log::warn!("gradient with {} stops; falling back to solid fill", colors.len());
                    if let Some(c) = colors.first() {
                        paint.set_color(to_skia(*c));
                    }
                }
            }
        }
    }
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for verb in path.verbs() {
        match *verb {
            PathVerb::MoveTo(p) => { out.move_to(pt(p)); }
            PathVerb::LineTo(p) => { out.line_to(pt(p)); }
            PathVerb::Close => { out.close(); }
        }
    }
    out
}
