// File: crates/linechart-core/src/chart.rs
// Summary: LineChart and the pure rendering pipeline: points + canvas size -> draw commands.

use crate::data::DataProvider;
use crate::draw::{Brush, DrawCommand, Path};
use crate::geometry::Offset;
use crate::scale::{Extents, MaxScale};
use crate::series::PointSeries;
use crate::theme::ChartStyle;
use crate::types::{CanvasSize, Point};

pub struct LineChart {
    pub series: PointSeries,
    pub style: ChartStyle,
}

impl LineChart {
    pub fn new(series: impl Into<PointSeries>) -> Self {
        Self { series: series.into(), style: ChartStyle::default() }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Pull one batch of points from `provider`.
    pub fn from_provider(provider: &mut dyn DataProvider, style: ChartStyle) -> Self {
        Self { series: PointSeries::new(provider.points()), style }
    }

    pub fn render(&self, size: CanvasSize) -> Vec<DrawCommand> {
        render(self.series.points(), size, &self.style)
    }
}

/// Render `points` onto a `size` canvas.
///
/// Output order: vertical axis, horizontal axis, then for each point its
/// outgoing segment (if any) followed by its marker, then the shadow fill.
/// Larger y values land nearer the bottom edge; the y axis is not flipped.
pub fn render(points: &[Point], size: CanvasSize, style: &ChartStyle) -> Vec<DrawCommand> {
    let margin = style.margin_px();
    let (w, h) = (size.width, size.height);
    let mut out = Vec::with_capacity(2 + points.len() * 2 + 1);

    draw_axes(&mut out, margin, w, h, style);

    let ext = Extents::of(points);
    let sx = MaxScale::new(ext.x_max, w);
    let sy = MaxScale::new(ext.y_max, h);
    if !points.is_empty() && (sx.is_degenerate() || sy.is_degenerate()) {
        log::warn!(
            "degenerate extents (x_max={}, y_max={}); collapsing to 0",
            ext.x_max, ext.y_max
        );
    }

    let positions = normalized_positions(points, sx, sy, margin);
    let line_color = style.line_color();
    let radius = style.marker_radius_px();

    for (i, &p) in positions.iter().enumerate() {
        if let Some(&next) = positions.get(i + 1) {
            out.push(DrawCommand::Line {
                from: p,
                to: next,
                color: line_color,
                stroke_width: style.stroke_width,
            });
        }
        out.push(DrawCommand::Circle { center: p, radius, color: line_color });
    }

    out.push(shadow_fill(&positions, margin, w, h, style));

    log::debug!(
        "rendered {} points on {}x{} (x_max={}, y_max={}) -> {} commands",
        points.len(), w, h, ext.x_max, ext.y_max, out.len()
    );
    out
}

/// Pixel positions for every point, with the first shifted right and the last
/// shifted left by `margin` (a single point receives both).
pub fn normalized_positions(points: &[Point], sx: MaxScale, sy: MaxScale, margin: f32) -> Vec<Offset> {
    let last = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut x = sx.to_px(p.x);
            let y = sy.to_px(p.y);
            if i == 0 { x += margin; }
            if i == last { x -= margin; }
            Offset::new(x, y)
        })
        .collect()
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(out: &mut Vec<DrawCommand>, m: f32, w: f32, h: f32, style: &ChartStyle) {
    out.push(DrawCommand::Line {
        from: Offset::new(m, m),
        to: Offset::new(m, h),
        color: style.axis,
        stroke_width: style.stroke_width,
    });
    out.push(DrawCommand::Line {
        from: Offset::new(m, h),
        to: Offset::new(w - m, h),
        color: style.axis,
        stroke_width: style.stroke_width,
    });
}

/// Closed polygon: axis origin, every point, bottom-right inset, bottom-left edge.
fn shadow_fill(positions: &[Offset], m: f32, w: f32, h: f32, style: &ChartStyle) -> DrawCommand {
    let mut path = Path::new();
    path.move_to((m, h));
    for &p in positions {
        path.line_to(p);
    }
    path.line_to((w - m, h)).line_to((0.0, h)).close();

    DrawCommand::FillPath {
        path,
        brush: Brush::VerticalGradient {
            colors: vec![style.fill_top_color(), style.gradient_bottom],
            start_y: 0.0,
            end_y: h,
        },
    }
}
