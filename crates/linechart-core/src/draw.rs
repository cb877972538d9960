// File: crates/linechart-core/src/draw.rs
// Summary: Renderer-agnostic draw commands (lines, filled circles, filled paths) consumed by backends.

use crate::color::Color;
use crate::geometry::Offset;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Stroked segment with butt caps.
    Line { from: Offset, to: Offset, color: Color, stroke_width: f32 },
    /// Filled circle.
    Circle { center: Offset, radius: f32, color: Color },
    /// Filled closed path.
    FillPath { path: Path, brush: Brush },
}

impl DrawCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Line { .. } => "line",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::FillPath { .. } => "fill_path",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Offset),
    LineTo(Offset),
    Close,
}

/// Polyline path built from move/line verbs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: impl Into<Offset>) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo(p.into()));
        self
    }

    pub fn line_to(&mut self, p: impl Into<Offset>) -> &mut Self {
        self.verbs.push(PathVerb::LineTo(p.into()));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Every MoveTo/LineTo point, in order.
    pub fn vertices(&self) -> Vec<Offset> {
        self.verbs
            .iter()
            .filter_map(|v| match *v {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => Some(p),
                PathVerb::Close => None,
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.verbs.last(), Some(PathVerb::Close))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Colors spread evenly from `start_y` (first) to `end_y` (last); clamped outside.
    VerticalGradient { colors: Vec<Color>, start_y: f32, end_y: f32 },
}
