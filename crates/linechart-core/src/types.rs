// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (points, canvas size, default dimensions).

use crate::error::{Error, Result};

/// Default surface width in pixels.
pub const WIDTH: f32 = 1080.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 960.0;

/// A data point in value space. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Drawing surface size, in pixels.
/// Contract: both extents are finite and non-negative when built through `try_new`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Unchecked constructor; the caller vouches for the extents.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validate extents coming from outside (CLI flags, host callbacks).
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if !ok(width) || !ok(height) {
            return Err(Error::InvalidCanvasSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Pixel dimensions for a raster surface: rounded up, never below 1x1.
    pub fn raster_dims(&self) -> (i32, i32) {
        let w = self.width.ceil().max(1.0) as i32;
        let h = self.height.ceil().max(1.0) as i32;
        (w, h)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
