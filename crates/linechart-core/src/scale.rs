// File: crates/linechart-core/src/scale.rs
// Summary: Max-relative normalization from value space into pixel extents.

use crate::types::Point;

/// Map `v` into `[0, extent]` proportionally to `v_max`: `v / v_max * extent`.
/// A zero (or non-finite) `v_max` yields `0.0` instead of a division fault.
#[inline]
pub fn normalize(v: f64, v_max: f64, extent: f32) -> f32 {
    if is_zero_max(v_max) {
        return 0.0;
    }
    ((v / v_max) * extent as f64) as f32
}

#[inline]
fn is_zero_max(v_max: f64) -> bool {
    v_max == 0.0 || !v_max.is_finite()
}

/// Per-axis scale: one maximum mapped onto one pixel extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxScale {
    pub max: f64,
    pub extent: f32,
}

impl MaxScale {
    pub const fn new(max: f64, extent: f32) -> Self {
        Self { max, extent }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        normalize(v, self.max, self.extent)
    }
    /// True when every value will collapse to 0.
    pub fn is_degenerate(&self) -> bool {
        is_zero_max(self.max)
    }
}

/// Maximum x and y across a point sequence; 0 for an empty sequence.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Extents {
    pub x_max: f64,
    pub y_max: f64,
}

impl Extents {
    pub fn of(points: &[Point]) -> Self {
        let x_max = max_by(points, |p| p.x);
        let y_max = max_by(points, |p| p.y);
        Self { x_max, y_max }
    }
}

fn max_by(points: &[Point], f: impl Fn(&Point) -> f64) -> f64 {
    points
        .iter()
        .map(f)
        .fold(None, |acc: Option<f64>, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
        .unwrap_or(0.0)
}
