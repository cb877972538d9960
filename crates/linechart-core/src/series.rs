// File: crates/linechart-core/src/series.rs
// Summary: Ordered point sequence rendered left to right; adjacency defines line segments.

use crate::scale::Extents;
use crate::types::Point;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSeries {
    points: Vec<Point>,
}

impl PointSeries {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from raw `(x, y)` pairs, keeping their order.
    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        Self { points: data.iter().copied().map(Point::from).collect() }
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Maximum x, or 0.0 when empty.
    pub fn x_max(&self) -> f64 { self.extents().x_max }
    /// Maximum y, or 0.0 when empty.
    pub fn y_max(&self) -> f64 { self.extents().y_max }

    pub fn extents(&self) -> Extents { Extents::of(&self.points) }
}

impl From<Vec<Point>> for PointSeries {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
