// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the point model, normalizer and draw-command renderer.

pub mod chart;
pub mod color;
pub mod data;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{render, LineChart};
pub use color::Color;
pub use data::{DataProvider, RandomDataProvider, StaticDataProvider};
pub use draw::{Brush, DrawCommand, Path, PathVerb};
pub use error::{Error, Result};
pub use geometry::Offset;
pub use scale::{normalize, Extents, MaxScale};
pub use series::PointSeries;
pub use theme::ChartStyle;
pub use types::{CanvasSize, Point};
