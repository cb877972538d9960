// File: crates/linechart-core/src/data.rs
// Summary: Injectable point sources: seeded/unseeded random samples, fixed data, closures.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Number of sample points (x = 0..=10).
pub const SAMPLE_COUNT: usize = 11;
/// Inclusive y range of sample points.
pub const SAMPLE_Y_RANGE: RangeInclusive<u32> = 1..=50;

/// Supplies the ordered points for one render.
pub trait DataProvider {
    fn points(&mut self) -> Vec<Point>;
}

impl<F> DataProvider for F
where
    F: FnMut() -> Vec<Point>,
{
    fn points(&mut self) -> Vec<Point> {
        self()
    }
}

/// Random sample data: x = 0, 1, .., count-1 and integer y drawn uniformly from a range.
pub struct RandomDataProvider {
    rng: StdRng,
    count: usize,
    y_range: RangeInclusive<u32>,
}

impl RandomDataProvider {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, count: SAMPLE_COUNT, y_range: SAMPLE_Y_RANGE }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// An empty range (`start > end`) is replaced by `start..=start`.
    pub fn with_y_range(mut self, y_range: RangeInclusive<u32>) -> Self {
        let (lo, hi) = (*y_range.start(), *y_range.end());
        self.y_range = if lo > hi { lo..=lo } else { y_range };
        self
    }
}

impl Default for RandomDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for RandomDataProvider {
    fn points(&mut self) -> Vec<Point> {
        let range = self.y_range.clone();
        (0..self.count)
            .map(|i| Point::new(i as f64, self.rng.gen_range(range.clone()) as f64))
            .collect()
    }
}

/// Replays a fixed sequence on every call.
#[derive(Clone, Debug, Default)]
pub struct StaticDataProvider {
    points: Vec<Point>,
}

impl StaticDataProvider {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl DataProvider for StaticDataProvider {
    fn points(&mut self) -> Vec<Point> {
        self.points.clone()
    }
}
