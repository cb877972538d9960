// File: crates/linechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A position in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Offset> for (f32, f32) {
    fn from(o: Offset) -> Self {
        (o.x, o.y)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
