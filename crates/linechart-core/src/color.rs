// File: crates/linechart-core/src/color.rs
// Summary: Backend-neutral RGBA color with Compose-style ARGB literals.

use crate::geometry::clamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a packed `0xAARRGGBB` literal.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Copy with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (clamp(alpha, 0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
