// File: crates/linechart-core/src/theme.rs
// Summary: Chart styles (colors, stroke, dp-based spacing) with built-in presets and JSON loading.

use std::path::Path;

use crate::color::Color;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub name: String,
    pub background: Color,
    pub axis: Color,
    /// Base color for segments, markers and the top of the shadow fill.
    pub accent: Color,
    /// Bottom stop of the shadow gradient.
    pub gradient_bottom: Color,
    /// Alpha applied to the accent for segments and markers.
    pub line_alpha: f32,
    /// Alpha applied to the accent at the top of the shadow.
    pub fill_alpha: f32,
    /// Stroke width in pixels for axes and segments.
    pub stroke_width: f32,
    pub margin_dp: f32,
    pub marker_radius_dp: f32,
    /// Pixels per dp.
    pub density: f32,
}

impl ChartStyle {
    pub fn shadow() -> Self {
        Self {
            name: "shadow".into(),
            background: Color::WHITE,
            axis: Color::from_argb_u32(0xFF88_8888),
            accent: Color::from_argb_u32(0xFFFF_0000),
            // near-white, mostly transparent
            gradient_bottom: Color::from_argb_u32(0x0FFA_FFFC),
            line_alpha: 0.5,
            fill_alpha: 0.5,
            stroke_width: 4.0,
            margin_dp: 16.0,
            marker_radius_dp: 6.0,
            density: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            background: Color::from_argb(255, 18, 18, 20),
            axis: Color::from_argb(255, 180, 180, 190),
            accent: Color::from_argb(255, 64, 160, 255),
            gradient_bottom: Color::from_argb(16, 40, 40, 45),
            line_alpha: 0.6,
            fill_alpha: 0.4,
            ..Self::shadow()
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    #[inline]
    pub fn dp(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Axis inset and first/last point adjustment, in pixels.
    pub fn margin_px(&self) -> f32 {
        self.dp(self.margin_dp)
    }

    pub fn marker_radius_px(&self) -> f32 {
        self.dp(self.marker_radius_dp)
    }

    /// Translucent accent used for segments and markers.
    pub fn line_color(&self) -> Color {
        self.accent.with_alpha(self.line_alpha)
    }

    /// Top stop of the shadow gradient.
    pub fn fill_top_color(&self) -> Color {
        self.accent.with_alpha(self.fill_alpha)
    }

    /// Parse a style document. Missing fields take the `shadow` preset's values.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let style = Self::from_json_str(&text)?;
        log::debug!("loaded style '{}' from {}", style.name, path.as_ref().display());
        Ok(style)
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::shadow()
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<ChartStyle> {
    vec![ChartStyle::shadow(), ChartStyle::dark()]
}

/// Find a style by its `name`, falling back to `shadow`.
pub fn find(name: &str) -> ChartStyle {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    log::warn!("unknown style '{}', using 'shadow'", name);
    ChartStyle::shadow()
}
