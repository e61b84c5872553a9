//! Visual styles of overlay graphics.

use serde::{Deserialize, Serialize};

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, `255` is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// The orange used by the default overlay.
    pub const ORANGE: Color = Color::rgb(226, 119, 40);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with the given alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with alpha set from opacity in `0.0..=1.0`. Values outside the range
    /// are clamped.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Opacity in `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Outline of a marker or a filled area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
}

impl Outline {
    /// Creates a new outline.
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Symbol used to draw a graphic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Symbol {
    /// Marker drawn at a point.
    SimpleMarker {
        /// Fill color.
        color: Color,
        /// Marker outline.
        outline: Outline,
    },
    /// Stroke along a line.
    SimpleLine {
        /// Stroke color.
        color: Color,
        /// Stroke width in points.
        width: f64,
    },
    /// Filled area with an outline.
    SimpleFill {
        /// Fill color.
        color: Color,
        /// Area outline.
        outline: Outline,
    },
}

impl Symbol {
    /// Name of the geometry kind the symbol is meant for.
    pub fn geometry_kind(&self) -> crate::GeometryKind {
        match self {
            Symbol::SimpleMarker { .. } => crate::GeometryKind::Point,
            Symbol::SimpleLine { .. } => crate::GeometryKind::Polyline,
            Symbol::SimpleFill { .. } => crate::GeometryKind::Polygon,
        }
    }
}
