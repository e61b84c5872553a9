//! Small value types shared between the scene, the widgets and the engine.

use serde::{Deserialize, Serialize};

/// Geographic position with longitude and latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl MapPosition {
    /// Creates a new position. Note the order: longitude first.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns true if both coordinates are inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

impl From<MapPosition> for geo_types::Point<f64> {
    fn from(position: MapPosition) -> Self {
        geo_types::Point::new(position.longitude, position.latitude)
    }
}

impl From<geo_types::Point<f64>> for MapPosition {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

/// Anchor of a widget in the viewport UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
    /// Positioned by the widget itself (e.g. absolutely positioned elements).
    Manual,
}

impl UiPosition {
    /// Name of the anchor as used by the web UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            UiPosition::TopLeft => "top-left",
            UiPosition::TopRight => "top-right",
            UiPosition::BottomLeft => "bottom-left",
            UiPosition::BottomRight => "bottom-right",
            UiPosition::Manual => "manual",
        }
    }
}

/// Visibility state of a widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Panel is not displayed.
    #[default]
    Hidden,
    /// Panel is displayed.
    Visible,
}

impl Visibility {
    /// Returns the opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }

    /// CSS `display` value for an element in this state.
    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Hidden => "none",
            Visibility::Visible => "block",
        }
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}
