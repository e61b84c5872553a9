//! Named basemap styles.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ApiKey;
use crate::error::SceneError;

/// Background style drawn beneath the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BasemapStyle {
    /// Topographic map.
    #[default]
    Topographic,
    /// Street map.
    Streets,
    /// Satellite imagery.
    Imagery,
    /// Dark gray canvas.
    DarkGray,
    /// OpenStreetMap standard tiles.
    OpenStreetMap,
}

impl BasemapStyle {
    /// All known styles in the order they are listed in the basemap gallery.
    pub const ALL: [BasemapStyle; 5] = [
        BasemapStyle::Topographic,
        BasemapStyle::Streets,
        BasemapStyle::Imagery,
        BasemapStyle::DarkGray,
        BasemapStyle::OpenStreetMap,
    ];

    /// Identifier of the style.
    pub fn id(&self) -> &'static str {
        match self {
            BasemapStyle::Topographic => "arcgis/topographic",
            BasemapStyle::Streets => "arcgis/streets",
            BasemapStyle::Imagery => "arcgis/imagery",
            BasemapStyle::DarkGray => "arcgis/dark-gray",
            BasemapStyle::OpenStreetMap => "osm/standard",
        }
    }

    /// Human readable title shown in the gallery.
    pub fn title(&self) -> &'static str {
        match self {
            BasemapStyle::Topographic => "Topographic",
            BasemapStyle::Streets => "Streets",
            BasemapStyle::Imagery => "Imagery",
            BasemapStyle::DarkGray => "Dark Gray Canvas",
            BasemapStyle::OpenStreetMap => "OpenStreetMap",
        }
    }

    /// Whether tile requests for this style must carry an access credential.
    pub fn requires_credential(&self) -> bool {
        !matches!(self, BasemapStyle::OpenStreetMap)
    }

    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders.
    pub fn url_template(&self) -> &'static str {
        match self {
            BasemapStyle::Topographic => "https://services.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}",
            BasemapStyle::Streets => "https://services.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer/tile/{z}/{y}/{x}",
            BasemapStyle::Imagery => "https://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            BasemapStyle::DarkGray => "https://services.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Dark_Gray_Base/MapServer/tile/{z}/{y}/{x}",
            BasemapStyle::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    /// URL of a single tile. The credential is appended, percent-encoded, as a `token` query
    /// parameter when the style requires one.
    pub fn tile_url(&self, z: u32, x: u32, y: u32, api_key: Option<&ApiKey>) -> String {
        let vars = HashMap::from([
            ("z".to_string(), z.to_string()),
            ("x".to_string(), x.to_string()),
            ("y".to_string(), y.to_string()),
        ]);

        // The templates are constants with exactly these placeholders.
        let mut url = strfmt::strfmt(self.url_template(), &vars)
            .unwrap_or_else(|_| self.url_template().to_string());

        if let (true, Some(key)) = (self.requires_credential(), api_key) {
            url.push_str("?token=");
            url.push_str(&urlencoding::encode(key.expose()));
        }

        url
    }
}

/// Converts a signed tile index into grid coordinates at zoom level `z`.
///
/// Columns wrap around the antimeridian. Rows outside the grid have no tile and give `None`.
pub fn tile_coords(z: u32, x: i32, y: i32) -> Option<(u32, u32)> {
    let size = 1i64.checked_shl(z).filter(|size| *size <= 1i64 << 32)?;
    let column = u32::try_from(i64::from(x).rem_euclid(size)).ok()?;
    let row = u32::try_from(y).ok().filter(|row| i64::from(*row) < size)?;

    Some((column, row))
}

impl fmt::Display for BasemapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BasemapStyle {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BasemapStyle::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| SceneError::UnknownBasemap(s.to_string()))
    }
}

impl TryFrom<String> for BasemapStyle {
    type Error = SceneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BasemapStyle> for String {
    fn from(style: BasemapStyle) -> Self {
        style.id().to_string()
    }
}
