//! Vector overlay entities.

use std::collections::BTreeMap;

use geo_types::{Geometry, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::popup::{PopupContent, PopupTemplate};
use crate::symbol::Symbol;

/// Kind of geometry a graphic can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    /// Single position.
    Point,
    /// Open path through a list of vertices.
    Polyline,
    /// Closed area.
    Polygon,
}

/// Geometry of a graphic. Coordinates are longitude/latitude degrees (x = longitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates", rename_all = "lowercase")]
pub enum GraphicGeometry {
    /// A point.
    Point(Point<f64>),
    /// A polyline.
    Polyline(LineString<f64>),
    /// A polygon.
    Polygon(Polygon<f64>),
}

impl GraphicGeometry {
    /// Builds a point from longitude and latitude.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        GraphicGeometry::Point(Point::new(longitude, latitude))
    }

    /// Builds a polyline from `(longitude, latitude)` vertices.
    pub fn polyline(vertices: &[(f64, f64)]) -> Self {
        GraphicGeometry::Polyline(LineString::from(vertices.to_vec()))
    }

    /// Builds a polygon from the `(longitude, latitude)` vertices of its outer ring. The ring is
    /// closed automatically.
    pub fn polygon(ring: &[(f64, f64)]) -> Self {
        GraphicGeometry::Polygon(Polygon::new(LineString::from(ring.to_vec()), vec![]))
    }

    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            GraphicGeometry::Point(_) => GeometryKind::Point,
            GraphicGeometry::Polyline(_) => GeometryKind::Polyline,
            GraphicGeometry::Polygon(_) => GeometryKind::Polygon,
        }
    }
}

impl TryFrom<Geometry<f64>> for GraphicGeometry {
    type Error = SceneError;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Point(point) => Ok(GraphicGeometry::Point(point)),
            Geometry::LineString(line) => Ok(GraphicGeometry::Polyline(line)),
            Geometry::Polygon(polygon) => Ok(GraphicGeometry::Polygon(polygon)),
            Geometry::Line(_) => Err(SceneError::UnsupportedGeometry("line")),
            Geometry::MultiPoint(_) => Err(SceneError::UnsupportedGeometry("multipoint")),
            Geometry::MultiLineString(_) => Err(SceneError::UnsupportedGeometry("multilinestring")),
            Geometry::MultiPolygon(_) => Err(SceneError::UnsupportedGeometry("multipolygon")),
            Geometry::GeometryCollection(_) => {
                Err(SceneError::UnsupportedGeometry("geometrycollection"))
            }
            Geometry::Rect(_) => Err(SceneError::UnsupportedGeometry("rect")),
            Geometry::Triangle(_) => Err(SceneError::UnsupportedGeometry("triangle")),
        }
    }
}

/// A single overlay entity: geometry, symbol, attributes and an optional popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graphic {
    geometry: GraphicGeometry,
    symbol: Symbol,
    attributes: BTreeMap<String, String>,
    popup: Option<PopupTemplate>,
}

impl Graphic {
    /// Creates a graphic without attributes or popup.
    pub fn new(geometry: GraphicGeometry, symbol: Symbol) -> Self {
        Self {
            geometry,
            symbol,
            attributes: BTreeMap::new(),
            popup: None,
        }
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the popup template.
    pub fn with_popup(mut self, popup: PopupTemplate) -> Self {
        self.popup = Some(popup);
        self
    }

    /// Geometry of the graphic.
    pub fn geometry(&self) -> &GraphicGeometry {
        &self.geometry
    }

    /// Symbol of the graphic.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Attributes of the graphic.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Popup template, if any.
    pub fn popup_template(&self) -> Option<&PopupTemplate> {
        self.popup.as_ref()
    }

    /// Renders the popup for this graphic. Returns `Ok(None)` if the graphic has no popup.
    pub fn popup(&self) -> Result<Option<PopupContent>, SceneError> {
        self.popup
            .as_ref()
            .map(|template| template.render(&self.attributes))
            .transpose()
    }
}
