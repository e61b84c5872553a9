//! Mapping engine backed by [galileo](https://docs.rs/galileo).
//!
//! The engine remembers what the scene creates and turns it into a [`galileo::Map`] on demand:
//! a raster tile layer for the basemap and one feature layer per overlay graphic, stacked in the
//! overlay draw order. Showing the map (egui, a windowless renderer, ...) is left to the host.

use galileo::galileo_types::geo::impls::GeoPoint2d;
use galileo::galileo_types::geo::{Crs, NewGeoPoint};
use galileo::galileo_types::impls::{ClosedContour, Contour, Polygon};
use galileo::layer::raster_tile_layer::RasterTileLayerBuilder;
use galileo::layer::FeatureLayer;
use galileo::symbol::{CirclePointSymbol, SimpleContourSymbol, SimplePolygonSymbol};
use galileo::tile_schema::TileIndex;
use galileo::{Map, MapBuilder};
use geo_types::{Coord, LineString};
use log::{debug, info, trace};
use parking_lot::Mutex;

use super::{EngineModule, MapEngine};
use crate::basemap::{tile_coords, BasemapStyle};
use crate::config::ApiKey;
use crate::error::SceneError;
use crate::graphic::GraphicGeometry;
use crate::layer::SharedLayer;
use crate::symbol::{Color, Symbol};
use crate::types::{MapPosition, UiPosition};
use crate::viewport::Viewport;
use crate::widget::WidgetKind;

/// Size of point markers in pixels.
const MARKER_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy)]
struct ViewState {
    basemap: BasemapStyle,
    center: MapPosition,
    zoom: u32,
}

#[derive(Debug, Default)]
struct EngineState {
    api_key: Option<ApiKey>,
    view: Option<ViewState>,
    layer: Option<SharedLayer>,
}

/// Engine producing galileo maps.
#[derive(Debug, Default)]
pub struct GalileoEngine {
    state: Mutex<EngineState>,
}

impl GalileoEngine {
    /// Creates an engine with no view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a galileo map for the current state of the scene.
    ///
    /// Graphics sketched after the call are not part of the returned map; build it again to
    /// pick them up.
    pub fn build_map(&self) -> Result<Map, SceneError> {
        let state = self.state.lock();
        let view = state
            .view
            .ok_or_else(|| SceneError::Engine("no view was created".to_string()))?;

        let mut builder = MapBuilder::default()
            .with_latlon(view.center.latitude, view.center.longitude)
            .with_z_level(view.zoom);

        builder = with_basemap(builder, view.basemap, state.api_key.clone())?;

        if let Some(layer) = &state.layer {
            let layer = layer.read();
            for (id, graphic) in layer.iter() {
                trace!("Adding graphic {} as a feature layer", id.index());
                builder = with_graphic(builder, graphic.geometry(), graphic.symbol());
            }
        }

        Ok(builder.build())
    }
}

fn with_basemap(
    builder: MapBuilder,
    basemap: BasemapStyle,
    api_key: Option<ApiKey>,
) -> Result<MapBuilder, SceneError> {
    let tile_layer = match basemap {
        BasemapStyle::OpenStreetMap => RasterTileLayerBuilder::new_osm().build(),
        style => RasterTileLayerBuilder::new_rest(move |index: &TileIndex| {
            match tile_coords(index.z, index.x, index.y) {
                Some((x, y)) => style.tile_url(index.z, x, y, api_key.as_ref()),
                None => {
                    trace!("Tile {}/{}/{} is outside the grid", index.z, index.x, index.y);
                    String::new()
                }
            }
        })
        .build(),
    }
    .map_err(|err| SceneError::Engine(format!("failed to create basemap layer: {err}")))?;

    Ok(builder.with_layer(tile_layer))
}

fn with_graphic(builder: MapBuilder, geometry: &GraphicGeometry, symbol: &Symbol) -> MapBuilder {
    match (geometry, *symbol) {
        (GraphicGeometry::Point(point), Symbol::SimpleMarker { color, .. }) => {
            builder.with_layer(FeatureLayer::new(
                vec![GeoPoint2d::latlon(point.y(), point.x())],
                CirclePointSymbol::new(to_galileo(color), MARKER_SIZE),
                Crs::WGS84,
            ))
        }
        (GraphicGeometry::Polyline(line), Symbol::SimpleLine { color, width }) => {
            builder.with_layer(FeatureLayer::new(
                vec![Contour::new(to_geo_points(line), false)],
                SimpleContourSymbol::new(to_galileo(color), width),
                Crs::WGS84,
            ))
        }
        (GraphicGeometry::Polygon(polygon), Symbol::SimpleFill { color, outline }) => {
            let mut ring = to_geo_points(polygon.exterior());
            // galileo closes the ring itself
            ring.pop();

            builder.with_layer(FeatureLayer::new(
                vec![Polygon::new(ClosedContour::new(ring), vec![])],
                SimplePolygonSymbol::new(to_galileo(color))
                    .with_stroke_color(to_galileo(outline.color))
                    .with_stroke_width(outline.width),
                Crs::WGS84,
            ))
        }
        (geometry, symbol) => {
            debug!(
                "Skipping {:?} graphic with a {:?} symbol",
                geometry.kind(),
                symbol.geometry_kind()
            );
            builder
        }
    }
}

fn to_geo_points(line: &LineString<f64>) -> Vec<GeoPoint2d> {
    line.coords()
        .map(|Coord { x, y }| GeoPoint2d::latlon(*y, *x))
        .collect()
}

fn to_galileo(color: Color) -> galileo::Color {
    galileo::Color::rgba(color.r, color.g, color.b, color.a)
}

#[async_trait::async_trait]
impl MapEngine for GalileoEngine {
    fn set_credentials(&self, api_key: Option<&ApiKey>) -> Result<(), SceneError> {
        self.state.lock().api_key = api_key.cloned();
        Ok(())
    }

    async fn load_module(&self, module: EngineModule) -> Result<(), SceneError> {
        // Everything is linked statically.
        trace!("Module {module:?} is available");
        Ok(())
    }

    fn create_view(&self, viewport: &Viewport) -> Result<(), SceneError> {
        self.state.lock().view = Some(ViewState {
            basemap: viewport.scene().basemap(),
            center: viewport.center(),
            zoom: viewport.zoom(),
        });

        info!("Galileo view created at {:?}", viewport.center());
        viewport.ready().mark_ready();
        Ok(())
    }

    fn add_layer(&self, layer: &SharedLayer) -> Result<(), SceneError> {
        self.state.lock().layer = Some(layer.clone());
        Ok(())
    }

    fn add_widget(&self, kind: WidgetKind, position: UiPosition) -> Result<(), SceneError> {
        debug!(
            "Widget {kind:?} at {} is drawn by the host UI",
            position.as_str()
        );
        Ok(())
    }
}
