//! Literal overlay graphics of the scene.

use log::info;

use crate::graphic::{Graphic, GraphicGeometry};
use crate::layer::GraphicId;
use crate::popup::PopupTemplate;
use crate::scene::Scene;
use crate::symbol::{Color, Outline, Symbol};

/// Location of the point graphic (longitude, latitude).
pub const POINT: (f64, f64) = (-118.80657463861, 34.0005930608889);

/// Vertices of the line graphic.
pub const POLYLINE: [(f64, f64); 3] = [
    (-118.821527826096, 34.0139576938577),
    (-118.814893761649, 34.0080602407843),
    (-118.808878330345, 34.0016642996246),
];

/// Vertices of the outer ring of the polygon graphic.
pub const POLYGON_RING: [(f64, f64); 5] = [
    (-118.818984489994, 34.0137559967283),
    (-118.806796597377, 34.0215816298725),
    (-118.791432890735, 34.0163883241613),
    (-118.79596686535, 34.008564864635),
    (-118.808558110679, 34.0035027131376),
];

/// Ids of the graphics added by [`compose_overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGraphics {
    /// The point.
    pub point: GraphicId,
    /// The line.
    pub polyline: GraphicId,
    /// The polygon.
    pub polygon: GraphicId,
}

/// Point with an orange marker and a white outline.
pub fn point_graphic() -> Graphic {
    Graphic::new(
        GraphicGeometry::point(POINT.0, POINT.1),
        Symbol::SimpleMarker {
            color: Color::ORANGE,
            outline: Outline::new(Color::WHITE, 1.0),
        },
    )
}

/// Orange line through three vertices.
pub fn polyline_graphic() -> Graphic {
    Graphic::new(
        GraphicGeometry::polyline(&POLYLINE),
        Symbol::SimpleLine {
            color: Color::ORANGE,
            width: 2.0,
        },
    )
}

/// Semi-transparent orange polygon with a popup built from its attributes.
pub fn polygon_graphic() -> Graphic {
    Graphic::new(
        GraphicGeometry::polygon(&POLYGON_RING),
        Symbol::SimpleFill {
            color: Color::rgb(227, 139, 79).with_opacity(0.8),
            outline: Outline::new(Color::WHITE, 1.0),
        },
    )
    .with_attribute("Name", "Graphic")
    .with_attribute("Description", "I am a polygon")
    .with_popup(PopupTemplate::new("{Name}", "{Description}"))
}

/// Appends the point, the line and the polygon to the overlay layer of the scene, in that
/// order.
pub fn compose_overlay(scene: &Scene) -> OverlayGraphics {
    let mut layer = scene.overlay().write();
    let graphics = OverlayGraphics {
        point: layer.add(point_graphic()),
        polyline: layer.add(polyline_graphic()),
        polygon: layer.add(polygon_graphic()),
    };

    info!("Overlay composed with {} graphics", layer.len());
    graphics
}
