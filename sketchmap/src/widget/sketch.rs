use geo_types::Geometry;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::graphic::{GeometryKind, Graphic, GraphicGeometry};
use crate::layer::{GraphicId, SharedLayer};
use crate::symbol::{Color, Outline, Symbol};

/// What happens to a graphic after its sketch is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationMode {
    /// Stop drawing after one graphic.
    Single,
    /// Start the next graphic of the same kind right away.
    Continuous,
    /// Select the new graphic so it can be edited immediately.
    #[default]
    Update,
}

/// Sketch tool bound to an overlay layer.
///
/// Geometry editing itself belongs to the engine. Finished sketches are handed over with
/// [`SketchWidget::complete`] and land in the same layer as the literal graphics.
#[derive(Debug)]
pub struct SketchWidget {
    layer: SharedLayer,
    creation_mode: CreationMode,
    selected: Option<GraphicId>,
}

impl SketchWidget {
    /// Creates a sketch tool that adds its graphics to `layer`.
    pub fn new(layer: SharedLayer, creation_mode: CreationMode) -> Self {
        Self {
            layer,
            creation_mode,
            selected: None,
        }
    }

    /// Layer the sketches are added to.
    pub fn layer(&self) -> &SharedLayer {
        &self.layer
    }

    /// Creation mode of the tool.
    pub fn creation_mode(&self) -> CreationMode {
        self.creation_mode
    }

    /// Graphic currently selected for editing.
    pub fn selected(&self) -> Option<GraphicId> {
        self.selected
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Adds a finished sketch to the layer and returns its id.
    pub fn complete(&mut self, geometry: Geometry<f64>) -> Result<GraphicId, SceneError> {
        let geometry = GraphicGeometry::try_from(geometry)?;
        let symbol = default_symbol(geometry.kind());
        let id = self.layer.write().add(Graphic::new(geometry, symbol));

        info!("Sketch completed as graphic {}", id.index());
        self.selected = match self.creation_mode {
            CreationMode::Update => Some(id),
            CreationMode::Single | CreationMode::Continuous => None,
        };

        Ok(id)
    }
}

/// Symbol given to freshly sketched graphics.
pub(crate) fn default_symbol(kind: GeometryKind) -> Symbol {
    const SKETCH_BLUE: Color = Color::rgb(0, 121, 193);

    match kind {
        GeometryKind::Point => Symbol::SimpleMarker {
            color: SKETCH_BLUE,
            outline: Outline::new(Color::WHITE, 1.0),
        },
        GeometryKind::Polyline => Symbol::SimpleLine {
            color: SKETCH_BLUE,
            width: 2.0,
        },
        GeometryKind::Polygon => Symbol::SimpleFill {
            color: SKETCH_BLUE.with_opacity(0.3),
            outline: Outline::new(SKETCH_BLUE, 1.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{point, polygon, Geometry, MultiPoint};

    use super::*;
    use crate::layer::OverlayLayer;

    #[test]
    fn update_mode_selects_new_graphic() {
        let layer = OverlayLayer::new_shared();
        let mut sketch = SketchWidget::new(layer.clone(), CreationMode::Update);

        let id = sketch
            .complete(point!(x: -118.8, y: 34.0).into())
            .expect("points are supported");

        assert_eq!(sketch.selected(), Some(id));
        assert_eq!(layer.read().len(), 1);
        assert_eq!(
            layer.read().get(id).map(|g| g.geometry().kind()),
            Some(GeometryKind::Point)
        );
    }

    #[test]
    fn single_mode_keeps_nothing_selected() {
        let layer = OverlayLayer::new_shared();
        let mut sketch = SketchWidget::new(layer.clone(), CreationMode::Single);

        let area: Geometry<f64> =
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)].into();
        let id = sketch.complete(area).expect("polygons are supported");

        assert_eq!(sketch.selected(), None);
        assert!(matches!(
            layer.read().get(id).map(|g| *g.symbol()),
            Some(Symbol::SimpleFill { .. })
        ));
    }

    #[test]
    fn unsupported_geometry_leaves_layer_untouched() {
        let layer = OverlayLayer::new_shared();
        let mut sketch = SketchWidget::new(layer.clone(), CreationMode::Update);

        let points: Geometry<f64> = MultiPoint::from(vec![(0.0, 0.0), (1.0, 1.0)]).into();
        assert!(sketch.complete(points).is_err());
        assert!(layer.read().is_empty());
        assert_eq!(sketch.selected(), None);
    }
}
