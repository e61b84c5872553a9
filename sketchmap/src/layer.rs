//! The overlay layer holding the graphics of a scene.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::SceneError;
use crate::graphic::Graphic;
use crate::popup::PopupContent;

/// Overlay layer shared between the scene, the sketch widget and the engine.
pub type SharedLayer = Arc<RwLock<OverlayLayer>>;

/// Identifier of a graphic inside its overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GraphicId(usize);

impl GraphicId {
    /// Position of the graphic in the draw order, `0` being the bottom-most one.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered collection of graphics drawn on top of the basemap.
///
/// Graphics can only be appended. Later graphics are drawn on top of earlier ones.
#[derive(Debug, Default, Serialize)]
pub struct OverlayLayer {
    graphics: Vec<Graphic>,
}

impl OverlayLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layer wrapped for sharing.
    pub fn new_shared() -> SharedLayer {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Appends a graphic and returns its id.
    pub fn add(&mut self, graphic: Graphic) -> GraphicId {
        let id = GraphicId(self.graphics.len());
        debug!(
            "Adding {:?} graphic {} to the overlay layer",
            graphic.geometry().kind(),
            id.0
        );
        self.graphics.push(graphic);
        id
    }

    /// Returns the graphic with the given id.
    pub fn get(&self, id: GraphicId) -> Option<&Graphic> {
        self.graphics.get(id.0)
    }

    /// All graphics in insertion order.
    pub fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    /// Iterates over graphics with their ids in draw order (bottom to top).
    pub fn iter(&self) -> impl Iterator<Item = (GraphicId, &Graphic)> {
        self.graphics
            .iter()
            .enumerate()
            .map(|(index, graphic)| (GraphicId(index), graphic))
    }

    /// Ids of all graphics from bottom to top.
    pub fn draw_order(&self) -> impl Iterator<Item = GraphicId> {
        (0..self.graphics.len()).map(GraphicId)
    }

    /// Number of graphics.
    pub fn len(&self) -> usize {
        self.graphics.len()
    }

    /// Returns true if the layer has no graphics.
    pub fn is_empty(&self) -> bool {
        self.graphics.is_empty()
    }

    /// Renders the popup of the graphic with the given id.
    ///
    /// Returns `Ok(None)` if there is no such graphic or it has no popup.
    pub fn popup(&self, id: GraphicId) -> Result<Option<PopupContent>, SceneError> {
        match self.get(id) {
            Some(graphic) => graphic.popup(),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::GraphicGeometry;
    use crate::symbol::{Color, Symbol};

    fn line(offset: f64) -> Graphic {
        Graphic::new(
            GraphicGeometry::polyline(&[(offset, 0.0), (offset, 1.0)]),
            Symbol::SimpleLine {
                color: Color::ORANGE,
                width: 1.0,
            },
        )
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut layer = OverlayLayer::new();
        let first = layer.add(line(0.0));
        let second = layer.add(line(1.0));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(layer.draw_order().collect::<Vec<_>>(), vec![first, second]);
        assert_eq!(layer.get(second), Some(&line(1.0)));
    }

    #[test]
    fn popup_of_unknown_graphic_is_none() {
        let layer = OverlayLayer::new();
        assert!(layer.is_empty());
        assert_eq!(layer.popup(GraphicId(3)).expect("no error"), None);
    }
}
