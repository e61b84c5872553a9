//! Logical map model.

use crate::basemap::BasemapStyle;
use crate::layer::{OverlayLayer, SharedLayer};

/// Logical map model: a basemap and the overlay layer above it.
///
/// The scene creates its one overlay layer together with itself and gives out no way to add
/// another. The basemap is fixed for the lifetime of the scene.
#[derive(Debug, Clone)]
pub struct Scene {
    basemap: BasemapStyle,
    overlay: SharedLayer,
}

impl Scene {
    /// Creates a scene with an empty overlay layer.
    pub fn new(basemap: BasemapStyle) -> Self {
        Self {
            basemap,
            overlay: OverlayLayer::new_shared(),
        }
    }

    /// Basemap the scene was created with.
    pub fn basemap(&self) -> BasemapStyle {
        self.basemap
    }

    /// The overlay layer.
    pub fn overlay(&self) -> &SharedLayer {
        &self.overlay
    }
}
