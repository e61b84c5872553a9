//! Seam between the scene and the mapping engine that renders it.
//!
//! The engine does everything the component does not: rendering, tile fetching, projection,
//! hit-testing and geometry editing. The scene only tells it what was created.

#[cfg(feature = "galileo")]
mod galileo_engine;
mod headless;

use serde::Serialize;

#[cfg(feature = "galileo")]
pub use galileo_engine::GalileoEngine;
pub use headless::{EngineCall, HeadlessEngine};

use crate::config::ApiKey;
use crate::error::SceneError;
use crate::layer::SharedLayer;
use crate::types::UiPosition;
use crate::viewport::Viewport;
use crate::widget::WidgetKind;

/// Independently loadable part of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineModule {
    /// Global engine configuration.
    Config,
    /// Map model.
    Map,
    /// 2D map view.
    MapView,
    /// Graphic entities.
    Graphic,
    /// Graphics layer.
    GraphicsLayer,
    /// Basemap gallery widget.
    BasemapGallery,
    /// Scale bar widget.
    ScaleBar,
    /// Sketch widget.
    Sketch,
}

impl EngineModule {
    /// Every module needed to mount a map.
    pub const ALL: [EngineModule; 8] = [
        EngineModule::Config,
        EngineModule::Map,
        EngineModule::MapView,
        EngineModule::Graphic,
        EngineModule::GraphicsLayer,
        EngineModule::BasemapGallery,
        EngineModule::ScaleBar,
        EngineModule::Sketch,
    ];
}

/// Mapping engine the scene is shown with.
#[async_trait::async_trait]
pub trait MapEngine: Send + Sync {
    /// Sets the credential used for the engine's remote endpoints. Called before any other
    /// constructor call of a mount.
    fn set_credentials(&self, api_key: Option<&ApiKey>) -> Result<(), SceneError>;

    /// Acquires one engine module.
    async fn load_module(&self, module: EngineModule) -> Result<(), SceneError>;

    /// Creates the engine side of a viewport. The engine must fire `viewport.ready()` once its
    /// own initialization completes.
    fn create_view(&self, viewport: &Viewport) -> Result<(), SceneError>;

    /// Registers the overlay layer of the scene.
    fn add_layer(&self, layer: &SharedLayer) -> Result<(), SceneError>;

    /// Notifies the engine that a widget was attached to the viewport UI.
    fn add_widget(&self, kind: WidgetKind, position: UiPosition) -> Result<(), SceneError>;
}
