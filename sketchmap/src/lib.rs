//! Sketchmap mounts an interactive map scene into a host container.
//!
//! A mount creates a [`Scene`] with a named basemap, a [`Viewport`] centered on a fixed
//! position, one overlay layer with three literal graphics (a point, a line and a polygon with a
//! popup), a basemap gallery with a [`ToggleButton`], a scale bar and, once the engine reports
//! the viewport ready, a sketch tool bound to the overlay layer.
//!
//! Rendering, tile fetching and sketch editing are done by a mapping engine behind the
//! [`MapEngine`] trait. [`HeadlessEngine`] renders nothing and records what it is asked to do;
//! with the `galileo` feature, `GalileoEngine` builds a [`galileo`](https://docs.rs/galileo)
//! map out of the scene.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sketchmap::{Container, HeadlessEngine, MapConfig, SceneBootstrapper};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MapConfig::discover()?;
//! let bootstrapper = SceneBootstrapper::new(config, Arc::new(HeadlessEngine::new()));
//! let mut map = bootstrapper.mount(Some(Container::new("viewDiv"))).await?;
//!
//! map.toggle_button().click();
//! let sketch = map.wait_for_sketch().await?;
//! # Ok(())
//! # }
//! ```

pub mod basemap;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod graphic;
pub mod layer;
pub mod logging;
pub mod overlay;
pub mod popup;
pub mod ready;
pub mod scene;
pub mod symbol;
pub mod toggle;
pub mod types;
pub mod viewport;
pub mod widget;

pub use basemap::BasemapStyle;
pub use bootstrap::{MountedMap, SceneBootstrapper};
pub use config::{ApiKey, MapConfig};
#[cfg(feature = "galileo")]
pub use engine::GalileoEngine;
pub use engine::{EngineCall, EngineModule, HeadlessEngine, MapEngine};
pub use error::{ConfigError, SceneError};
pub use graphic::{GeometryKind, Graphic, GraphicGeometry};
pub use layer::{GraphicId, OverlayLayer, SharedLayer};
pub use popup::{PopupContent, PopupTemplate};
pub use ready::{ReadySignal, ReadyState};
pub use scene::Scene;
pub use symbol::{Color, Outline, Symbol};
pub use toggle::ToggleButton;
pub use types::{MapPosition, UiPosition, Visibility};
pub use viewport::{Container, Viewport};
pub use widget::{BasemapGallery, CreationMode, ScaleBar, ScaleUnit, SketchWidget, Widget, WidgetKind};
