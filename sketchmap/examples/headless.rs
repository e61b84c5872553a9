//! This example mounts the scene with the headless engine and prints what was created.
//!
//! Set `SKETCHMAP_API_KEY` to use the default topographic basemap; without a key the example
//! falls back to OpenStreetMap tiles.

use std::sync::Arc;

use geo_types::line_string;
use sketchmap::{BasemapStyle, Container, HeadlessEngine, MapConfig, SceneBootstrapper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sketchmap::logging::init_logger();

    let mut config = MapConfig::discover()?;
    if config.api_key.is_none() {
        log::warn!("{} is not set, using OpenStreetMap", sketchmap::config::API_KEY_ENV);
        config.basemap = BasemapStyle::OpenStreetMap;
    }

    let engine = Arc::new(HeadlessEngine::new());
    let bootstrapper = SceneBootstrapper::new(config, engine.clone());
    let mut map = bootstrapper.mount(Some(Container::new("viewDiv"))).await?;

    let visibility = map.toggle_button().click();
    println!("Basemap gallery is now {visibility:?}");

    let sketch = map.wait_for_sketch().await?;
    sketch.lock().complete(
        line_string![
            (x: -118.80, y: 34.02),
            (x: -118.79, y: 34.01),
        ]
        .into(),
    )?;

    println!("{}", serde_json::to_string_pretty(&*map.scene().overlay().read())?);
    println!("{}", serde_json::to_string_pretty(&engine.calls())?);

    map.unmount();
    Ok(())
}
