//! Mounting of a map scene into a host container.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::MapConfig;
use crate::engine::{EngineModule, MapEngine};
use crate::error::SceneError;
use crate::overlay::{compose_overlay, OverlayGraphics};
use crate::scene::Scene;
use crate::toggle::ToggleButton;
use crate::types::{UiPosition, Visibility};
use crate::viewport::{Container, Viewport};
use crate::widget::{
    BasemapGallery, CreationMode, GalleryHandle, ScaleBar, ScaleUnit, SketchHandle, SketchWidget,
    Widget, WidgetKind,
};

/// Identifier of a mounted map, used in logs.
pub type MountId = u32;

static MOUNT_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Builds a map scene in a container using a mapping engine.
pub struct SceneBootstrapper {
    config: MapConfig,
    engine: Arc<dyn MapEngine>,
}

impl SceneBootstrapper {
    /// Creates a bootstrapper. The configuration, including the credential, is given here
    /// instead of being set globally.
    pub fn new(config: MapConfig, engine: Arc<dyn MapEngine>) -> Self {
        Self { config, engine }
    }

    /// Configuration used for mounting.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Mounts the map into `container`.
    ///
    /// All engine modules are loaded concurrently first; if any of them fails nothing is
    /// constructed. The sketch widget is attached by a background task once the viewport
    /// reports ready, so this must be called inside a tokio runtime.
    pub async fn mount(&self, container: Option<Container>) -> Result<MountedMap, SceneError> {
        let mount_id = MOUNT_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
        self.mount_inner(mount_id, container)
            .await
            .inspect_err(|err| error!("Failed to mount map {mount_id}: {err}"))
    }

    async fn mount_inner(
        &self,
        mount_id: MountId,
        container: Option<Container>,
    ) -> Result<MountedMap, SceneError> {
        let mut container = container.ok_or(SceneError::MissingContainer)?;
        info!("Mounting map {mount_id} into container '{}'", container.id());
        self.config.validate()?;

        self.load_modules().await?;

        let basemap = self.config.basemap;
        if basemap.requires_credential() && self.config.api_key.is_none() {
            return Err(SceneError::MissingCredential {
                basemap: basemap.id(),
            });
        }
        self.engine.set_credentials(self.config.api_key.as_ref())?;

        let scene = Scene::new(basemap);

        let gallery: GalleryHandle = Arc::new(Mutex::new(BasemapGallery::new(
            basemap,
            Visibility::from(self.config.gallery_visible),
        )));
        let toggle = ToggleButton::new(gallery.clone());
        container.append_child(toggle.element());

        let viewport = Arc::new(Viewport::new(
            container,
            scene.clone(),
            self.config.center,
            self.config.zoom,
        ));
        self.engine.create_view(&viewport)?;

        let graphics = compose_overlay(&scene);
        self.engine.add_layer(scene.overlay())?;

        self.attach(
            &viewport,
            Widget::BasemapGallery(gallery.clone()),
            UiPosition::TopRight,
        )?;
        self.attach(
            &viewport,
            Widget::ScaleBar(ScaleBar::new(ScaleUnit::Dual)),
            UiPosition::BottomLeft,
        )?;

        let sketch_task = tokio::spawn(attach_sketch_when_ready(
            mount_id,
            viewport.clone(),
            self.engine.clone(),
            self.config.ready_timeout(),
        ));

        info!("Map {mount_id} mounted");
        Ok(MountedMap {
            mount_id,
            scene,
            viewport,
            graphics,
            gallery,
            toggle,
            sketch_task: Some(sketch_task),
        })
    }

    async fn load_modules(&self) -> Result<(), SceneError> {
        debug!("Loading {} engine modules", EngineModule::ALL.len());
        try_join_all(
            EngineModule::ALL
                .into_iter()
                .map(|module| self.engine.load_module(module)),
        )
        .await?;

        Ok(())
    }

    fn attach(
        &self,
        viewport: &Viewport,
        widget: Widget,
        position: UiPosition,
    ) -> Result<(), SceneError> {
        let kind = widget.kind();
        viewport.attach(widget, position);
        self.engine.add_widget(kind, position)
    }
}

async fn attach_sketch_when_ready(
    mount_id: MountId,
    viewport: Arc<Viewport>,
    engine: Arc<dyn MapEngine>,
    timeout: Option<Duration>,
) -> Result<SketchHandle, SceneError> {
    if let Err(err) = viewport.ready().wait(timeout).await {
        warn!("Sketch tool of map {mount_id} is not available: {err}");
        return Err(err);
    }

    let sketch = Arc::new(Mutex::new(SketchWidget::new(
        viewport.scene().overlay().clone(),
        CreationMode::Update,
    )));
    viewport.attach(Widget::Sketch(sketch.clone()), UiPosition::TopRight);
    engine.add_widget(WidgetKind::Sketch, UiPosition::TopRight)?;

    info!("Sketch tool of map {mount_id} attached");
    Ok(sketch)
}

/// A map mounted into a container.
///
/// Dropping or unmounting it cancels a pending wait for viewport readiness.
pub struct MountedMap {
    mount_id: MountId,
    scene: Scene,
    viewport: Arc<Viewport>,
    graphics: OverlayGraphics,
    gallery: GalleryHandle,
    toggle: ToggleButton,
    sketch_task: Option<JoinHandle<Result<SketchHandle, SceneError>>>,
}

impl MountedMap {
    /// Identifier of the mount.
    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The viewport.
    pub fn viewport(&self) -> &Arc<Viewport> {
        &self.viewport
    }

    /// Ids of the literal overlay graphics.
    pub fn graphics(&self) -> OverlayGraphics {
        self.graphics
    }

    /// The basemap gallery.
    pub fn gallery(&self) -> &GalleryHandle {
        &self.gallery
    }

    /// The toggle button of the gallery.
    pub fn toggle_button(&mut self) -> &mut ToggleButton {
        &mut self.toggle
    }

    /// The sketch widget, if it is attached already.
    pub fn sketch(&self) -> Option<SketchHandle> {
        self.viewport
            .widgets_at(UiPosition::TopRight)
            .into_iter()
            .find_map(|widget| match widget {
                Widget::Sketch(sketch) => Some(sketch),
                _ => None,
            })
    }

    /// Waits for the sketch attachment to finish.
    ///
    /// The attachment runs once; after its outcome has been taken, this returns the attached
    /// widget if there is one and [`SceneError::ReadyCancelled`] otherwise.
    pub async fn wait_for_sketch(&mut self) -> Result<SketchHandle, SceneError> {
        match self.sketch_task.take() {
            Some(task) => task
                .await
                .map_err(|err| SceneError::Engine(format!("sketch task failed: {err}")))?,
            None => self.sketch().ok_or(SceneError::ReadyCancelled),
        }
    }

    /// Tears the map down. A sketch attachment that is still waiting for readiness is
    /// cancelled.
    pub fn unmount(self) {
        info!("Unmounting map {}", self.mount_id);
    }
}

impl Drop for MountedMap {
    fn drop(&mut self) {
        if self.viewport.ready().cancel() {
            debug!(
                "Cancelled pending readiness wait of map {}",
                self.mount_id
            );
        }
    }
}
