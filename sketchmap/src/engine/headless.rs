use std::collections::HashSet;
use std::time::Duration;

use log::{debug, trace, warn};
use parking_lot::Mutex;
use serde::Serialize;

use super::{EngineModule, MapEngine};
use crate::basemap::BasemapStyle;
use crate::config::ApiKey;
use crate::error::SceneError;
use crate::layer::SharedLayer;
use crate::ready::ReadySignal;
use crate::types::{MapPosition, UiPosition};
use crate::viewport::Viewport;
use crate::widget::WidgetKind;

/// Call received by a [`HeadlessEngine`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "kebab-case")]
pub enum EngineCall {
    /// Credential was set. The key itself is not recorded.
    SetCredentials {
        /// Whether a key was given.
        has_key: bool,
    },
    /// A module was requested.
    LoadModule {
        /// Requested module.
        module: EngineModule,
    },
    /// A view was created.
    CreateView {
        /// Basemap of the viewed scene.
        basemap: BasemapStyle,
        /// Center of the view.
        center: MapPosition,
        /// Zoom level.
        zoom: u32,
    },
    /// A layer was registered.
    AddLayer {
        /// Number of graphics in the layer at the time of the call.
        graphics: usize,
    },
    /// A widget was attached.
    AddWidget {
        /// Widget kind.
        kind: WidgetKind,
        /// Its anchor.
        position: UiPosition,
    },
}

/// Engine that renders nothing.
///
/// It records every call it receives, which makes it the engine for tests and for running the
/// scene without a display. Module failures and slow loading can be simulated, and readiness can
/// be left to the caller.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    calls: Mutex<Vec<EngineCall>>,
    failing: HashSet<EngineModule>,
    load_delay: Option<Duration>,
    manual_ready: bool,
    views: Mutex<Vec<ReadySignal>>,
}

impl HeadlessEngine {
    /// Creates an engine that loads every module and reports views ready as soon as they are
    /// created.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes loading of `module` fail.
    pub fn with_failing_module(mut self, module: EngineModule) -> Self {
        self.failing.insert(module);
        self
    }

    /// Makes every module load take `delay`.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = Some(delay);
        self
    }

    /// Leaves firing of readiness to [`HeadlessEngine::fire_ready`].
    pub fn with_manual_ready(mut self) -> Self {
        self.manual_ready = true;
        self
    }

    /// Fires readiness of all views created so far. Returns the number of views that became
    /// ready because of this call.
    pub fn fire_ready(&self) -> usize {
        self.views
            .lock()
            .iter()
            .filter(|signal| signal.mark_ready())
            .count()
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: EngineCall) {
        trace!("Headless engine call: {call:?}");
        self.calls.lock().push(call);
    }
}

#[async_trait::async_trait]
impl MapEngine for HeadlessEngine {
    fn set_credentials(&self, api_key: Option<&ApiKey>) -> Result<(), SceneError> {
        self.record(EngineCall::SetCredentials {
            has_key: api_key.is_some(),
        });
        Ok(())
    }

    async fn load_module(&self, module: EngineModule) -> Result<(), SceneError> {
        self.record(EngineCall::LoadModule { module });

        if let Some(delay) = self.load_delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(&module) {
            warn!("Simulated failure while loading {module:?}");
            return Err(SceneError::ModuleLoad {
                module,
                reason: "simulated failure".to_string(),
            });
        }

        Ok(())
    }

    fn create_view(&self, viewport: &Viewport) -> Result<(), SceneError> {
        self.record(EngineCall::CreateView {
            basemap: viewport.scene().basemap(),
            center: viewport.center(),
            zoom: viewport.zoom(),
        });

        let signal = viewport.ready().clone();
        if !self.manual_ready {
            debug!("Headless view is ready");
            signal.mark_ready();
        }
        self.views.lock().push(signal);

        Ok(())
    }

    fn add_layer(&self, layer: &SharedLayer) -> Result<(), SceneError> {
        let graphics = layer.read().len();
        self.record(EngineCall::AddLayer { graphics });
        Ok(())
    }

    fn add_widget(&self, kind: WidgetKind, position: UiPosition) -> Result<(), SceneError> {
        self.record(EngineCall::AddWidget { kind, position });
        Ok(())
    }
}
