//! On-screen surface bound to a scene.

use log::debug;
use parking_lot::{Mutex, MutexGuard};

use crate::dom::{container_style, ChildElement, ElementStyle};
use crate::ready::ReadySignal;
use crate::scene::Scene;
use crate::types::{MapPosition, UiPosition};
use crate::widget::{Widget, WidgetKind};

/// Host element the viewport is rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<ChildElement>,
}

impl Container {
    /// Creates a handle for the element with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inline style of the container element.
    pub fn style(&self) -> ElementStyle {
        container_style()
    }

    /// Elements appended to the container.
    pub fn children(&self) -> &[ChildElement] {
        &self.children
    }

    /// Appends a child element.
    pub fn append_child(&mut self, element: ChildElement) {
        self.children.push(element);
    }
}

/// Widget attached to the viewport UI at an anchor.
#[derive(Debug, Clone)]
pub struct AttachedWidget {
    /// The widget.
    pub widget: Widget,
    /// Anchor of the widget.
    pub position: UiPosition,
}

/// Viewport: a scene shown in a container with a center and a zoom level.
#[derive(Debug)]
pub struct Viewport {
    container: Mutex<Container>,
    scene: Scene,
    center: MapPosition,
    zoom: u32,
    ready: ReadySignal,
    ui: Mutex<Vec<AttachedWidget>>,
}

impl Viewport {
    /// Creates a viewport. The readiness signal starts pending.
    pub fn new(container: Container, scene: Scene, center: MapPosition, zoom: u32) -> Self {
        Self {
            container: Mutex::new(container),
            scene,
            center,
            zoom,
            ready: ReadySignal::new(),
            ui: Mutex::new(Vec::new()),
        }
    }

    /// Host container.
    pub fn container(&self) -> MutexGuard<'_, Container> {
        self.container.lock()
    }

    /// Scene shown by the viewport.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Center of the view.
    pub fn center(&self) -> MapPosition {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Readiness signal fired by the engine.
    pub fn ready(&self) -> &ReadySignal {
        &self.ready
    }

    /// Attaches a widget at an anchor.
    pub fn attach(&self, widget: Widget, position: UiPosition) {
        debug!(
            "Attaching {:?} widget at {}",
            widget.kind(),
            position.as_str()
        );
        self.ui.lock().push(AttachedWidget { widget, position });
    }

    /// All attached widgets in the order they were attached.
    pub fn widgets(&self) -> Vec<AttachedWidget> {
        self.ui.lock().clone()
    }

    /// Widgets attached at the given anchor.
    pub fn widgets_at(&self, position: UiPosition) -> Vec<Widget> {
        self.ui
            .lock()
            .iter()
            .filter(|attached| attached.position == position)
            .map(|attached| attached.widget.clone())
            .collect()
    }

    /// Number of attached widgets of the given kind.
    pub fn count_of(&self, kind: WidgetKind) -> usize {
        self.ui
            .lock()
            .iter()
            .filter(|attached| attached.widget.kind() == kind)
            .count()
    }
}
