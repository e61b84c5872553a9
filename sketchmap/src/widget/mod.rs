//! Auxiliary UI controls attached to a viewport.

mod gallery;
mod scale_bar;
mod sketch;

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

pub use gallery::BasemapGallery;
pub use scale_bar::{ScaleBar, ScaleUnit};
pub use sketch::{CreationMode, SketchWidget};

/// Gallery shared between the viewport UI and the toggle button.
pub type GalleryHandle = Arc<Mutex<BasemapGallery>>;
/// Sketch widget shared between the viewport UI and the host.
pub type SketchHandle = Arc<Mutex<SketchWidget>>;

/// Kind of a widget, used for logging and engine notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Basemap switcher.
    BasemapGallery,
    /// Scale bar.
    ScaleBar,
    /// Free-hand sketch tool.
    Sketch,
}

/// A widget attached to the viewport UI.
#[derive(Debug, Clone)]
pub enum Widget {
    /// Basemap switcher.
    BasemapGallery(GalleryHandle),
    /// Scale bar.
    ScaleBar(ScaleBar),
    /// Free-hand sketch tool.
    Sketch(SketchHandle),
}

impl Widget {
    /// Kind of the widget.
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::BasemapGallery(_) => WidgetKind::BasemapGallery,
            Widget::ScaleBar(_) => WidgetKind::ScaleBar,
            Widget::Sketch(_) => WidgetKind::Sketch,
        }
    }
}
