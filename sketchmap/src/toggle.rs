//! Button that shows and hides the basemap gallery.

use log::debug;

use crate::dom::{ChildElement, ElementStyle};
use crate::types::Visibility;
use crate::widget::GalleryHandle;

/// Label of the toggle button.
pub const TOGGLE_LABEL: &str = "Toggle Basemap Gallery";

/// Button in the top right corner of the viewport container that flips the gallery visibility.
#[derive(Debug, Clone)]
pub struct ToggleButton {
    gallery: GalleryHandle,
    clicks: u64,
}

impl ToggleButton {
    /// Creates a button bound to the gallery.
    pub fn new(gallery: GalleryHandle) -> Self {
        Self { gallery, clicks: 0 }
    }

    /// Handles a click: flips the gallery between hidden and visible and returns the new state.
    pub fn click(&mut self) -> Visibility {
        self.clicks += 1;
        let visibility = self.gallery.lock().toggle();
        debug!("Basemap gallery toggled to {visibility:?} (click {})", self.clicks);
        visibility
    }

    /// Number of clicks handled so far.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Gallery controlled by the button.
    pub fn gallery(&self) -> &GalleryHandle {
        &self.gallery
    }

    /// Element appended to the viewport container.
    pub fn element(&self) -> ChildElement {
        ChildElement {
            tag: "button",
            text: TOGGLE_LABEL.to_string(),
            style: button_style(),
        }
    }
}

/// Inline style of the button, positioned absolutely above the map.
pub fn button_style() -> ElementStyle {
    ElementStyle::new()
        .with("position", "absolute")
        .with("top", "10px")
        .with("right", "10px")
        .with("z-index", "1")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::basemap::BasemapStyle;
    use crate::widget::BasemapGallery;

    fn hidden_gallery() -> GalleryHandle {
        Arc::new(Mutex::new(BasemapGallery::new(
            BasemapStyle::Topographic,
            Visibility::Hidden,
        )))
    }

    #[test]
    fn visibility_follows_click_parity() {
        for n in 0..7u64 {
            let gallery = hidden_gallery();
            let mut button = ToggleButton::new(gallery.clone());
            for _ in 0..n {
                button.click();
            }

            let expected = if n % 2 == 1 {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            assert_eq!(gallery.lock().visibility(), expected, "after {n} clicks");
            assert_eq!(button.clicks(), n);
        }
    }

    #[test]
    fn button_element() {
        let button = ToggleButton::new(hidden_gallery());
        let element = button.element();
        assert_eq!(element.tag, "button");
        assert_eq!(element.text, "Toggle Basemap Gallery");
        insta::assert_snapshot!(
            element.style.to_css(),
            @"position: absolute; top: 10px; right: 10px; z-index: 1;"
        );
    }
}
