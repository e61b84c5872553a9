use log::debug;
use serde::Serialize;

use crate::basemap::BasemapStyle;
use crate::dom::ElementStyle;
use crate::error::SceneError;
use crate::types::Visibility;

/// Panel listing basemap styles the user can switch between.
///
/// Visibility is plain state; how a hidden panel is presented is derived from it
/// (see [`BasemapGallery::css_display`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasemapGallery {
    basemaps: Vec<BasemapStyle>,
    active: BasemapStyle,
    visibility: Visibility,
}

impl BasemapGallery {
    /// Creates a gallery listing all known styles with `active` selected.
    pub fn new(active: BasemapStyle, visibility: Visibility) -> Self {
        Self {
            basemaps: BasemapStyle::ALL.to_vec(),
            active,
            visibility,
        }
    }

    /// Styles listed by the gallery.
    pub fn basemaps(&self) -> &[BasemapStyle] {
        &self.basemaps
    }

    /// Style currently selected in the gallery.
    pub fn active(&self) -> BasemapStyle {
        self.active
    }

    /// Selects a style from the catalogue.
    pub fn select(&mut self, style: BasemapStyle) -> Result<(), SceneError> {
        if !self.basemaps.contains(&style) {
            return Err(SceneError::UnknownBasemap(style.id().to_string()));
        }

        debug!("Basemap gallery selection changed to {style}");
        self.active = style;
        Ok(())
    }

    /// Current visibility of the panel.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true if the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Shows the panel.
    pub fn show(&mut self) {
        self.visibility = Visibility::Visible;
    }

    /// Hides the panel.
    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Flips the visibility and returns the new state.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.flipped();
        self.visibility
    }

    /// CSS `display` value of the panel container.
    pub fn css_display(&self) -> &'static str {
        self.visibility.css_display()
    }

    /// Inline style of the panel container.
    pub fn container_style(&self) -> ElementStyle {
        ElementStyle::new().with("display", self.css_display())
    }

    /// Restricts the catalogue to the given styles. The active style is always kept.
    pub fn with_basemaps(mut self, basemaps: impl IntoIterator<Item = BasemapStyle>) -> Self {
        self.basemaps = basemaps.into_iter().collect();
        if !self.basemaps.contains(&self.active) {
            self.basemaps.insert(0, self.active);
        }

        self
    }
}
