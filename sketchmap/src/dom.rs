//! Presentation of the host elements: inline styles and appended child elements.
//!
//! Everything here is derived from scene state and never read back as state.

use serde::Serialize;

/// Ordered list of inline CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementStyle {
    declarations: Vec<(&'static str, String)>,
}

impl ElementStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a declaration.
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Adds or replaces a declaration in place.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the declarations as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Element appended to the viewport container by the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildElement {
    /// Tag name.
    pub tag: &'static str,
    /// Text content.
    pub text: String,
    /// Inline style.
    pub style: ElementStyle,
}

/// Style of the viewport container: fills the page width and the full viewport height.
pub fn container_style() -> ElementStyle {
    ElementStyle::new()
        .with("padding", "0")
        .with("margin", "0")
        .with("height", "100vh")
        .with("width", "100%")
}
