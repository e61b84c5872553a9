//! Popup templates filled from graphic attributes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Template of a popup shown for a graphic. Both the title and the content may reference
/// attributes of the graphic with `{AttributeName}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupTemplate {
    /// Title template.
    pub title: String,
    /// Content template.
    pub content: String,
}

/// Popup with all placeholders substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    /// Rendered title.
    pub title: String,
    /// Rendered content.
    pub content: String,
}

impl PopupTemplate {
    /// Creates a new template.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Substitutes the attribute values into the template.
    pub fn render(&self, attributes: &BTreeMap<String, String>) -> Result<PopupContent, SceneError> {
        let vars: HashMap<String, String> = attributes
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let fill = |template: &str| {
            strfmt::strfmt(template, &vars).map_err(|err| SceneError::Popup(err.to_string()))
        };

        Ok(PopupContent {
            title: fill(&self.title)?,
            content: fill(&self.content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Name".to_string(), "Graphic".to_string()),
            ("Description".to_string(), "I am a polygon".to_string()),
        ])
    }

    #[test]
    fn renders_attributes() {
        let template = PopupTemplate::new("{Name}", "{Description}");
        let popup = template.render(&attributes()).expect("all attributes present");
        assert_eq!(popup.title, "Graphic");
        assert_eq!(popup.content, "I am a polygon");
    }

    #[test]
    fn keeps_plain_text() {
        let template = PopupTemplate::new("Feature: {Name}", "no placeholders");
        let popup = template.render(&attributes()).expect("all attributes present");
        assert_eq!(popup.title, "Feature: Graphic");
        assert_eq!(popup.content, "no placeholders");
    }

    #[test]
    fn missing_attribute_is_an_error() {
        let template = PopupTemplate::new("{Name}", "{Owner}");
        let result = template.render(&attributes());
        assert!(matches!(result, Err(SceneError::Popup(_))));
    }
}
