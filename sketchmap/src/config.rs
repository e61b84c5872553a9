//! Map configuration.
//!
//! The access credential for the basemap endpoints is never part of the source. It comes from a
//! config file or from the `SKETCHMAP_API_KEY` environment variable.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::basemap::BasemapStyle;
use crate::error::ConfigError;
use crate::types::MapPosition;

/// Environment variable with the path of the config file.
pub const CONFIG_PATH_ENV: &str = "SKETCHMAP_CONFIG";
/// Environment variable with the API key. Overrides the key from the config file.
pub const API_KEY_ENV: &str = "SKETCHMAP_API_KEY";

const MAX_ZOOM: u32 = 24;

/// Access credential of the mapping engine.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration of a mounted map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Credential for the basemap endpoints.
    #[serde(skip_serializing)]
    pub api_key: Option<ApiKey>,
    /// Basemap style the scene is created with.
    pub basemap: BasemapStyle,
    /// Initial center of the viewport.
    pub center: MapPosition,
    /// Initial zoom level.
    pub zoom: u32,
    /// How long to wait for the viewport to become ready before giving up on the sketch tool.
    /// `None` waits forever.
    pub ready_timeout_ms: Option<u64>,
    /// Whether the basemap gallery is shown right after mounting.
    pub gallery_visible: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            basemap: BasemapStyle::Topographic,
            center: MapPosition::new(-118.805, 34.027),
            zoom: 13,
            ready_timeout_ms: Some(30_000),
            gallery_visible: false,
        }
    }
}

impl MapConfig {
    /// Loads the configuration from a JSON file. Missing fields take their default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from the file named by `SKETCHMAP_CONFIG`, or the defaults if the
    /// variable is not set, then applies environment overrides.
    pub fn discover() -> Result<Self, ConfigError> {
        let config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        Ok(config.apply_env_with(|name| env::var(name).ok()))
    }

    /// Applies overrides using the given variable lookup.
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(ApiKey::new(key.trim()));
        }

        self
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    /// Readiness timeout as a duration.
    pub fn ready_timeout(&self) -> Option<Duration> {
        self.ready_timeout_ms.map(Duration::from_millis)
    }

    /// Checks that all values are in their valid ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "zoom level {} is above the maximum of {MAX_ZOOM}",
                self.zoom
            )));
        }

        if !self.center.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "center {:?} is not a valid longitude/latitude pair",
                self.center
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_the_initial_view() {
        let config = MapConfig::default();
        assert_eq!(config.basemap, BasemapStyle::Topographic);
        assert_eq!(config.center, MapPosition::new(-118.805, 34.027));
        assert_eq!(config.zoom, 13);
        assert!(!config.gallery_visible);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let config = MapConfig::default().with_api_key("very-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("ApiKey(***)"));
    }

    #[test]
    fn env_override_replaces_key() {
        let config = MapConfig::default()
            .with_api_key("from-file")
            .apply_env_with(|name| (name == API_KEY_ENV).then(|| " from-env ".to_string()));
        assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some("from-env"));

        let untouched = MapConfig::default()
            .with_api_key("from-file")
            .apply_env_with(|_| Some(String::new()));
        assert_eq!(untouched.api_key.as_ref().map(ApiKey::expose), Some("from-file"));
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "basemap": "osm/standard", "zoom": 10, "ready_timeout_ms": null }}"#
        )
        .expect("write config");

        let config = MapConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.basemap, BasemapStyle::OpenStreetMap);
        assert_eq!(config.zoom, 10);
        assert_eq!(config.ready_timeout(), None);
        assert_eq!(config.center, MapPosition::new(-118.805, 34.027));
    }

    #[test]
    fn rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "zoom": 40 }}"#).expect("write config");
        assert!(matches!(
            MapConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "basemap": "nope" }}"#).expect("write config");
        assert!(matches!(
            MapConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        assert!(matches!(
            MapConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
