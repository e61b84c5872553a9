//! Errors of the crate.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::engine::EngineModule;

/// Error that can occur while mounting a map scene or working with its parts.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The host did not provide a container to mount the viewport into.
    #[error("no container element was provided for the map viewport")]
    MissingContainer,
    /// The selected basemap is served by an endpoint that requires an access credential.
    #[error("basemap '{basemap}' requires an API key, but none is configured")]
    MissingCredential {
        /// Id of the basemap style.
        basemap: &'static str,
    },
    /// One of the engine modules could not be acquired.
    #[error("failed to load engine module {module:?}: {reason}")]
    ModuleLoad {
        /// Module that failed.
        module: EngineModule,
        /// Reason reported by the engine.
        reason: String,
    },
    /// The engine rejected a call.
    #[error("mapping engine error: {0}")]
    Engine(String),
    /// The viewport did not become ready in time.
    #[error("viewport did not become ready within {0:?}")]
    ReadyTimeout(Duration),
    /// Waiting for the viewport was cancelled, usually because the map was unmounted.
    #[error("waiting for the viewport was cancelled")]
    ReadyCancelled,
    /// Geometry type that cannot be shown as a graphic.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),
    /// Popup template could not be filled from the graphic attributes.
    #[error("failed to render popup: {0}")]
    Popup(String),
    /// Basemap id that is not known.
    #[error("unknown basemap '{0}'")]
    UnknownBasemap(String),
    /// The map configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error while loading [`MapConfig`](crate::MapConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The config file is not valid JSON or has fields of wrong types.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// A value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
