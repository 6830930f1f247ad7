//! Error types for theme parsing and loading.

use std::path::PathBuf;

/// Errors produced while parsing scope names, colors, or theme files.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid theme JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize theme JSON: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("empty component in scope name {name:?}")]
    EmptyScopeComponent { name: String },
    #[error("invalid color {value:?}: expected #rrggbb or #rrggbbaa")]
    InvalidColor { value: String },
}
