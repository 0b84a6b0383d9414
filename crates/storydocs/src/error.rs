//! CLI error types.

use storydocs_config::ConfigError;
use storydocs_core::ManifestError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown component path: {0}")]
    UnknownComponent(String),

    #[error("Unknown example id: {0}")]
    UnknownExample(String),

    #[error("Components {first} and {second} both map to page file {id}")]
    PageFileConflict {
        first: String,
        second: String,
        id: String,
    },

    #[error("Component path {0:?} has no characters usable in a page file name")]
    EmptyPageId(String),

    #[error("{0}")]
    Validation(String),
}
