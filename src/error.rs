//! Error types

use thiserror::Error;

/// A level asked for a control scheme the hero does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlSchemeError {
    #[error("invalid control type definition: {0} (expected 1, 2 or 3)")]
    Unknown(i32),
}

/// Failures of the native driver while reading its inputs
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
}
