//! Navigation extension error types.

use thiserror::Error;

/// Errors surfaced by the navigation registries and renderers.
#[derive(Debug, Error)]
pub enum NavError {
    /// No element is registered under the requested id.
    #[error("unknown element `{0}`")]
    UnknownElement(String),

    /// No renderer is registered under the requested id.
    #[error("unknown renderer `{0}`")]
    UnknownRenderer(String),

    /// A deferred renderer reference could not be resolved.
    #[error("cannot resolve renderer reference `{namespace}:{path}`: missing `{segment}`")]
    Resolution {
        namespace: String,
        path: String,
        segment: String,
    },

    /// An element value the renderer cannot interpret, or a navigational
    /// item that failed to serialize.
    #[error("malformed navigation element")]
    MalformedElement(#[from] serde_json::Error),

    /// The navigation extension was never attached to the application.
    #[error("navigation extension is not attached")]
    NotAttached,
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
