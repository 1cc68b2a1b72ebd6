use std::io;

use thiserror::Error;

/// Application-specific error type for all provisioning operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// No manifest found at the application root.
    #[error("No package.json found in the application directory")]
    MissingManifest,

    /// A manifest was found but could not be parsed.
    #[error("Failed to parse package.json: {0}")]
    MalformedManifest(String),

    /// A config template failed to render.
    #[error("Failed to render '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// An npm invocation failed or returned a non-zero status.
    #[error("npm {command} failed: {details}")]
    NpmError { command: String, details: String },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invariant violation inside the tool itself.
    #[error("{0}")]
    Internal(String),
}
