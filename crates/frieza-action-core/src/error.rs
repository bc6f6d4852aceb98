//! Error types for frieza-action-core

use std::path::Path;
use thiserror::Error;

/// Result type alias using frieza-action-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error taxonomy
///
/// Every stage fails fast: no variant is recovered from locally, the error
/// short-circuits the run and is reported verbatim to the Actions runner.
#[derive(Error, Debug)]
pub enum Error {
    /// Release lookup failed (network or parse)
    #[error("Failed to resolve release: {message}")]
    Resolution { message: String },

    /// No asset name matched the computed platform/architecture/version
    #[error("Could not resolve asset {asset} in release {tag}")]
    AssetNotFound { asset: String, tag: String },

    /// Download or extraction of the release archive failed
    #[error("Failed to fetch archive: {message}")]
    Fetch { message: String },

    /// Expected extracted file missing, or the move to the canonical name failed
    #[error("Unable to move {from} to {to}: {message}")]
    Normalization {
        from: String,
        to: String,
        message: String,
    },

    /// External tool invocation could not start or returned non-zero
    #[error("Command `{command}` failed: {message}")]
    Execution { command: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a release resolution error
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create an asset not found error
    pub fn asset_not_found(asset: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::AssetNotFound {
            asset: asset.into(),
            tag: tag.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a normalization error carrying both endpoints of the move
    pub fn normalization(from: &Path, to: &Path, message: impl Into<String>) -> Self {
        Self::Normalization {
            from: from.display().to_string(),
            to: to.display().to_string(),
            message: message.into(),
        }
    }

    /// Create an execution error
    pub fn execution(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            command: command.into(),
            message: message.into(),
        }
    }
}
