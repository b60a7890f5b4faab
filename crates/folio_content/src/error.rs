//! Content errors

use thiserror::Error;

/// Errors raised while loading or validating profile content
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid TOML for the profile shape
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    /// Content is structurally valid but unusable
    #[error("invalid content: {0}")]
    Invalid(String),
}
