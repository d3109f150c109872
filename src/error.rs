use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Version error: {0}")]
    Version(#[from] semver::Error),

    #[error("Update check failed: {0}")]
    UpdateCheckFailed(String),

    #[error("Could not open {0}")]
    OpenUrl(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
