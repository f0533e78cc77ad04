/// Boxed driver error carried by store failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of the document store client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to document store: {0}")]
    Connection(BoxError),
    #[error("failed to read from document store: {0}")]
    Read(BoxError),
    #[error("failed to write to document store: {0}")]
    Write(BoxError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by [`crate::JokeService`].
#[derive(Debug, thiserror::Error)]
pub enum JokeError {
    /// Either field was absent or blank. The two cases are reported identically.
    #[error("title and description are required")]
    Validation,
    #[error("document store unavailable: {0}")]
    Unavailable(#[source] StoreError),
}

pub type JokeResult<T> = std::result::Result<T, JokeError>;

/// Failures while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid {expected}: {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
