//! Error types for the testkit crate.

/// Errors raised while loading or checking fixtures.
#[derive(Debug, thiserror::Error)]
pub enum TestkitError {
    /// The fixture description could not be parsed.
    #[error("fixture config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// The fixture description parsed but cannot produce inputs.
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Convenience alias for testkit results.
pub type TestkitResult<T> = Result<T, TestkitError>;
